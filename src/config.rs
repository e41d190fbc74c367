use std::time::Duration;

use thiserror::Error;

use crate::cli::Cli;

pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
pub const DEFAULT_HTTP_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str = "https://api.recruitee.com";

/// Default timeout for upstream API calls (30 seconds).
const DEFAULT_TIMEOUT_SECS: f64 = 30.0;

pub const HTTP_HOST_ENV_VAR: &str = "RECRUITEE_HTTP_HOST";
pub const HTTP_PORT_ENV_VAR: &str = "RECRUITEE_HTTP_PORT";
pub const COMPANY_ID_ENV_VAR: &str = "RECRUITEE_COMPANY_ID";
pub const API_TOKEN_ENV_VAR: &str = "RECRUITEE_API_TOKEN";
pub const BASE_URL_ENV_VAR: &str = "RECRUITEE_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "RECRUITEE_TIMEOUT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("RECRUITEE_COMPANY_ID must be provided (or pass --company-id)")]
    MissingCompanyId,
    #[error("timeout must be a positive number of seconds, got `{0}`")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Http,
    Stdio,
}

/// Access settings for the Recruitee REST API.
#[derive(Debug, Clone, PartialEq)]
pub struct RecruiteeConfig {
    pub company_id: String,
    pub api_token: Option<String>,
    pub base_url: String,
    pub timeout: Duration,
}

impl RecruiteeConfig {
    pub fn new(company_id: impl Into<String>) -> Self {
        Self {
            company_id: company_id.into(),
            api_token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Process-wide configuration, built once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub transport: TransportMode,
    pub host: String,
    pub port: u16,
    pub recruitee: RecruiteeConfig,
}

impl ServerConfig {
    /// Merge command-line flags with environment values.
    ///
    /// Flags win over the environment, which wins over defaults. `env` is the
    /// variable lookup (`|k| std::env::var(k).ok()` in the binary).
    pub fn resolve<F>(cli: &Cli, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let company_id = cli
            .company_id
            .clone()
            .or_else(|| lookup(COMPANY_ID_ENV_VAR))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingCompanyId)?;

        let api_token = cli
            .api_token
            .clone()
            .or_else(|| lookup(API_TOKEN_ENV_VAR))
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| lookup(BASE_URL_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = match (cli.timeout, lookup(TIMEOUT_ENV_VAR)) {
            (Some(secs), _) => secs,
            (None, Some(raw)) => raw
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            (None, None) => DEFAULT_TIMEOUT_SECS,
        };
        let timeout = Duration::try_from_secs_f64(timeout_secs)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or_else(|| ConfigError::InvalidTimeout(timeout_secs.to_string()))?;

        let host = cli
            .host
            .clone()
            .or_else(|| lookup(HTTP_HOST_ENV_VAR))
            .unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string());

        let port = match cli.port {
            Some(port) => port,
            None => port_from_env(lookup(HTTP_PORT_ENV_VAR)),
        };

        Ok(Self {
            transport: if cli.stdio {
                TransportMode::Stdio
            } else {
                TransportMode::Http
            },
            host,
            port,
            recruitee: RecruiteeConfig {
                company_id,
                api_token,
                base_url,
                timeout,
            },
        })
    }

    /// `host:port` string handed to the listener.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

/// An unusable port in the environment is not fatal: warn and use the default.
fn port_from_env(raw: Option<String>) -> u16 {
    let Some(raw) = raw else {
        return DEFAULT_HTTP_PORT;
    };
    match raw.parse::<u16>() {
        Ok(port) => port,
        Err(_) => {
            tracing::warn!(
                "Invalid value for {HTTP_PORT_ENV_VAR}: {raw}. Falling back to {DEFAULT_HTTP_PORT}"
            );
            DEFAULT_HTTP_PORT
        }
    }
}
