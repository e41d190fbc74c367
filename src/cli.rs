use clap::Parser;

/// Command-line flags. Every flag that has an environment counterpart
/// overrides it; see [`crate::config::ServerConfig::resolve`].
#[derive(Parser, Debug, Clone)]
#[command(name = "recruitee-mcp-server")]
#[command(
    about = "Serve Recruitee operations as JSON-RPC 2.0 methods over HTTP or stdio",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Use the stdio transport instead of HTTP
    #[arg(long)]
    pub stdio: bool,

    /// Host interface for the HTTP server (env: RECRUITEE_HTTP_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port for the HTTP server (env: RECRUITEE_HTTP_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Recruitee company identifier (env: RECRUITEE_COMPANY_ID)
    #[arg(long)]
    pub company_id: Option<String>,

    /// Recruitee API token (env: RECRUITEE_API_TOKEN)
    #[arg(long)]
    pub api_token: Option<String>,

    /// Recruitee API base URL (env: RECRUITEE_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Upstream request timeout in seconds (env: RECRUITEE_TIMEOUT)
    #[arg(long)]
    pub timeout: Option<f64>,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Shorthand for --log-level debug
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_filter(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}
