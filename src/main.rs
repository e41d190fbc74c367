use std::process::ExitCode;

use clap::Parser;
use recruitee_mcp_server::cli::Cli;
use recruitee_mcp_server::config::ServerConfig;
use recruitee_mcp_server::server::McpServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries protocol traffic in stdio mode, so logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    let config = match ServerConfig::resolve(&cli, |key| std::env::var(key).ok()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let server = match McpServer::new(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("startup failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("fatal error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
