use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::{ServerConfig, TransportMode};
use crate::dispatch::Dispatcher;
use crate::handlers;
use crate::recruitee::{RecruiteeClient, RecruiteeError};
use crate::registry::RegistryError;
use crate::transport::{HttpServer, StdioTransport, TransportError};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Client(#[from] RecruiteeError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// MCP server: one dispatcher, served over whichever transport the
/// configuration selects.
pub struct McpServer {
    config: ServerConfig,
    dispatcher: Arc<Dispatcher>,
}

impl McpServer {
    /// Build the upstream client and the method registry.
    pub fn new(config: ServerConfig) -> Result<Self, ServerError> {
        let client = Arc::new(RecruiteeClient::new(&config.recruitee)?);
        let registry = handlers::build_registry(client)?;
        info!(methods = registry.len(), "method registry ready");

        Ok(Self {
            config,
            dispatcher: Arc::new(Dispatcher::new(Arc::new(registry))),
        })
    }

    pub fn dispatcher(&self) -> Arc<Dispatcher> {
        self.dispatcher.clone()
    }

    pub async fn run(self) -> Result<(), ServerError> {
        match self.config.transport {
            TransportMode::Stdio => {
                info!("starting Recruitee MCP server in stdio mode");
                let dispatcher = Dispatcher::clone(&self.dispatcher);
                let mut transport =
                    StdioTransport::new(dispatcher, tokio::io::stdin(), tokio::io::stdout());
                transport.run().await?;
            }
            TransportMode::Http => {
                info!(
                    addr = %self.config.bind_addr(),
                    "starting Recruitee MCP server in HTTP mode"
                );
                HttpServer::new(self.dispatcher, self.config.bind_addr())
                    .run()
                    .await?;
            }
        }
        Ok(())
    }
}
