pub mod candidates;
pub mod initialize;
pub mod offers;
pub mod resources;
pub mod tools;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::HandlerError;
use crate::recruitee::RecruiteeClient;
use crate::registry::{MethodRegistry, MethodSchema, RegistryError};

use self::resources::ReadResource;
use self::tools::{CallTool, Tool, ToolMethod};

/// Build the registry of every method this server answers.
///
/// Protocol methods (`initialize`, `ping`, resource and tool listing) come
/// first; each tool is then also registered under its own name so clients
/// that skip `call_tool` can invoke it directly.
pub fn build_registry(client: Arc<RecruiteeClient>) -> Result<MethodRegistry, RegistryError> {
    let mut registry = MethodRegistry::new();

    registry.register(
        "initialize",
        initialize::initialize,
        MethodSchema::new("Protocol version, server information and capabilities."),
    )?;
    registry.register(
        "ping",
        initialize::ping,
        MethodSchema::new("Liveness check; returns \"pong\"."),
    )?;
    registry.register(
        "list_resources",
        resources::list_resources,
        MethodSchema::new("List readable Recruitee resources."),
    )?;
    registry.register(
        "read_resource",
        ReadResource {
            client: client.clone(),
        },
        MethodSchema::new("Read a Recruitee resource by URI.")
            .with_params(resources::read_resource_schema()),
    )?;
    registry.register(
        "list_tools",
        tools::list_tools,
        MethodSchema::new("List available tools and their input schemas."),
    )?;
    registry.register(
        "call_tool",
        CallTool {
            client: client.clone(),
        },
        MethodSchema::new("Run a tool by name.").with_params(tools::call_tool_schema()),
    )?;

    for tool in Tool::ALL {
        registry.register(
            tool.name(),
            ToolMethod {
                tool,
                client: client.clone(),
            },
            MethodSchema::new(tool.description()).with_params(tool.input_schema()),
        )?;
    }

    Ok(registry)
}

/// Decode handler params into a typed argument struct.
pub(crate) fn parse_args<T: DeserializeOwned>(
    method: &str,
    params: Value,
) -> Result<T, HandlerError> {
    let params = match params {
        Value::Null => json!({}),
        other => other,
    };
    serde_json::from_value(params)
        .map_err(|e| HandlerError::invalid_params(format!("Invalid arguments for {method}: {e}")))
}
