//! Discovery manifest served at `/.well-known/mcp.json`.

use serde::Serialize;
use serde_json::Value;

use crate::protocol::MCP_PROTOCOL_VERSION;
use crate::registry::MethodRegistry;

pub const SERVER_NAME: &str = "recruitee-mcp";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryManifest {
    pub name: &'static str,
    pub version: &'static str,
    pub protocol: &'static str,
    pub protocol_version: &'static str,
    pub endpoint: String,
    pub methods: Vec<MethodEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodEntry {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl DiscoveryManifest {
    /// Build the manifest from the registry's current contents.
    ///
    /// Methods are sorted by name so the document is byte-stable.
    pub fn from_registry(registry: &MethodRegistry, endpoint: &str) -> Self {
        let mut methods: Vec<MethodEntry> = registry
            .list()
            .map(|m| MethodEntry {
                name: m.name().to_string(),
                description: m.schema().description.clone(),
                params: m.schema().params.clone(),
            })
            .collect();
        methods.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            name: SERVER_NAME,
            version: env!("CARGO_PKG_VERSION"),
            protocol: "json-rpc-2.0",
            protocol_version: MCP_PROTOCOL_VERSION,
            endpoint: endpoint.to_string(),
            methods,
        }
    }
}
