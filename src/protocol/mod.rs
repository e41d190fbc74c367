pub mod request;
pub mod response;

pub use request::{InvalidRequest, JsonRpcRequest, ReadResourceParams, RpcId, ToolCallParams};
pub use response::{
    error_codes, resource_contents, tool_result, JsonContent, JsonRpcError, JsonRpcResponse,
};

/// MCP protocol revision advertised by `initialize` and the discovery manifest.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";
