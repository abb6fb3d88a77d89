//! JSON-RPC protocol layer shared by every transport.

mod handler;
mod message;

pub use handler::{Method, ProtocolHandler};
pub use message::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND, PARSE_ERROR, ResponsePayload,
    TOOL_EXECUTION_FAILED,
};
