//! JSON-RPC method dispatch.
//!
//! [`ProtocolHandler`] is the only place where tool outcomes become JSON-RPC
//! envelopes. It never returns a transport-level failure: parse problems,
//! unknown methods, tool errors and tool panics all come back as a
//! well-formed response.

use futures::FutureExt;
use serde_json::{Value, json};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::message::{
    JSONRPC_VERSION, JsonRpcError, JsonRpcRequest, JsonRpcResponse, METHOD_NOT_FOUND,
    TOOL_EXECUTION_FAILED,
};
use crate::core::backend::EcmBackend;
use crate::core::config::{ProtocolConfig, ServerConfig};
use crate::domains::tools::{Arguments, ToolError, ToolHandler, ToolRegistry, ToolResult};

/// Top-level methods understood by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    ToolsList,
    ToolsCall,
    Health,
}

impl Method {
    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "initialize" => Some(Self::Initialize),
            "tools/list" => Some(Self::ToolsList),
            "tools/call" => Some(Self::ToolsCall),
            "health" => Some(Self::Health),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initialize => "initialize",
            Self::ToolsList => "tools/list",
            Self::ToolsCall => "tools/call",
            Self::Health => "health",
        }
    }
}

/// Dispatches JSON-RPC requests to the tool registry and backend.
pub struct ProtocolHandler {
    registry: Arc<ToolRegistry>,
    backend: Arc<dyn EcmBackend>,
    server: ServerConfig,
    protocol: ProtocolConfig,
}

impl ProtocolHandler {
    pub fn new(
        registry: Arc<ToolRegistry>,
        backend: Arc<dyn EcmBackend>,
        server: ServerConfig,
        protocol: ProtocolConfig,
    ) -> Self {
        Self {
            registry,
            backend,
            server,
            protocol,
        }
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    // ========================================================================
    // Entry points
    // ========================================================================

    /// Handle one raw message. `None` means no response is due.
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => self.handle_value(value).await,
            Err(e) => {
                warn!("Rejecting unparseable message: {}", e);
                Some(JsonRpcResponse::failure(
                    Value::Null,
                    JsonRpcError::parse_error(e),
                ))
            }
        }
    }

    /// Handle one already-parsed message.
    pub async fn handle_value(&self, value: Value) -> Option<JsonRpcResponse> {
        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejecting malformed request: {}", e);
                return Some(JsonRpcResponse::failure(
                    id,
                    JsonRpcError::invalid_request(e),
                ));
            }
        };

        if request.is_notification() {
            debug!("Notification received: {}", request.method);
            return None;
        }
        Some(self.handle_request(request).await)
    }

    /// Handle one request and produce its response.
    #[instrument(skip_all, fields(method = %request.method))]
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.response_id();

        if let Some(version) = request.jsonrpc.as_deref() {
            if version != JSONRPC_VERSION {
                warn!("Unsupported jsonrpc version {:?}", version);
                return JsonRpcResponse::failure(
                    id,
                    JsonRpcError::invalid_request(format!("jsonrpc must be \"{JSONRPC_VERSION}\"")),
                );
            }
        }

        let Some(method) = Method::parse(&request.method) else {
            warn!("Unknown method: {}", request.method);
            return JsonRpcResponse::failure(id, JsonRpcError::method_not_found(&request.method));
        };
        debug!("Dispatching {}", method.as_str());

        let outcome = match method {
            Method::Initialize => Ok(self.initialize_result()),
            Method::ToolsList => self.tools_list_result(),
            Method::ToolsCall => self.tools_call(request.params.as_ref()).await,
            Method::Health => Ok(self.health_status().await),
        };

        match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(error) => JsonRpcResponse::failure(id, error),
        }
    }

    // ========================================================================
    // Methods
    // ========================================================================

    pub fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": self.protocol.version,
            "capabilities": self.protocol.capabilities,
            "serverInfo": {
                "name": self.server.name,
                "version": self.server.version,
            }
        })
    }

    fn tools_list_result(&self) -> Result<Value, JsonRpcError> {
        let tools = serde_json::to_value(self.registry.descriptors())
            .map_err(JsonRpcError::internal)?;
        Ok(json!({ "tools": tools }))
    }

    async fn tools_call(&self, params: Option<&Value>) -> Result<Value, JsonRpcError> {
        let params = match params {
            Some(Value::Object(params)) => params,
            _ => return Err(JsonRpcError::invalid_params("expected an object")),
        };

        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return Err(JsonRpcError::new(
                METHOD_NOT_FOUND,
                "Tool name is required",
            ));
        };

        let empty = Arguments::new();
        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(arguments)) => arguments,
            Some(_) => return Err(JsonRpcError::invalid_params("arguments must be an object")),
        };

        let result = match self.call_tool(name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!("{}", e);
                return Err(JsonRpcError::new(METHOD_NOT_FOUND, e.to_string()));
            }
        };

        result.into_outcome().map_err(|failure| {
            JsonRpcError::new(
                TOOL_EXECUTION_FAILED,
                format!("Tool execution failed: {}", failure.error),
            )
            .with_data(json!({
                "error": failure.error,
                "errorDetails": failure.details,
            }))
        })
    }

    /// Run the named tool. Only an unknown name is an `Err`; everything a
    /// tool reports comes back inside the `ToolResult`.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: &Arguments,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .registry
            .get(name)
            .ok_or_else(|| ToolError::not_found(name))?;
        Ok(Self::execute_tool(tool.as_ref(), arguments).await)
    }

    /// Execute a tool, timing it and converting a panic into a failure.
    pub async fn execute_tool(tool: &dyn ToolHandler, arguments: &Arguments) -> ToolResult {
        info!("Tool call: {}", tool.name());
        let started = Instant::now();

        let result = match AssertUnwindSafe(tool.execute(arguments)).catch_unwind().await {
            Ok(result) => result,
            Err(panic) => {
                let message = panic
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                warn!("Tool '{}' panicked: {}", tool.name(), message);
                ToolResult::failure(
                    format!("Tool panicked: {message}"),
                    Some("panic".to_string()),
                )
            }
        };

        let result = result.with_duration(started.elapsed());
        if result.is_success() {
            info!("Tool '{}' succeeded in {}ms", tool.name(), result.duration_ms().unwrap_or_default());
        } else {
            warn!(
                "Tool '{}' failed: {}",
                tool.name(),
                result.error().unwrap_or_default()
            );
        }
        result
    }

    /// Probe the backend. Always a value, never an error.
    pub async fn health_status(&self) -> Value {
        match self.backend.health().await {
            Ok(ecm) => json!({"status": "healthy", "ecmApi": ecm}),
            Err(e) => {
                warn!("ECM health check failed: {}", e);
                json!({"status": "unhealthy", "error": e.to_string()})
            }
        }
    }
}
