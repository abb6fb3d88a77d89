//! MCP server and lifecycle management.
//!
//! [`McpServer`] owns the wiring: the ECM backend client, the tool registry
//! built over it and the protocol handler that every transport feeds
//! messages into. It is cheap to clone; all state sits behind `Arc`s.

use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::backend::{EcmApiClient, EcmBackend};
use super::config::Config;
use super::error::Result;
use super::protocol::{JsonRpcRequest, JsonRpcResponse, ProtocolHandler};
use crate::domains::tools::{
    Arguments, ToolDescriptor, ToolError, ToolRegistry, ToolResult, build_tool_registry,
};

/// The ECM MCP gateway.
#[derive(Clone)]
pub struct McpServer {
    config: Arc<Config>,
    registry: Arc<ToolRegistry>,
    backend: Arc<dyn EcmBackend>,
    protocol: Arc<ProtocolHandler>,
}

impl McpServer {
    /// Create a server talking to the ECM API described by `config.ecm`.
    pub fn new(config: Config) -> Result<Self> {
        let client = EcmApiClient::new(&config.ecm)?;
        Ok(Self::with_backend(config, Arc::new(client)))
    }

    /// Create a server over an arbitrary backend.
    pub fn with_backend(config: Config, backend: Arc<dyn EcmBackend>) -> Self {
        let registry = Arc::new(build_tool_registry(&backend));
        let protocol = Arc::new(ProtocolHandler::new(
            registry.clone(),
            backend.clone(),
            config.server.clone(),
            config.protocol.clone(),
        ));

        info!(
            "{} ready with {} tools",
            config.server.name,
            registry.count()
        );
        Self {
            config: Arc::new(config),
            registry,
            backend,
            protocol,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn registry(&self) -> &Arc<ToolRegistry> {
        &self.registry
    }

    pub fn backend(&self) -> &Arc<dyn EcmBackend> {
        &self.backend
    }

    /// Dispatch one parsed request.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        self.protocol.handle_request(request).await
    }

    /// Dispatch one raw message; `None` for notifications.
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        self.protocol.handle_message(raw).await
    }

    /// Dispatch one JSON value; `None` for notifications.
    pub async fn handle_value(&self, value: Value) -> Option<JsonRpcResponse> {
        self.protocol.handle_value(value).await
    }

    // ========================================================================
    // Direct access used by the HTTP convenience routes
    // ========================================================================

    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.registry.descriptors()
    }

    pub fn tool(&self, name: &str) -> Option<ToolDescriptor> {
        self.registry.get(name).map(|tool| tool.descriptor())
    }

    pub async fn call_tool(
        &self,
        name: &str,
        arguments: &Arguments,
    ) -> std::result::Result<ToolResult, ToolError> {
        self.protocol.call_tool(name, arguments).await
    }

    /// `{status: "healthy", ecmApi}` or `{status: "unhealthy", error}`.
    pub async fn backend_health(&self) -> Value {
        self.protocol.health_status().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::testing::RecordingBackend;
    use serde_json::json;

    fn server() -> McpServer {
        McpServer::with_backend(Config::default(), Arc::new(RecordingBackend::new()))
    }

    #[test]
    fn test_server_identity() {
        let server = server();
        assert_eq!(server.name(), "ecm-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
        assert_eq!(server.list_tools().len(), 12);
    }

    #[test]
    fn test_new_rejects_unusable_base_url() {
        let mut config = Config::default();
        config.ecm.base_url = "not a url".to_string();
        assert!(McpServer::new(config).is_err());
    }

    #[test]
    fn test_new_builds_real_client() {
        let mut config = Config::default();
        config.ecm.base_url = "https://ecm.example.com/api".to_string();
        let server = McpServer::new(config).unwrap();
        assert_eq!(server.registry().count(), 12);
    }

    #[test]
    fn test_tool_lookup() {
        let server = server();
        let descriptor = server.tool("ecm_get_document").unwrap();
        assert_eq!(descriptor.name, "ecm_get_document");
        assert!(server.tool("missing").is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let server = server();
        let clone = server.clone();
        assert!(Arc::ptr_eq(server.registry(), clone.registry()));

        let response = clone
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"health"}"#)
            .await
            .unwrap();
        assert_eq!(response.result().unwrap()["status"], "healthy");
    }

    #[tokio::test]
    async fn test_call_tool_unknown() {
        let err = server()
            .call_tool("nope", &Arguments::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
        assert_eq!(
            server().backend_health().await,
            json!({"status": "healthy", "ecmApi": {"status": "UP"}})
        );
    }
}
