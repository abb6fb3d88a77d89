//! HTTP transport implementation.
//!
//! JSON-RPC over POST, plus a few REST routes for operators and clients that
//! do not speak JSON-RPC:
//!
//! | Route                    | Purpose                                   |
//! |--------------------------|-------------------------------------------|
//! | `POST <rpc_path>`        | JSON-RPC envelope in, envelope out        |
//! | `GET /health`            | ECM backend probe (`UP` / `DOWN`)         |
//! | `GET /mcp/health`        | registry summary                          |
//! | `GET /mcp/tools`         | all tool descriptors                      |
//! | `GET /mcp/tools/{name}`  | one descriptor, or 404                    |
//! | `POST /mcp/execute`      | run a tool, returning the full ToolResult |
//! | `GET /`                  | server info                               |

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use http::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{TransportConfig, TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::protocol::{JsonRpcError, JsonRpcResponse};
use crate::domains::tools::{Arguments, ToolError, ToolResult};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
struct AppState {
    server: McpServer,
    rpc_path: String,
}

/// Body of `POST /mcp/execute`.
#[derive(Debug, Deserialize)]
struct ExecuteRequest {
    #[serde(default)]
    id: Option<Value>,
    params: ExecuteParams,
}

#[derive(Debug, Deserialize)]
struct ExecuteParams {
    name: String,
    #[serde(default)]
    arguments: Option<Arguments>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Create from TransportConfig (extracts HTTP config).
    pub fn from_transport_config(config: &TransportConfig) -> Option<Self> {
        match config {
            TransportConfig::Http(http_config) => Some(Self::new(http_config.clone())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = router(server, &self.config);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");
        info!("  → Tools:    GET /mcp/tools, POST /mcp/execute");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum router for `server`.
pub fn router(server: McpServer, config: &HttpConfig) -> Router {
    let state = AppState {
        server,
        rpc_path: config.rpc_path.clone(),
    };

    let mut app = Router::new()
        .route(&config.rpc_path, post(handle_rpc))
        .route("/health", get(backend_health))
        .route("/mcp/health", get(registry_health))
        .route("/mcp/tools", get(list_tools))
        .route("/mcp/tools/{name}", get(get_tool))
        .route("/mcp/execute", post(execute_tool))
        .route("/", get(root_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }
    app
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "endpoints": {
            "rpc": state.rpc_path,
            "health": "/health",
            "toolHealth": "/mcp/health",
            "tools": "/mcp/tools",
            "execute": "/mcp/execute"
        }
    }))
}

/// Probe the ECM backend.
async fn backend_health(State(state): State<AppState>) -> impl IntoResponse {
    let probe = state.server.backend_health().await;
    let status = if probe["status"] == "healthy" {
        "UP"
    } else {
        "DOWN"
    };
    let mut body = json!({
        "status": status,
        "server": state.server.name(),
    });
    for key in ["ecmApi", "error"] {
        if let Some(value) = probe.get(key) {
            body[key] = value.clone();
        }
    }
    Json(body)
}

async fn registry_health(State(state): State<AppState>) -> impl IntoResponse {
    let tools = state.server.registry().names();
    Json(json!({
        "status": "UP",
        "toolCount": tools.len(),
        "tools": tools,
    }))
}

async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.server.list_tools())
}

async fn get_tool(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.server.tool(&name) {
        Some(descriptor) => Json(descriptor).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": ToolError::not_found(name).to_string()})),
        )
            .into_response(),
    }
}

/// Run a tool directly, answering with the whole `ToolResult`.
#[instrument(skip_all)]
async fn execute_tool(
    State(state): State<AppState>,
    Json(request): Json<ExecuteRequest>,
) -> Response {
    let ExecuteRequest { id, params } = request;
    let arguments = params.arguments.unwrap_or_default();

    let (status, result) = match state.server.call_tool(&params.name, &arguments).await {
        Ok(result) if result.is_success() => (StatusCode::OK, result),
        Ok(result) => (StatusCode::INTERNAL_SERVER_ERROR, result),
        Err(e) => {
            warn!("{}", e);
            (StatusCode::NOT_FOUND, ToolResult::from_error(&e))
        }
    };

    let mut body = match serde_json::to_value(&result) {
        Ok(body) => body,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": e.to_string()})),
            )
                .into_response();
        }
    };
    if let Some(id) = id {
        body["id"] = id;
    }
    (status, Json(body)).into_response()
}

/// Handle one JSON-RPC envelope. Always HTTP 200 when a response is due.
#[instrument(skip_all)]
async fn handle_rpc(State(state): State<AppState>, body: Bytes) -> Response {
    let response = match std::str::from_utf8(&body) {
        Ok(raw) => state.server.handle_message(raw).await,
        Err(e) => Some(JsonRpcResponse::failure(
            Value::Null,
            JsonRpcError::parse_error(e),
        )),
    };

    match response {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::core::backend::testing::RecordingBackend;
    use axum::body::Body;
    use http::{Request, header};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn config() -> HttpConfig {
        HttpConfig {
            port: 0,
            host: "127.0.0.1".to_string(),
            rpc_path: "/mcp/message".to_string(),
            enable_cors: true,
        }
    }

    fn app_with(backend: RecordingBackend) -> Router {
        let server = McpServer::with_backend(Config::default(), Arc::new(backend));
        router(server, &config())
    }

    fn app() -> Router {
        app_with(RecordingBackend::new())
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_rpc_round_trip() {
        let (status, body) = send(
            app(),
            post_json(
                "/mcp/message",
                json!({"jsonrpc": "2.0", "id": 1, "method": "tools/list"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 1);
        assert_eq!(body["result"]["tools"].as_array().unwrap().len(), 12);
    }

    #[tokio::test]
    async fn test_rpc_errors_still_return_200() {
        let request = Request::post("/mcp/message")
            .body(Body::from("{oops"))
            .unwrap();
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"]["code"], -32700);

        let (status, body) = send(
            app(),
            post_json(
                "/mcp/message",
                json!({"jsonrpc": "2.0", "id": "t", "method": "tools/call",
                       "params": {"name": "ecm_get_document", "arguments": {}}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["error"]["code"], -32000);
    }

    #[tokio::test]
    async fn test_rpc_notification_has_no_body() {
        let (status, body) = send(
            app(),
            post_json(
                "/mcp/message",
                json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn test_backend_health_up_and_down() {
        let (status, body) = send(app(), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "UP");
        assert_eq!(body["server"], "ecm-mcp-server");
        assert_eq!(body["ecmApi"]["status"], "UP");

        let down = app_with(RecordingBackend::failing(503, "ECM API health check failed"));
        let (_, body) = send(down, get("/health")).await;
        assert_eq!(body["status"], "DOWN");
        assert_eq!(body["error"], "ECM API health check failed");
        assert!(body.get("ecmApi").is_none());
    }

    #[tokio::test]
    async fn test_registry_health() {
        let (_, body) = send(app(), get("/mcp/health")).await;
        assert_eq!(body["status"], "UP");
        assert_eq!(body["toolCount"], 12);
        assert!(
            body["tools"]
                .as_array()
                .unwrap()
                .contains(&json!("ecm_get_document"))
        );
    }

    #[tokio::test]
    async fn test_tool_routes() {
        let (status, body) = send(app(), get("/mcp/tools")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 12);

        let (status, body) = send(app(), get("/mcp/tools/ecm_get_versions")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "ecm_get_versions");
        assert!(body["inputSchema"].is_object());

        let (status, body) = send(app(), get("/mcp/tools/missing")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Tool not found: missing");
    }

    #[tokio::test]
    async fn test_execute_status_codes() {
        let ok = app_with(
            RecordingBackend::new().with_response("get_document", json!({"id": "d1"})),
        );
        let (status, body) = send(
            ok,
            post_json(
                "/mcp/execute",
                json!({"id": "e1", "params": {"name": "ecm_get_document",
                                              "arguments": {"documentId": "d1"}}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], "d1");
        assert_eq!(body["id"], "e1");

        let (status, body) = send(
            app(),
            post_json(
                "/mcp/execute",
                json!({"params": {"name": "ecm_get_document", "arguments": {}}}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "documentId is required");

        let (status, body) = send(
            app(),
            post_json("/mcp/execute", json!({"params": {"name": "nope"}})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorDetails"], "NotFound");
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let (_, body) = send(app(), get("/")).await;
        assert_eq!(body["name"], "ecm-mcp-server");
        assert_eq!(body["endpoints"]["rpc"], "/mcp/message");
    }
}
