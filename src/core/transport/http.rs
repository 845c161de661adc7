//! HTTP transport implementation.
//!
//! Plain JSON endpoints for agents that do not speak MCP:
//!
//! - `POST /tools` - dispatch a tool call
//! - `GET /tools` - list the available tools
//! - `GET /.well-known/ai-plugin.json` - plugin discovery manifest
//! - `GET /health`, `GET /` - liveness and service info

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::SearchServer;
use crate::domains::plugin::{MANIFEST_PATH, PluginManifest};
use crate::domains::tools::ToolError;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// Body of a `POST /tools` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Tool identifier. Any JSON value is accepted so that a missing or
    /// mistyped identifier is answered as an unknown tool.
    #[serde(default)]
    pub tool: Option<Value>,

    /// Tool parameters; missing or `null` means no parameters.
    #[serde(default)]
    pub params: Option<Value>,
}

impl ToolCallRequest {
    /// The identifier to look up: strings as-is, `None` when absent or
    /// `null`, any other value as its JSON text.
    pub fn tool_name(&self) -> String {
        match &self.tool {
            Some(Value::String(name)) => name.clone(),
            None | Some(Value::Null) => "None".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    server: SearchServer,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: SearchServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Tools:    POST /tools");
        info!("  → Manifest: GET {}", MANIFEST_PATH);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum router for the given server.
pub fn build_router(server: SearchServer, enable_cors: bool) -> Router {
    let state = AppState { server };

    let mut app = Router::new()
        .route("/tools", get(list_tools).post(handle_tool_call))
        .route(MANIFEST_PATH, get(plugin_manifest))
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn status_for(err: &ToolError) -> StatusCode {
    match err {
        ToolError::NotFound(_) => StatusCode::NOT_FOUND,
        ToolError::InvalidParameters { .. } => StatusCode::BAD_REQUEST,
    }
}

/// Handle a tool call.
///
/// Failed searches are still answered with 200; only request-shape errors
/// get an error status.
#[instrument(skip_all, fields(tool))]
async fn handle_tool_call(
    State(state): State<AppState>,
    payload: Result<Json<ToolCallRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            warn!("Rejected tool call body: {}", rejection.body_text());
            return error_response(rejection.status(), rejection.body_text());
        }
    };

    let tool = request.tool_name();
    tracing::Span::current().record("tool", tool.as_str());
    info!("Received tool call: {}", tool);

    match state.server.call_tool(&tool, request.params).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome.into_json())).into_response(),
        Err(e) => error_response(status_for(&e), e.to_string()),
    }
}

/// List the available tools.
async fn list_tools(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({ "tools": state.server.list_tools() }))
}

/// Plugin discovery manifest.
async fn plugin_manifest() -> impl IntoResponse {
    Json(PluginManifest::default())
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "tools": "/tools",
            "manifest": MANIFEST_PATH,
            "health": "/health"
        },
        "documentation": "POST /tools with {\"tool\": <name>, \"params\": {...}}"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ToolError::not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ToolError::invalid_parameters("search", "bad")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_tool_call_request_defaults() {
        let request: ToolCallRequest = serde_json::from_str(r#"{"tool": "search"}"#).unwrap();
        assert_eq!(request.tool_name(), "search");
        assert!(request.params.is_none());
    }

    #[test]
    fn test_tool_name_rendering() {
        let name = |body: &str| {
            serde_json::from_str::<ToolCallRequest>(body)
                .unwrap()
                .tool_name()
        };
        assert_eq!(name(r#"{}"#), "None");
        assert_eq!(name(r#"{"tool": null}"#), "None");
        assert_eq!(name(r#"{"tool": 5}"#), "5");
        assert_eq!(name(r#"{"tool": ["search"]}"#), r#"["search"]"#);
    }

    #[test]
    fn test_address() {
        let transport = HttpTransport::new(HttpConfig::default());
        assert_eq!(transport.address(), "127.0.0.1:3434");
    }
}
