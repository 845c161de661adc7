//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Used by the STDIO transport. Every route delegates to
//! [`ToolRegistry::invoke`], so MCP and HTTP callers share one dispatch path.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content, JsonObject},
};

use super::kind::ToolKind;
use super::registry::{ToolOutcome, ToolRegistry};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolKind::ALL
        .into_iter()
        .fold(ToolRouter::new(), |router, kind| {
            router.with_route(create_route(kind, registry.clone()))
        })
}

/// Create a ToolRoute for a single tool.
fn create_route<S>(kind: ToolKind, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(kind.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let arguments = ctx.arguments.clone();
        let registry = registry.clone();
        async move { call_route(&registry, kind, arguments).await }.boxed()
    })
}

/// Body of every MCP tool route. Missing arguments are an empty object.
async fn call_route(
    registry: &ToolRegistry,
    kind: ToolKind,
    arguments: Option<JsonObject>,
) -> Result<CallToolResult, McpError> {
    let params = serde_json::Value::Object(arguments.unwrap_or_default());
    let outcome = registry
        .invoke(kind, Some(params))
        .await
        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
    Ok(to_call_result(outcome))
}

fn to_call_result(outcome: ToolOutcome) -> CallToolResult {
    let is_error = outcome.is_error();
    let content = vec![Content::text(outcome.into_json().to_string())];
    if is_error {
        CallToolResult::error(content)
    } else {
        CallToolResult::success(content)
    }
}
