//! Search server implementation and lifecycle management.
//!
//! [`SearchServer`] owns the tool registry and implements the MCP
//! `ServerHandler` trait. The HTTP transport calls into the same registry
//! through [`SearchServer::call_tool`].

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use super::error;
use crate::domains::search::{SearchBackend, TavilyClient};
use crate::domains::tools::{
    ToolDescriptor, ToolError, ToolOutcome, ToolRegistry, build_tool_router,
};

/// The main server handler.
#[derive(Clone)]
pub struct SearchServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry dispatching tool calls to the search backend.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling MCP tool calls.
    tool_router: ToolRouter<Self>,
}

impl SearchServer {
    /// Create a server backed by the Tavily HTTP client.
    pub fn new(config: Config) -> error::Result<Self> {
        let client = TavilyClient::new(&config)?;
        Ok(Self::with_backend(config, Arc::new(client)))
    }

    /// Create a server over any search backend.
    pub fn with_backend(config: Config, backend: Arc<dyn SearchBackend>) -> Self {
        let registry = Arc::new(ToolRegistry::new(backend));

        Self {
            tool_router: build_tool_router::<Self>(registry.clone()),
            config: Arc::new(config),
            registry,
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

    /// List all available tools as JSON (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.registry
            .descriptors()
            .iter()
            .map(ToolDescriptor::to_json)
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    pub async fn call_tool(
        &self,
        name: &str,
        params: Option<serde_json::Value>,
    ) -> Result<ToolOutcome, ToolError> {
        self.registry.call_tool(name, params).await
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for SearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server provides tools to search the web using the Tavily AI search engine. \
                 Use it to find current information."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_default_config() {
        let server = SearchServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "tavily-search");
        assert_eq!(server.list_tools().len(), 4);
    }

    #[test]
    fn test_listing_matches_router() {
        let server = SearchServer::new(Config::default()).unwrap();
        let listed: Vec<_> = server
            .list_tools()
            .into_iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();
        let mut routed: Vec<_> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        routed.sort();
        let mut sorted = listed.clone();
        sorted.sort();

        assert_eq!(listed[0], "search");
        assert_eq!(sorted, routed);
    }

    #[test]
    fn test_new_rejects_bad_endpoint() {
        let mut config = Config::default();
        config.search.endpoint = "::not-a-url".to_string();
        assert!(SearchServer::new(config).is_err());
    }

    #[test]
    fn test_info_enables_tools() {
        let server = SearchServer::new(Config::default()).unwrap();
        let info = server.get_info();
        assert!(info.capabilities.tools.is_some());
    }
}
