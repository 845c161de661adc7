//! Standard web search tool.
//!
//! A fast, shallow search returning a handful of results.

use rmcp::{handler::server::tool::schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::search::{SearchDepth, SearchRequest};

/// Parameters for the `search` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchParams {
    /// The search query.
    #[schemars(description = "The search query")]
    pub query: String,
}

pub struct SearchTool;

impl SearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Performs a standard, fast search using the Tavily AI search engine. Best for general queries and recent events.";

    /// Shape the outbound payload.
    pub fn build_request(params: SearchParams) -> SearchRequest {
        SearchRequest::new(params.query)
            .with_search_depth(SearchDepth::Basic)
            .with_max_results(5)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<SearchParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
