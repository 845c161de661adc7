//! Deep web search tool.
//!
//! Runs the advanced search depth and returns more results than `search`.

use rmcp::{handler::server::tool::schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::search::{SearchDepth, SearchRequest};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DeepSearchParams {
    /// The search query.
    #[schemars(description = "The search query")]
    pub query: String,
}

pub struct DeepSearchTool;

impl DeepSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "deep_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Performs a comprehensive, in-depth search using the Tavily AI search engine. Slower but more thorough. Use for research or complex topics.";

    pub fn build_request(params: DeepSearchParams) -> SearchRequest {
        SearchRequest::new(params.query)
            .with_search_depth(SearchDepth::Advanced)
            .with_max_results(8)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DeepSearchParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
