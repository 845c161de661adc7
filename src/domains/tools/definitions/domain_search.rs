//! Domain-scoped search tool.
//!
//! Restricts results to a caller-supplied list of websites. The list is
//! forwarded as-is; the remote API decides what a valid domain looks like.

use rmcp::{handler::server::tool::schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::search::SearchRequest;

/// Parameters for the `search_specific_domains` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DomainSearchParams {
    /// The search query.
    #[schemars(description = "The search query")]
    pub query: String,

    /// Websites to search within.
    #[schemars(description = "Domains to restrict the search to, e.g. [\"docs.rs\", \"github.com\"]")]
    pub domains: Vec<String>,
}

pub struct DomainSearchTool;

impl DomainSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_specific_domains";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Performs a search focused only on a specific list of domains. Provide the query and a list of websites to search within.";

    /// Shape the outbound payload.
    pub fn build_request(params: DomainSearchParams) -> SearchRequest {
        SearchRequest::new(params.query)
            .with_domains(params.domains)
            .with_max_results(5)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DomainSearchParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
