//! Direct answer tool.
//!
//! Asks the search engine to include a generated answer alongside results.

use rmcp::{handler::server::tool::schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::search::SearchRequest;

/// Parameters for the `get_direct_answer` tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DirectAnswerParams {
    /// The question to answer.
    #[schemars(description = "The question to answer, e.g. 'What is a borrow checker?'")]
    pub query: String,
}

pub struct DirectAnswerTool;

impl DirectAnswerTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_direct_answer";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Searches for a direct, conversational answer to a user's question. Use this when the user asks a direct question like 'What is...?' or 'How do I...?'.";

    /// Shape the outbound payload.
    pub fn build_request(params: DirectAnswerParams) -> SearchRequest {
        SearchRequest::new(params.query).with_answer()
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<DirectAnswerParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
