//! The closed set of tools this server exposes.

use rmcp::model::Tool;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::definitions::{DeepSearchTool, DirectAnswerTool, DomainSearchTool, SearchTool};
use super::error::ToolError;
use crate::domains::search::SearchRequest;

/// One of the four registered tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Search,
    DeepSearch,
    DirectAnswer,
    DomainSearch,
}

impl ToolKind {
    /// Every tool, in listing order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Search,
        ToolKind::DeepSearch,
        ToolKind::DirectAnswer,
        ToolKind::DomainSearch,
    ];

    /// Look a tool up by its exact identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            SearchTool::NAME => Some(Self::Search),
            DeepSearchTool::NAME => Some(Self::DeepSearch),
            DirectAnswerTool::NAME => Some(Self::DirectAnswer),
            DomainSearchTool::NAME => Some(Self::DomainSearch),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Search => SearchTool::NAME,
            Self::DeepSearch => DeepSearchTool::NAME,
            Self::DirectAnswer => DirectAnswerTool::NAME,
            Self::DomainSearch => DomainSearchTool::NAME,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Search => SearchTool::DESCRIPTION,
            Self::DeepSearch => DeepSearchTool::DESCRIPTION,
            Self::DirectAnswer => DirectAnswerTool::DESCRIPTION,
            Self::DomainSearch => DomainSearchTool::DESCRIPTION,
        }
    }

    /// MCP metadata, including the JSON schema of the parameters.
    pub fn to_tool(self) -> Tool {
        match self {
            Self::Search => SearchTool::to_tool(),
            Self::DeepSearch => DeepSearchTool::to_tool(),
            Self::DirectAnswer => DirectAnswerTool::to_tool(),
            Self::DomainSearch => DomainSearchTool::to_tool(),
        }
    }

    /// Validate `params` against this tool's schema and shape the payload.
    ///
    /// `None` and `null` count as an empty parameter object.
    pub fn build_request(self, params: Option<Value>) -> Result<SearchRequest, ToolError> {
        let params = match params {
            None | Some(Value::Null) => Value::Object(Default::default()),
            Some(Value::Object(map)) => Value::Object(map),
            Some(_) => {
                return Err(ToolError::invalid_parameters(
                    self.name(),
                    "params must be a JSON object",
                ));
            }
        };

        let request = match self {
            Self::Search => SearchTool::build_request(self.parse(params)?),
            Self::DeepSearch => DeepSearchTool::build_request(self.parse(params)?),
            Self::DirectAnswer => DirectAnswerTool::build_request(self.parse(params)?),
            Self::DomainSearch => DomainSearchTool::build_request(self.parse(params)?),
        };
        Ok(request)
    }

    fn parse<P: DeserializeOwned>(self, params: Value) -> Result<P, ToolError> {
        serde_json::from_value(params).map_err(|e| ToolError::invalid_parameters(self.name(), e))
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_names_round_trip() {
        for kind in ToolKind::ALL {
            assert_eq!(ToolKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ToolKind::from_name("Search"), None);
        assert_eq!(ToolKind::from_name("unknown_tool"), None);
    }

    #[test]
    fn test_payload_table() {
        let cases = [
            (
                ToolKind::Search,
                json!({ "query": "q" }),
                json!({ "query": "q", "search_depth": "basic", "max_results": 5 }),
            ),
            (
                ToolKind::DeepSearch,
                json!({ "query": "q" }),
                json!({ "query": "q", "search_depth": "advanced", "max_results": 8 }),
            ),
            (
                ToolKind::DirectAnswer,
                json!({ "query": "q" }),
                json!({ "query": "q", "include_answer": true }),
            ),
            (
                ToolKind::DomainSearch,
                json!({ "query": "q", "domains": ["docs.rs"] }),
                json!({ "query": "q", "include_domains": ["docs.rs"], "max_results": 5 }),
            ),
        ];

        for (kind, params, expected) in cases {
            let request = kind.build_request(Some(params)).unwrap();
            assert_eq!(serde_json::to_value(&request).unwrap(), expected, "{}", kind);
            assert!(!request.has_api_key());
        }
    }

    #[test]
    fn test_missing_params_is_invalid() {
        let err = ToolKind::Search.build_request(None).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameters { .. }));
        assert!(err.to_string().contains("missing field `query`"));
    }

    #[test]
    fn test_non_object_params_rejected() {
        let err = ToolKind::Search
            .build_request(Some(json!(["hello"])))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid parameters for tool 'search': params must be a JSON object"
        );
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = ToolKind::DomainSearch
            .build_request(Some(json!({ "query": "x", "domains": "a.com" })))
            .unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Invalid parameters for tool 'search_specific_domains'")
        );
    }
}
