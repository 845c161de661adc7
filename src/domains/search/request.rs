//! Outbound request payload for the Tavily `/search` endpoint.

use serde::{Deserialize, Serialize};

/// How much effort the search engine spends on a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

/// JSON body sent to the remote search API.
///
/// Optional fields that are `None` are left out of the serialized payload so
/// the remote API applies its own defaults. `api_key` is only ever set by the
/// client right before submission.
#[derive(Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_depth: Option<SearchDepth>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_answer: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_domains: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) api_key: Option<String>,
}

impl SearchRequest {
    /// Create a request carrying only the query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            search_depth: None,
            max_results: None,
            include_answer: None,
            include_domains: None,
            api_key: None,
        }
    }

    pub fn with_search_depth(mut self, depth: SearchDepth) -> Self {
        self.search_depth = Some(depth);
        self
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_answer(mut self) -> Self {
        self.include_answer = Some(true);
        self
    }

    pub fn with_domains(mut self, domains: Vec<String>) -> Self {
        self.include_domains = Some(domains);
        self
    }

    /// Whether a credential has been attached.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchRequest")
            .field("query", &self.query)
            .field("search_depth", &self.search_depth)
            .field("max_results", &self.max_results)
            .field("include_answer", &self.include_answer)
            .field("include_domains", &self.include_domains)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
