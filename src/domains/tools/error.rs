//! Tool-specific error types.
//!
//! The `Display` strings are returned verbatim to callers as
//! `{"error": "..."}` bodies.

use thiserror::Error;

/// Errors raised while resolving a tool call, before any search is made.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool '{0}' not found.")]
    NotFound(String),

    /// The parameters do not match the tool's schema.
    #[error("Invalid parameters for tool '{tool}': {detail}")]
    InvalidParameters { tool: String, detail: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid parameters" error.
    pub fn invalid_parameters(tool: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        Self::InvalidParameters {
            tool: tool.into(),
            detail: detail.to_string(),
        }
    }
}
