//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The static list of tool descriptors
//! - Dispatch of a tool call through payload shaping and the search backend

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::{info, instrument, warn};

use super::error::ToolError;
use super::kind::ToolKind;
use crate::domains::search::{ErrorResult, SearchBackend};

// ============================================================================
// Descriptors
// ============================================================================

/// Static metadata for one registered tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ToolKind,
}

impl ToolDescriptor {
    fn of(kind: ToolKind) -> Self {
        Self {
            name: kind.name(),
            description: kind.description(),
            kind,
        }
    }

    /// Listing entry: name, description and JSON input schema.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": self.kind.to_tool().input_schema,
        })
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a dispatched tool call.
///
/// Both variants are relayed to HTTP callers with a success status; a failed
/// search is only visible in the body.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// The remote API's JSON body, unmodified.
    Success(Value),

    /// A locally constructed `{"error": ...}` body.
    Failed(ErrorResult),
}

impl ToolOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The JSON body to hand back to the caller.
    pub fn into_json(self) -> Value {
        match self {
            Self::Success(value) => value,
            Self::Failed(result) => result.to_json(),
        }
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - maps tool identifiers to their handlers.
///
/// The set of tools is fixed at compile time; the registry only owns the
/// backend the handlers submit to.
pub struct ToolRegistry {
    backend: Arc<dyn SearchBackend>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given search backend.
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|k| k.name()).collect()
    }

    /// Get every tool descriptor, in listing order.
    pub fn descriptors(&self) -> Vec<ToolDescriptor> {
        ToolKind::ALL.into_iter().map(ToolDescriptor::of).collect()
    }

    /// Resolve a tool identifier by exact match.
    pub fn resolve(&self, name: &str) -> Result<ToolKind, ToolError> {
        ToolKind::from_name(name).ok_or_else(|| {
            warn!("Unknown tool requested: {}", name);
            ToolError::not_found(name)
        })
    }

    /// Run an already-resolved tool.
    ///
    /// Parameter mismatches are returned as [`ToolError`]; everything that
    /// goes wrong after validation (missing credential, remote failure) is
    /// folded into [`ToolOutcome::Failed`].
    #[instrument(skip(self, params), fields(tool = %kind))]
    pub async fn invoke(
        &self,
        kind: ToolKind,
        params: Option<Value>,
    ) -> Result<ToolOutcome, ToolError> {
        let request = kind.build_request(params).inspect_err(|e| {
            warn!("{}", e);
        })?;

        info!("Dispatching {} for query: {}", kind, request.query);

        let outcome = match self.backend.submit(request).await {
            Ok(body) => ToolOutcome::Success(body),
            Err(e) => ToolOutcome::Failed(ErrorResult::from(e)),
        };
        Ok(outcome)
    }

    /// Resolve a tool by name and run it.
    pub async fn call_tool(
        &self,
        name: &str,
        params: Option<Value>,
    ) -> Result<ToolOutcome, ToolError> {
        let kind = self.resolve(name)?;
        self.invoke(kind, params).await
    }
}
