//! Tools domain module.
//!
//! Tools are the named operations a calling agent can invoke. Each one shapes
//! a fixed search payload and submits it through the search backend.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool definitions (one file per tool)
//! - `kind.rs` - The closed [`ToolKind`] enum and name lookup
//! - `registry.rs` - Tool descriptors and dispatch shared by all transports
//! - `router.rs` - rmcp ToolRouter builder for the STDIO transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a params struct, `NAME`,
//!    `DESCRIPTION`, `build_request()` and `to_tool()`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a `ToolKind` variant and extend its `match` arms

pub mod definitions;
mod error;
mod kind;
mod registry;
pub mod router;

pub use error::ToolError;
pub use kind::ToolKind;
pub use registry::{ToolDescriptor, ToolOutcome, ToolRegistry};
pub use router::build_tool_router;
