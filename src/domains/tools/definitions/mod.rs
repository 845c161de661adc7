//! Tool definitions module.
//!
//! Each tool is defined in its own file: its parameter schema, the fixed
//! payload shape it sends to the search API, and its MCP metadata.

pub mod deep_search;
pub mod direct_answer;
pub mod domain_search;
pub mod search;

pub use deep_search::{DeepSearchParams, DeepSearchTool};
pub use direct_answer::{DirectAnswerParams, DirectAnswerTool};
pub use domain_search::{DomainSearchParams, DomainSearchTool};
pub use search::{SearchParams, SearchTool};
