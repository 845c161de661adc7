//! Search domain module.
//!
//! Everything that talks to the remote Tavily Search API lives here:
//!
//! - `request.rs` - the outbound payload shape
//! - `client.rs` - the [`SearchBackend`] seam and its HTTP implementation
//! - `error.rs` - search failures and the `{"error": ...}` result body

mod client;
mod error;
mod request;

pub use client::{SearchBackend, TavilyClient};
pub use error::{ErrorResult, SearchError, SearchResult};
pub use request::{SearchDepth, SearchRequest};
