//! Tavily Search tool server.
//!
//! Exposes four search tools to calling agents and relays each call as a
//! single request to the Tavily Search API.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool definitions, registry and dispatch
//!   - **search**: the outbound Tavily client
//!   - **plugin**: the plugin discovery manifest
//!
//! # Example
//!
//! ```rust,no_run
//! use tavily_search_server::{Config, SearchServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = SearchServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, SearchServer};
