//! Transport layer for the search server.
//!
//! This module provides different transport implementations:
//! - **HTTP**: plain JSON endpoints (`POST /tools`, plugin manifest) - feature: `http`
//! - **STDIO**: MCP over standard input/output - feature: `stdio`
//!
//! Both transports dispatch through the same tool registry.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "http")]
pub use config::HttpConfig;
