//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the named operations exposed to agents and their dispatch
//! - **search**: the outbound client for the Tavily Search API
//! - **plugin**: the static plugin discovery manifest

pub mod plugin;
pub mod search;
pub mod tools;
