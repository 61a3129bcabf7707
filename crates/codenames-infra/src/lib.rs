//! Infrastructure layer for the Codenames agents.
//!
//! Live provider implementations of the `codenames-core` provider trait,
//! API key lookup, `config.toml` loading and agent construction.

pub mod agents;
pub mod config;
pub mod llm;
pub mod secret;
