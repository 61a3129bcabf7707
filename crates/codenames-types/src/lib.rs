//! Shared domain types for the Codenames agents.
//!
//! Board state, roles, strategies, clues and guesses; the LLM conversation
//! and provider configuration shapes; and the error enums shared by the
//! decision engines.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod game;
pub mod llm;
