//! LLM provider abstractions for the Codenames agents.
//!
//! - `LlmProvider`: RPITIT trait for concrete provider implementations
//! - `BoxLlmProvider`: Object-safe wrapper for dynamic dispatch
//! - `OfflineProvider`: deterministic canned replies for offline runs and tests

pub mod box_provider;
pub mod mock;
pub mod provider;

#[cfg(test)]
pub(crate) mod testing;
