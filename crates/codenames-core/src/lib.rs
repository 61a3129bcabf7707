//! Turn-decision engine for the Codenames agents.
//!
//! Holds the provider seam ([`llm::provider::LlmProvider`]), the
//! conversation session that talks through it, the reply parser and the
//! codemaster and guesser engines. It depends only on `codenames-types`;
//! live providers and config loading live in `codenames-infra`.

pub mod codemaster;
pub mod decision;
pub mod guesser;
pub mod llm;
pub mod reply;
pub mod session;
