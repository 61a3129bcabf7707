//! Conversation sessions: one growing message history per agent, sent
//! through an injected provider with rate-limit backoff.

pub mod backoff;
pub mod conversation;

pub use backoff::BackoffPolicy;
pub use conversation::{ConversationSession, SessionSettings};
