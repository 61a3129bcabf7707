//! Pieces shared by both decision engines: the invalid-reply budget and
//! the system prompts every agent session starts from.

pub mod retry;
pub mod rules;

pub use retry::{MAX_INVALID_REPLIES, RetryBudget, RetryState};
