//! Bounded retry for replies that fail to parse or validate.
//!
//! Transport failures are handled inside the session; this budget only
//! counts replies that arrived but could not be used.

/// Invalid replies tolerated per decision before falling back.
pub const MAX_INVALID_REPLIES: u32 = 10;

/// What to do after recording an invalid reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryState {
    /// Ask the model again.
    Retry,
    /// Stop asking and use the fallback action.
    Exhausted,
}

/// Per-decision counter of invalid replies. Create a fresh one per call.
#[derive(Debug, Clone)]
pub struct RetryBudget {
    failures: u32,
    limit: u32,
}

impl Default for RetryBudget {
    fn default() -> Self {
        Self::standard()
    }
}

impl RetryBudget {
    pub fn new(limit: u32) -> Self {
        Self { failures: 0, limit }
    }

    pub fn standard() -> Self {
        Self::new(MAX_INVALID_REPLIES)
    }

    /// Count one invalid reply. The budget is exhausted once failures
    /// exceed the limit, so the fallback follows the 11th failure.
    pub fn record_failure(&mut self) -> RetryState {
        self.failures += 1;
        if self.failures > self.limit {
            RetryState::Exhausted
        } else {
            RetryState::Retry
        }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}
