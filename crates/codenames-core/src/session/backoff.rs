//! Exponential backoff with jitter for rate-limited provider calls.

use std::time::Duration;

use codenames_types::config::TransportConfig;

/// How often and how long to wait when a provider pushes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackoffPolicy {
    /// Total attempts per exchange, including the first.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_jitter: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::from_config(&TransportConfig::default())
    }
}

impl BackoffPolicy {
    pub fn from_config(config: &TransportConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: config.base_delay(),
            max_jitter: config.max_jitter(),
        }
    }

    /// Zero-delay policy, mostly for tests and offline runs.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay: Duration::ZERO,
            max_jitter: Duration::ZERO,
        }
    }

    /// Whether a failure on the zero-based `attempt` leaves room for another try.
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt + 1 < self.max_attempts
    }

    /// Delay before retrying after the zero-based `attempt` failed.
    ///
    /// `base_delay * 2^attempt` plus `jitter_fraction` (clamped to `[0, 1]`)
    /// of `max_jitter`. A provider `retry_after` hint is a lower bound.
    pub fn delay_for(
        &self,
        attempt: u32,
        jitter_fraction: f64,
        retry_after: Option<Duration>,
    ) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        let exponential = self.base_delay.saturating_mul(factor);
        let jitter = self.max_jitter.mul_f64(jitter_fraction.clamp(0.0, 1.0));
        let delay = exponential.saturating_add(jitter);
        match retry_after {
            Some(hint) => delay.max(hint),
            None => delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_transport_defaults() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.base_delay, Duration::from_secs(1));
        assert_eq!(policy.max_jitter, Duration::from_secs(1));
    }

    #[test]
    fn test_delay_doubles_per_attempt() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay_for(0, 0.0, None), Duration::from_secs(1));
        assert_eq!(policy.delay_for(1, 0.0, None), Duration::from_secs(2));
        assert_eq!(policy.delay_for(3, 0.0, None), Duration::from_secs(8));
    }

    #[test]
    fn test_jitter_is_bounded() {
        let policy = BackoffPolicy::default();
        assert_eq!(policy.delay_for(0, 0.5, None), Duration::from_millis(1500));
        assert_eq!(policy.delay_for(0, 7.0, None), Duration::from_secs(2));
        assert_eq!(policy.delay_for(0, -1.0, None), Duration::from_secs(1));
    }

    #[test]
    fn test_retry_after_is_a_floor() {
        let policy = BackoffPolicy::default();
        let hint = Some(Duration::from_secs(30));
        assert_eq!(policy.delay_for(0, 0.0, hint), Duration::from_secs(30));
        let small = Some(Duration::from_millis(10));
        assert_eq!(policy.delay_for(2, 0.0, small), Duration::from_secs(4));
    }

    #[test]
    fn test_huge_attempt_saturates() {
        let policy = BackoffPolicy::default();
        assert!(policy.delay_for(64, 1.0, None) >= Duration::from_secs(u32::MAX as u64));
    }

    #[test]
    fn test_should_retry_counts_total_attempts() {
        let policy = BackoffPolicy::immediate(3);
        assert!(policy.should_retry(0));
        assert!(policy.should_retry(1));
        assert!(!policy.should_retry(2));
        assert!(!BackoffPolicy::immediate(0).should_retry(0));
    }
}
