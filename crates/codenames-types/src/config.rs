//! Configuration types for the Codenames agents.
//!
//! `AgentsConfig` mirrors `config.toml`: which provider to talk to, how
//! hard to retry the transport, and which strategy each role plays.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::game::{Strategy, Team};
use crate::llm::ProviderConfig;

/// Top-level agent configuration. All fields have defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// Team the agents play for.
    #[serde(default)]
    pub team: Team,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub codemaster: RoleConfig,

    #[serde(default)]
    pub guesser: RoleConfig,
}

/// Backoff applied to rate-limited provider calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Total attempts per exchange, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Delay before the first retry; doubles per attempt.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Upper bound of the random jitter added to each delay.
    #[serde(default = "default_max_jitter_ms")]
    pub max_jitter_ms: u64,
}

fn default_max_attempts() -> u32 {
    5
}

fn default_base_delay_ms() -> u64 {
    1000
}

fn default_max_jitter_ms() -> u64 {
    1000
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_jitter_ms: default_max_jitter_ms(),
        }
    }
}

impl TransportConfig {
    pub fn base_delay(&self) -> Duration {
        Duration::from_millis(self.base_delay_ms)
    }

    pub fn max_jitter(&self) -> Duration {
        Duration::from_millis(self.max_jitter_ms)
    }
}

/// Per-role settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleConfig {
    #[serde(default)]
    pub strategy: Strategy,
}
