//! Wiring: configuration in, ready-to-play agents out.
//!
//! Each agent gets its own provider instance and conversation session, so
//! the codemaster and guesser of one team never share history.

use codenames_core::codemaster::Codemaster;
use codenames_core::decision::rules::{codemaster_system_prompt, guesser_system_prompt};
use codenames_core::guesser::Guesser;
use codenames_core::session::{ConversationSession, SessionSettings};
use codenames_types::config::AgentsConfig;
use codenames_types::game::Team;
use codenames_types::llm::LlmError;

use crate::llm::create_provider;

/// Builds agents from an [`AgentsConfig`].
#[derive(Debug, Clone)]
pub struct AgentFactory {
    config: AgentsConfig,
}

impl AgentFactory {
    pub fn new(config: AgentsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AgentsConfig {
        &self.config
    }

    fn session(&self, system_prompt: String) -> Result<ConversationSession, LlmError> {
        let provider = create_provider(&self.config.provider)?;
        Ok(ConversationSession::new(
            provider,
            system_prompt,
            SessionSettings::from_config(&self.config),
        ))
    }

    /// Codemaster for `team`, using the configured codemaster strategy.
    pub fn codemaster(&self, team: Team) -> Result<Codemaster, LlmError> {
        let session = self.session(codemaster_system_prompt(team))?;
        tracing::info!(
            team = %team,
            strategy = %self.config.codemaster.strategy,
            provider = session.provider_name(),
            "codemaster ready"
        );
        Ok(Codemaster::new(team, self.config.codemaster.strategy, session))
    }

    /// Guesser for `team`, using the configured guesser strategy.
    pub fn guesser(&self, team: Team) -> Result<Guesser, LlmError> {
        let session = self.session(guesser_system_prompt(team))?;
        tracing::info!(
            team = %team,
            strategy = %self.config.guesser.strategy,
            provider = session.provider_name(),
            "guesser ready"
        );
        Ok(Guesser::new(team, self.config.guesser.strategy, session))
    }
}
