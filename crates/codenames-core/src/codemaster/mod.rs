//! Clue decision engine.
//!
//! Drives the strategy's prompt sequence, parses and validates the final
//! reply and retries the whole sequence on invalid replies. After
//! [`MAX_INVALID_REPLIES`](crate::decision::MAX_INVALID_REPLIES) retries it
//! gives up and hands out [`Clue::fallback`].

pub mod prompt;

use codenames_types::error::DecisionError;
use codenames_types::game::{Board, Clue, RoleMap, Strategy, Team};
use codenames_types::llm::LlmError;
use tracing::{info, warn};

use crate::decision::{RetryBudget, RetryState};
use crate::reply::parse_clue;
use crate::session::ConversationSession;

pub use prompt::RemainingWords;

/// An AI codemaster for one team, for one game.
#[derive(Debug)]
pub struct Codemaster {
    team: Team,
    strategy: Strategy,
    session: ConversationSession,
}

impl Codemaster {
    /// The session should have been opened with
    /// [`codemaster_system_prompt`](crate::decision::rules::codemaster_system_prompt).
    pub fn new(team: Team, strategy: Strategy, session: ConversationSession) -> Self {
        Self {
            team,
            strategy,
            session,
        }
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn session(&self) -> &ConversationSession {
        &self.session
    }

    /// Decide this turn's clue.
    ///
    /// Transport failures end the turn with an error. Invalid replies never
    /// do: they are retried and eventually replaced by the fallback clue.
    #[tracing::instrument(skip_all, fields(team = %self.team, strategy = %self.strategy))]
    pub async fn give_clue(&mut self, board: &Board, roles: &RoleMap) -> Result<Clue, DecisionError> {
        roles.check_aligned(board)?;
        let words = RemainingWords::partition(board, roles, self.team);
        let mut budget = RetryBudget::standard();

        loop {
            let reply = self.run_strategy(&words).await?;
            match parse_clue(&reply, board) {
                Ok(clue) => {
                    info!(clue = %clue, retries = budget.failures(), "clue accepted");
                    return Ok(clue);
                }
                Err(rule) => {
                    warn!(reply = %reply, rule = %rule, "invalid clue from model");
                    if budget.record_failure() == RetryState::Exhausted {
                        let clue = Clue::fallback();
                        info!(clue = %clue, "too many invalid clues, using the empty clue");
                        return Ok(clue);
                    }
                }
            }
        }
    }

    /// One full attempt: every exchange the strategy calls for. Returns the
    /// reply that should hold the clue.
    async fn run_strategy(&mut self, words: &RemainingWords) -> Result<String, LlmError> {
        match self.strategy {
            Strategy::Default | Strategy::Cautious | Strategy::Risky => {
                self.session.send(&prompt::direct(words, self.strategy)).await
            }
            Strategy::ChainOfThought => {
                self.session.send(&prompt::reasoning(words)).await?;
                self.session.send(prompt::FINAL_ANSWER).await
            }
            Strategy::SelfRefine => {
                let initial = self.session.send(&prompt::refine_initial(words)).await?;
                let feedback = self
                    .session
                    .send(&prompt::refine_critique(words, &initial))
                    .await?;
                self.session
                    .send(&prompt::refine_final(words, &initial, &feedback))
                    .await
            }
            Strategy::SoloPerformance => {
                self.session.send(&prompt::solo_performance(words)).await?;
                self.session.send(prompt::FINAL_ANSWER).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codenames_types::game::{BoardWord, Role};

    use crate::decision::rules::codemaster_system_prompt;
    use crate::llm::box_provider::BoxLlmProvider;
    use crate::llm::mock::OfflineProvider;
    use crate::llm::testing::{CallLog, ScriptedProvider};
    use crate::session::{BackoffPolicy, SessionSettings};

    fn settings() -> SessionSettings {
        SessionSettings {
            model: "test-model".to_string(),
            max_tokens: 512,
            temperature: None,
            backoff: BackoffPolicy::immediate(3),
        }
    }

    fn codemaster(team: Team, strategy: Strategy, provider: ScriptedProvider) -> (Codemaster, CallLog) {
        let (provider, log) = provider.boxed();
        let session = ConversationSession::new(provider, codemaster_system_prompt(team), settings());
        (Codemaster::new(team, strategy, session), log)
    }

    fn board() -> (Board, RoleMap) {
        let board = Board::new(vec![
            BoardWord::hidden("DOG"),
            BoardWord::hidden("CAT"),
            BoardWord::hidden("TREE"),
            BoardWord::revealed("RIVER"),
            BoardWord::hidden("CAR"),
        ]);
        let roles = RoleMap::new(vec![
            Role::Red,
            Role::Red,
            Role::Civilian,
            Role::Blue,
            Role::Assassin,
        ]);
        (board, roles)
    }

    #[tokio::test]
    async fn test_default_accepts_valid_clue() {
        let (mut cm, log) = codemaster(
            Team::Red,
            Strategy::Default,
            ScriptedProvider::replies(&["('pebble',2)"]),
        );
        let (board, roles) = board();

        let clue = cm.give_clue(&board, &roles).await.unwrap();
        assert_eq!(clue, Clue::new("PEBBLE", 2));
        assert_eq!(log.len(), 1);
        assert!(log.prompts()[0].contains("Red: ['DOG', 'CAT']"));
        // Revealed words are not offered.
        assert!(!log.prompts()[0].contains("RIVER"));
    }

    #[tokio::test]
    async fn test_invalid_replies_are_retried() {
        let (mut cm, log) = codemaster(
            Team::Red,
            Strategy::Cautious,
            ScriptedProvider::replies(&["pebble", "('dogs',1)", "('fur',0)", "('fur',1)"]),
        );
        let (board, roles) = board();

        let clue = cm.give_clue(&board, &roles).await.unwrap();
        assert_eq!(clue, Clue::new("FUR", 1));
        assert_eq!(log.len(), 4);
        // Same prompt every time.
        let prompts = log.prompts();
        assert!(prompts.iter().all(|p| p == &prompts[0]));
    }

    #[tokio::test]
    async fn test_eleven_invalid_replies_fall_back() {
        let (mut cm, log) = codemaster(
            Team::Red,
            Strategy::Default,
            ScriptedProvider::always("I would rather not say"),
        );
        let (board, roles) = board();

        let clue = cm.give_clue(&board, &roles).await.unwrap();
        assert_eq!(clue, Clue::fallback());
        assert_eq!(log.len(), 11);
    }

    #[tokio::test]
    async fn test_clue_matching_revealed_word_is_fine() {
        let (mut cm, _log) = codemaster(
            Team::Red,
            Strategy::Default,
            ScriptedProvider::replies(&["('rivers',2)"]),
        );
        let (board, roles) = board();
        assert_eq!(
            cm.give_clue(&board, &roles).await.unwrap(),
            Clue::new("RIVERS", 2)
        );
    }

    #[tokio::test]
    async fn test_chain_of_thought_discards_reasoning() {
        let (mut cm, log) = codemaster(
            Team::Red,
            Strategy::ChainOfThought,
            ScriptedProvider::replies(&["Steps: pets.\nAnswer: DOG", "('pet',2)"]),
        );
        let (board, roles) = board();

        let clue = cm.give_clue(&board, &roles).await.unwrap();
        assert_eq!(clue, Clue::new("PET", 2));
        let prompts = log.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("step by step"));
        assert_eq!(prompts[1], prompt::FINAL_ANSWER);
    }

    #[tokio::test]
    async fn test_chain_of_thought_retries_whole_sequence() {
        let (mut cm, log) = codemaster(
            Team::Red,
            Strategy::ChainOfThought,
            ScriptedProvider::replies(&["thinking", "nope", "thinking again", "('pet',2)"]),
        );
        let (board, roles) = board();

        assert_eq!(cm.give_clue(&board, &roles).await.unwrap(), Clue::new("PET", 2));
        assert_eq!(log.len(), 4);
    }

    #[tokio::test]
    async fn test_self_refine_feeds_back_replies() {
        let (mut cm, log) = codemaster(
            Team::Red,
            Strategy::SelfRefine,
            ScriptedProvider::replies(&["('pet',2)", "Feedback: PET is safe", "('pet',2)"]),
        );
        let (board, roles) = board();

        let clue = cm.give_clue(&board, &roles).await.unwrap();
        assert_eq!(clue, Clue::new("PET", 2));
        let prompts = log.prompts();
        assert_eq!(prompts.len(), 3);
        assert!(prompts[0].contains("avoid associations with Blue"));
        assert!(prompts[1].contains("clue ('pet',2) for the Red words {DOG, CAT}"));
        assert!(prompts[2].contains("'Feedback: PET is safe'"));
    }

    #[tokio::test]
    async fn test_solo_performance_lists_targets() {
        let (mut cm, log) = codemaster(
            Team::Blue,
            Strategy::SoloPerformance,
            ScriptedProvider::replies(&["Final answer: ENGINE: 1", "('engine',1)"]),
        );
        let (mut board, roles) = board();
        board.words[3].revealed = false;

        let clue = cm.give_clue(&board, &roles).await.unwrap();
        assert_eq!(clue, Clue::new("ENGINE", 1));
        let prompts = log.prompts();
        assert!(prompts[0].contains("target words {RIVER}"));
        assert!(prompts[0].contains("rest of the words on the board: {DOG, CAT, CAR, TREE}"));
        assert_eq!(prompts[1], prompt::FINAL_ANSWER);
    }

    #[tokio::test]
    async fn test_misaligned_role_map_fails_before_any_call() {
        let (mut cm, log) = codemaster(
            Team::Red,
            Strategy::Default,
            ScriptedProvider::always("('pebble',2)"),
        );
        let (board, _) = board();
        let roles = RoleMap::new(vec![Role::Red]);

        let err = cm.give_clue(&board, &roles).await.unwrap_err();
        assert!(matches!(err, DecisionError::Board(_)));
        assert_eq!(log.len(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let (mut cm, _log) = codemaster(
            Team::Red,
            Strategy::Default,
            ScriptedProvider::new(vec![Err(LlmError::AuthenticationFailed)]),
        );
        let (board, roles) = board();

        let err = cm.give_clue(&board, &roles).await.unwrap_err();
        assert!(matches!(err, DecisionError::Transport(LlmError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn test_offline_provider_yields_pebble_for_every_strategy() {
        let (board, roles) = board();
        for strategy in Strategy::ALL {
            let session = ConversationSession::new(
                BoxLlmProvider::new(OfflineProvider::new()),
                codemaster_system_prompt(Team::Red),
                settings(),
            );
            let mut cm = Codemaster::new(Team::Red, strategy, session);
            let clue = cm.give_clue(&board, &roles).await.unwrap();
            assert_eq!(clue, Clue::new("PEBBLE", 2), "{strategy}");
        }
    }
}
