//! Guess decision engine.
//!
//! A guesser is told the clue at the start of its team's turn, then
//! alternates between [`Guesser::pick_word`] and [`Guesser::keep_guessing`]
//! until it decides to stop or the turn engine ends the turn.

pub mod prompt;

use codenames_types::error::{DecisionError, ReplyError};
use codenames_types::game::{Board, Clue, Guess, Strategy, Team};
use codenames_types::llm::LlmError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::decision::{RetryBudget, RetryState};
use crate::reply::{detect_continue, resolve_guess};
use crate::session::ConversationSession;

/// An AI guesser for one team, for one game.
#[derive(Debug)]
pub struct Guesser {
    team: Team,
    strategy: Strategy,
    session: ConversationSession,
    rng: StdRng,
    clue: Option<Clue>,
    guesses: u32,
}

impl Guesser {
    /// The session should have been opened with
    /// [`guesser_system_prompt`](crate::decision::rules::guesser_system_prompt).
    pub fn new(team: Team, strategy: Strategy, session: ConversationSession) -> Self {
        Self {
            team,
            strategy,
            session,
            rng: StdRng::from_entropy(),
            clue: None,
            guesses: 0,
        }
    }

    /// Seed the generator behind the random fallback pick.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Start a turn with `clue`.
    pub fn set_clue(&mut self, clue: Clue) {
        info!(team = %self.team, clue = %clue, "clue received");
        self.clue = Some(clue);
        self.guesses = 0;
    }

    pub fn clue(&self) -> Option<&Clue> {
        self.clue.as_ref()
    }

    /// Words picked since the last [`set_clue`](Self::set_clue).
    pub fn guesses_this_turn(&self) -> u32 {
        self.guesses
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

    fn active_clue(&self) -> Result<Clue, DecisionError> {
        self.clue.clone().ok_or(DecisionError::NoActiveClue)
    }

    /// Decide whether to pick another word this turn.
    ///
    /// Cautious stops after one pick and Risky allows one more than the
    /// clue number; neither asks the model. The other strategies ask while
    /// fewer than `number` words were picked (or always, for a zero clue)
    /// and stop after too many answers that are neither yes nor no.
    #[tracing::instrument(skip_all, fields(team = %self.team, strategy = %self.strategy))]
    pub async fn keep_guessing(&mut self, board: &Board) -> Result<bool, DecisionError> {
        let clue = self.active_clue()?;
        match self.strategy {
            Strategy::Cautious => return Ok(self.guesses < 1),
            Strategy::Risky => return Ok(self.guesses < clue.number.saturating_add(1)),
            _ => {}
        }

        let mut budget = RetryBudget::standard();
        while self.guesses < clue.number || clue.number == 0 {
            let remaining = board.remaining();
            let prompt = prompt::keep_guessing(self.strategy, &remaining, &clue, self.guesses);
            let reply = self.session.send(&prompt).await?;

            match detect_continue(&reply) {
                Some(decision) => {
                    info!(decision, guesses = self.guesses, "continue decision");
                    return Ok(decision);
                }
                None => {
                    warn!(reply = %reply, rule = %ReplyError::AmbiguousIntent, "invalid continue answer from model");
                    if budget.record_failure() == RetryState::Exhausted {
                        info!("too many invalid answers, ending the turn");
                        return Ok(false);
                    }
                }
            }
        }
        Ok(false)
    }

    /// Pick the next unrevealed word.
    ///
    /// When the model keeps naming words that are not on the board, a
    /// remaining word is chosen at random instead.
    #[tracing::instrument(skip_all, fields(team = %self.team, strategy = %self.strategy))]
    pub async fn pick_word(&mut self, board: &Board) -> Result<Guess, DecisionError> {
        let clue = self.active_clue()?;
        let remaining = board.remaining();
        if remaining.is_empty() {
            return Err(DecisionError::NoRemainingWords);
        }

        let mut budget = RetryBudget::standard();
        let word = loop {
            let reply = self.run_strategy(&remaining, &clue).await?;
            if let Some(word) = resolve_guess(&reply, board) {
                break word;
            }
            warn!(reply = %reply, rule = %ReplyError::UnresolvedGuess, "invalid guess from model");
            if budget.record_failure() == RetryState::Exhausted {
                let word = remaining
                    .choose(&mut self.rng)
                    .map(|w| w.to_string())
                    .ok_or(DecisionError::NoRemainingWords)?;
                info!(guess = %word, "too many invalid guesses, picking a random word");
                break word;
            }
        };

        self.guesses += 1;
        info!(guess = %word, guesses = self.guesses, "guess chosen");
        Ok(Guess { word })
    }

    /// One full attempt. Returns the reply that should name the word.
    async fn run_strategy(&mut self, remaining: &[&str], clue: &Clue) -> Result<String, LlmError> {
        match self.strategy {
            Strategy::ChainOfThought => {
                self.session
                    .send(&prompt::rank_candidates(remaining, clue))
                    .await?;
                self.session.send(&prompt::final_pick(remaining, clue)).await
            }
            Strategy::SelfRefine => {
                let initial = self
                    .session
                    .send(&prompt::initial_pick(remaining, clue))
                    .await?;
                self.session
                    .send(&prompt::critique_pick(self.team, remaining, clue, &initial))
                    .await
            }
            strategy => {
                self.session
                    .send(&prompt::pick(strategy, remaining, clue))
                    .await
            }
        }
    }
}
