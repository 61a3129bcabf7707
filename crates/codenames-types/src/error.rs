use thiserror::Error;

use crate::llm::LlmError;

/// Why a model reply could not be turned into a legal action.
///
/// These never escape a decision engine; they are counted against the
/// per-decision retry budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error("that clue format is invalid")]
    MalformedClue,

    #[error("the clue number must be greater than zero")]
    NonPositiveNumber,

    #[error("the clue '{clue}' is derived from or derives board word '{word}'")]
    DerivedFromBoardWord { clue: String, word: String },

    #[error("the guess does not name a remaining board word")]
    UnresolvedGuess,

    #[error("the reply answers neither yes nor no")]
    AmbiguousIntent,
}

/// Inconsistent board state handed to an agent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("role map has {roles} roles for {words} words")]
    RoleMapLength { words: usize, roles: usize },
}

/// Unknown strategy label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{0}' (expected Default, Cautious, Risky, COT, Self Refine or Solo Performance)")]
pub struct StrategyParseError(pub String);

/// Errors a decision engine can surface to the turn engine.
#[derive(Debug, Error)]
pub enum DecisionError {
    /// The backend stayed unreachable or rate limited past the transport retry bound.
    #[error(transparent)]
    Transport(#[from] LlmError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("no clue has been set for this turn")]
    NoActiveClue,

    #[error("no unrevealed words remain on the board")]
    NoRemainingWords,
}
