//! Board state, roles, strategies and the actions the agents produce.
//!
//! The external turn engine owns the board and flips `revealed`; the agents
//! only ever borrow it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, StrategyParseError};

/// One of the two competing teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    #[default]
    Red,
    Blue,
}

impl Team {
    /// The board role that belongs to this team.
    pub fn role(&self) -> Role {
        match self {
            Team::Red => Role::Red,
            Team::Blue => Role::Blue,
        }
    }

    pub fn opponent(&self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Red => write!(f, "Red"),
            Team::Blue => write!(f, "Blue"),
        }
    }
}

impl FromStr for Team {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "red" => Ok(Team::Red),
            "blue" => Ok(Team::Blue),
            other => Err(format!("invalid team: '{other}'")),
        }
    }
}

/// Hidden identity of a board word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Red,
    Blue,
    #[serde(alias = "neutral")]
    Civilian,
    Assassin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Red => write!(f, "Red"),
            Role::Blue => write!(f, "Blue"),
            Role::Civilian => write!(f, "Civilian"),
            Role::Assassin => write!(f, "Assassin"),
        }
    }
}

/// A word on the board and whether it has been picked already.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardWord {
    pub text: String,
    #[serde(default)]
    pub revealed: bool,
}

impl BoardWord {
    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: false,
        }
    }

    pub fn revealed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed: true,
        }
    }
}

/// Ordered board words as supplied by the turn engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub words: Vec<BoardWord>,
}

impl Board {
    pub fn new(words: Vec<BoardWord>) -> Self {
        Self { words }
    }

    /// Build a board where every word is still hidden.
    pub fn from_hidden<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(BoardWord::hidden).collect(),
        }
    }

    /// Unrevealed words, in board order.
    pub fn remaining(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| !w.revealed)
            .map(|w| w.text.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Role of every board word, index-aligned with [`Board::words`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleMap(pub Vec<Role>);

impl RoleMap {
    pub fn new(roles: Vec<Role>) -> Self {
        Self(roles)
    }

    pub fn roles(&self) -> &[Role] {
        &self.0
    }

    /// Fail unless this map lines up with `board`.
    pub fn check_aligned(&self, board: &Board) -> Result<(), BoardError> {
        if self.0.len() != board.len() {
            return Err(BoardError::RoleMapLength {
                words: board.len(),
                roles: self.0.len(),
            });
        }
        Ok(())
    }
}

/// Prompt-engineering style an agent uses for its whole game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Default,
    Cautious,
    Risky,
    #[serde(alias = "cot", alias = "COT")]
    ChainOfThought,
    #[serde(alias = "self refine", alias = "self-refine", alias = "Self Refine")]
    SelfRefine,
    #[serde(
        alias = "solo performance",
        alias = "solo-performance",
        alias = "Solo Performance"
    )]
    SoloPerformance,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Default,
        Strategy::Cautious,
        Strategy::Risky,
        Strategy::ChainOfThought,
        Strategy::SelfRefine,
        Strategy::SoloPerformance,
    ];

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Default => "Default",
            Strategy::Cautious => "Cautious",
            Strategy::Risky => "Risky",
            Strategy::ChainOfThought => "COT",
            Strategy::SelfRefine => "Self Refine",
            Strategy::SoloPerformance => "Solo Performance",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        match normalized.as_str() {
            "default" => Ok(Strategy::Default),
            "cautious" => Ok(Strategy::Cautious),
            "risky" => Ok(Strategy::Risky),
            "cot" | "chain_of_thought" | "chainofthought" => Ok(Strategy::ChainOfThought),
            "self_refine" | "selfrefine" => Ok(Strategy::SelfRefine),
            "solo_performance" | "soloperformance" => Ok(Strategy::SoloPerformance),
            _ => Err(StrategyParseError(s.to_string())),
        }
    }
}

/// A codemaster's clue: one word plus how many board words it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub word: String,
    pub number: u32,
}

impl Clue {
    pub fn new(word: impl Into<String>, number: u32) -> Self {
        Self {
            word: word.into(),
            number,
        }
    }

    /// Clue handed out when the model never produced a legal one.
    pub fn fallback() -> Self {
        Self {
            word: String::new(),
            number: 1,
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.word, self.number)
    }
}

/// A guesser's pick; always the text of an unrevealed board word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub word: String,
}
