//! Board files.
//!
//! ```json
//! {
//!   "words": [{"text": "DOG", "revealed": false}, "CAT", "TREE"],
//!   "roles": ["red", "blue", "assassin"]
//! }
//! ```
//!
//! A word may be a bare string (hidden) or an object with a `revealed` flag.

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use codenames_types::game::{Board, BoardWord, RoleMap};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordEntry {
    Plain(String),
    Full(BoardWord),
}

impl From<WordEntry> for BoardWord {
    fn from(entry: WordEntry) -> Self {
        match entry {
            WordEntry::Plain(text) => BoardWord::hidden(text),
            WordEntry::Full(word) => word,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawBoardFile {
    words: Vec<WordEntry>,
    #[serde(default)]
    roles: Option<RoleMap>,
}

/// A parsed board file.
#[derive(Debug)]
pub struct BoardFile {
    pub board: Board,
    pub roles: Option<RoleMap>,
}

impl BoardFile {
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawBoardFile = serde_json::from_str(content)?;
        let board = Board::new(raw.words.into_iter().map(BoardWord::from).collect());
        if board.is_empty() {
            bail!("board has no words");
        }
        if let Some(roles) = &raw.roles {
            roles.check_aligned(&board)?;
        }
        Ok(Self {
            board,
            roles: raw.roles,
        })
    }

    /// The role map, which the codemaster cannot do without.
    pub fn require_roles(&self) -> Result<&RoleMap> {
        self.roles
            .as_ref()
            .context("board file has no \"roles\"; the codemaster needs one role per word")
    }
}

pub async fn load_board_file(path: &Path) -> Result<BoardFile> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    BoardFile::parse(&content).with_context(|| format!("invalid board file {}", path.display()))
}
