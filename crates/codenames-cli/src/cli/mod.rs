//! CLI command definitions for the `cnbot` binary.
//!
//! Each command runs one agent decision against a board file and prints
//! the resulting action. `cnbot` never reveals words or keeps score; that
//! is the job of whatever turn engine drives the agents.

pub mod board;
pub mod clue;
pub mod guess;
pub mod strategies;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use codenames_types::config::AgentsConfig;
use codenames_types::game::{Strategy, Team};
use codenames_types::llm::ProviderConfig;

/// Ask an LLM-backed Codenames agent for its next move.
#[derive(Parser)]
#[command(name = "cnbot", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config.toml (default: ~/.codenames-agents/config.toml).
    #[arg(long, global = true, env = "CNBOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Use the offline provider instead of the configured one.
    #[arg(long, global = true)]
    pub mock: bool,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all logging except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed logging (-v for decisions, -vv for every exchange).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Have the codemaster give a clue for the board.
    Clue {
        /// Board file (JSON with words and roles).
        #[arg(long)]
        board: PathBuf,

        /// Team to play for (default: from config).
        #[arg(long)]
        team: Option<Team>,

        /// Codemaster strategy (default: from config).
        #[arg(long)]
        strategy: Option<Strategy>,
    },

    /// Have the guesser pick a word for a clue, then decide whether to go on.
    Guess {
        /// Board file (JSON with words; roles are ignored).
        #[arg(long)]
        board: PathBuf,

        /// Clue word.
        #[arg(long)]
        clue: String,

        /// Number of words the clue points at.
        #[arg(long)]
        number: u32,

        /// Team to play for (default: from config).
        #[arg(long)]
        team: Option<Team>,

        /// Guesser strategy (default: from config).
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Seed for the random fallback pick.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available strategies.
    Strategies,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

/// Log filter for the requested verbosity.
pub fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "info,codenames_core=debug",
        _ => "trace",
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub fn apply_overrides(mut config: AgentsConfig, mock: bool, team: Option<Team>) -> AgentsConfig {
    if mock {
        config.provider = ProviderConfig {
            max_tokens: config.provider.max_tokens,
            ..ProviderConfig::mock()
        };
    }
    if let Some(team) = team {
        config.team = team;
    }
    config
}
