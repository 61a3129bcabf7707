//! Codenames agents CLI entry point.
//!
//! Binary name: `cnbot`
//!
//! Parses CLI arguments, loads the agent configuration, then runs one
//! codemaster or guesser decision and prints it.

mod cli;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use codenames_infra::config::{default_config_path, load_agents_config};
use codenames_observe::tracing_setup::{init_tracing, shutdown_tracing};
use codenames_types::game::Clue;

use cli::{Cli, Commands, apply_overrides, log_filter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(log_filter(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Neither of these needs a config
    match &cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(*shell, &mut cmd, "cnbot", &mut std::io::stdout());
            return Ok(());
        }
        Commands::Strategies => {
            cli::strategies::list_strategies(cli.json)?;
            return Ok(());
        }
        _ => {}
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };
    let config = load_agents_config(&config_path)
        .await
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    match cli.command {
        Commands::Clue {
            board,
            team,
            strategy,
        } => {
            let config = apply_overrides(config, cli.mock, team);
            cli::clue::give_clue(config, &board, strategy, cli.json).await
        }

        Commands::Guess {
            board,
            clue,
            number,
            team,
            strategy,
            seed,
        } => {
            let config = apply_overrides(config, cli.mock, team);
            let args = cli::guess::GuessArgs {
                board: &board,
                clue: Clue::new(clue, number),
                strategy,
                seed,
            };
            cli::guess::make_guess(config, args, cli.json).await
        }

        Commands::Strategies | Commands::Completions { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_run_returns_config_errors_to_caller() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("config.toml");
        tokio::fs::write(&config, "team = \"green\"").await.unwrap();

        let cli = Cli::try_parse_from([
            "cnbot",
            "--config",
            config.to_str().unwrap(),
            "clue",
            "--board",
            "board.json",
        ])
        .unwrap();
        let err = run(cli).await.unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[tokio::test]
    async fn test_run_strategies_needs_no_config() {
        let cli = Cli::try_parse_from(["cnbot", "--config", "/nonexistent/dir/x.toml", "strategies"]).unwrap();
        assert!(run(cli).await.is_ok());
    }
}
