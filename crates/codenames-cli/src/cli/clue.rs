//! `cnbot clue`: one codemaster decision.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use codenames_infra::agents::AgentFactory;
use codenames_types::config::AgentsConfig;
use codenames_types::game::{Clue, Strategy};

use super::board::load_board_file;

pub async fn give_clue(
    mut config: AgentsConfig,
    board_path: &Path,
    strategy: Option<Strategy>,
    json: bool,
) -> Result<()> {
    if let Some(strategy) = strategy {
        config.codemaster.strategy = strategy;
    }
    let file = load_board_file(board_path).await?;
    let roles = file.require_roles()?;

    let team = config.team;
    tracing::debug!(
        %team,
        strategy = %config.codemaster.strategy,
        provider = %config.provider.provider_type,
        words = file.board.len(),
        "running codemaster"
    );
    let factory = AgentFactory::new(config);
    let mut codemaster = factory
        .codemaster(team)
        .context("failed to set up the codemaster")?;
    let clue = codemaster
        .give_clue(&file.board, roles)
        .await
        .context("codemaster could not produce a clue")?;

    if json {
        let out = serde_json::json!({
            "team": team,
            "strategy": codemaster.strategy(),
            "clue": clue,
            "fallback": clue == Clue::fallback(),
            "exchanges": codemaster.session().exchanges(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    if clue == Clue::fallback() {
        println!(
            "  {} {} codemaster gave up; passing the empty clue {}",
            style("!").yellow().bold(),
            team,
            style(&clue).yellow()
        );
    } else {
        println!(
            "  {} {} codemaster ({}): {}",
            style("➜").green().bold(),
            team,
            codemaster.strategy(),
            style(&clue).cyan().bold()
        );
    }
    println!(
        "  {}",
        style(format!("{} exchanges", codemaster.session().exchanges())).dim()
    );
    println!();
    Ok(())
}
