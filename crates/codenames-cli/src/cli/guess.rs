//! `cnbot guess`: one guesser pick plus the continue decision.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use codenames_infra::agents::AgentFactory;
use codenames_types::config::AgentsConfig;
use codenames_types::game::{Board, Clue, Strategy};

use super::board::load_board_file;

/// Options for a guess run beyond the config.
pub struct GuessArgs<'a> {
    pub board: &'a Path,
    pub clue: Clue,
    pub strategy: Option<Strategy>,
    pub seed: Option<u64>,
}

/// Copy of `board` with `word` marked revealed, as the turn engine would
/// leave it after a correct pick.
fn reveal(board: &Board, word: &str) -> Board {
    let mut next = board.clone();
    if let Some(entry) = next.words.iter_mut().find(|w| w.text == word) {
        entry.revealed = true;
    }
    next
}

pub async fn make_guess(mut config: AgentsConfig, args: GuessArgs<'_>, json: bool) -> Result<()> {
    if let Some(strategy) = args.strategy {
        config.guesser.strategy = strategy;
    }
    let file = load_board_file(args.board).await?;

    let team = config.team;
    tracing::debug!(
        %team,
        strategy = %config.guesser.strategy,
        provider = %config.provider.provider_type,
        clue = %args.clue,
        "running guesser"
    );
    let factory = AgentFactory::new(config);
    let mut guesser = factory.guesser(team).context("failed to set up the guesser")?;
    if let Some(seed) = args.seed {
        guesser = guesser.with_rng_seed(seed);
    }

    guesser.set_clue(Clue::new(args.clue.word.to_uppercase(), args.clue.number));
    let guess = guesser
        .pick_word(&file.board)
        .await
        .context("guesser could not pick a word")?;
    let after = reveal(&file.board, &guess.word);
    let keep_going = guesser
        .keep_guessing(&after)
        .await
        .context("guesser could not decide whether to continue")?;

    if json {
        let out = serde_json::json!({
            "team": team,
            "strategy": guesser.strategy(),
            "clue": guesser.clue(),
            "guess": guess,
            "guesses_this_turn": guesser.guesses_this_turn(),
            "keep_guessing": keep_going,
            "exchanges": guesser.session().exchanges(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} {} guesser ({}): {}",
        style("➜").green().bold(),
        team,
        guesser.strategy(),
        style(&guess.word).cyan().bold()
    );
    let decision = if keep_going {
        style("keep guessing").green()
    } else {
        style("end turn").yellow()
    };
    println!("  If correct: {decision}");
    println!(
        "  {}",
        style(format!("{} exchanges", guesser.session().exchanges())).dim()
    );
    println!();
    Ok(())
}
