//! `cnbot strategies`: list strategy labels.

use anyhow::Result;
use console::style;

use codenames_types::game::Strategy;

fn describe(strategy: Strategy) -> &'static str {
    match strategy {
        Strategy::Default => "one plain prompt per decision",
        Strategy::Cautious => "clue number 1; guesser stops after one pick",
        Strategy::Risky => "large clue numbers; guesser uses number + 1 picks",
        Strategy::ChainOfThought => "reason step by step, then answer",
        Strategy::SelfRefine => "draft, critique, refine",
        Strategy::SoloPerformance => "simulated multi-persona deliberation",
    }
}

pub fn list_strategies(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = Strategy::ALL
            .iter()
            .map(|s| {
                serde_json::json!({
                    "name": s,
                    "label": s.label(),
                    "description": describe(*s),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!();
    println!("  {}", style("── Strategies ──").dim());
    for strategy in Strategy::ALL {
        println!(
            "  {:<18} {}",
            style(strategy.label()).cyan().bold(),
            style(describe(strategy)).dim()
        );
    }
    println!();
    Ok(())
}
