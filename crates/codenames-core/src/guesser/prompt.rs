//! Prompt builders for the guesser strategies.
//!
//! Prompts that expect a board word end with "Return ONLY ..."; prompts
//! that expect a continue decision ask for 'yes' or 'no'.

use codenames_types::game::{Clue, Strategy, Team};

use crate::decision::rules::quoted_list;

fn board_line(remaining: &[&str], clue: &Clue) -> String {
    format!(
        "The remaining words are: {}. The Codemaster's clue is: {clue}. ",
        quoted_list(remaining)
    )
}

/// Single-exchange pick for Default, Cautious, Risky and Solo Performance.
pub fn pick(strategy: Strategy, remaining: &[&str], clue: &Clue) -> String {
    match strategy {
        Strategy::Cautious => format!(
            "You must be careful and avoid wrong picks. {}\
             Pick the SINGLE safest word (the one that is clearly linked). \
             If multiple words are possible, pick the one with the strongest and most obvious link. \
             Return ONLY the word.",
            board_line(remaining, clue)
        ),
        Strategy::Risky => format!(
            "You can be aggressive. {}\
             Pick the word that is MOST LIKELY intended, even if there is a bit of risk. \
             Return ONLY the word.",
            board_line(remaining, clue)
        ),
        Strategy::SoloPerformance => format!(
            "Act as a strong Codenames guesser. Clue: {clue}. Remaining words: {}. \
             Internally do the reasoning, but output only the final chosen word. \
             Return ONLY the word.",
            quoted_list(remaining)
        ),
        _ => format!(
            "{}Select ONE of the remaining words that is MOST associated with this clue. \
             Return ONLY the word, no extra text.",
            board_line(remaining, clue)
        ),
    }
}

/// First chain-of-thought step: rank candidates without committing.
pub fn rank_candidates(remaining: &[&str], clue: &Clue) -> String {
    format!(
        "We are playing Codenames.\n\
         Clue: {clue}.\n\
         Remaining words: {}.\n\
         Think step by step about which remaining word best matches the clue. \
         List the top 3 candidates and score them from 0 to 1.\n\
         Do NOT output the final guess yet.",
        quoted_list(remaining)
    )
}

/// Second chain-of-thought step.
pub fn final_pick(remaining: &[&str], clue: &Clue) -> String {
    format!(
        "Now give me ONLY the single final guess word for the clue {clue} from this list: {}. \
         Return ONLY the word.",
        quoted_list(remaining)
    )
}

/// Self-refine step one.
pub fn initial_pick(remaining: &[&str], clue: &Clue) -> String {
    format!(
        "{}Pick the most likely word. Return ONLY the word.",
        board_line(remaining, clue)
    )
}

/// Self-refine step two: second-guess `initial` for risk.
pub fn critique_pick(team: Team, remaining: &[&str], clue: &Clue, initial: &str) -> String {
    format!(
        "You guessed: {initial}. Clue: {clue}. Remaining words: {}. \
         Check if this guess could accidentally be {}/Civilian/Assassin if this were a real board. \
         If the guess is risky, suggest a safer one from the remaining words. \
         Return ONLY the final safest word.",
        quoted_list(remaining),
        team.opponent(),
    )
}

/// Yes/no prompt asking whether to pick another word this turn.
pub fn keep_guessing(strategy: Strategy, remaining: &[&str], clue: &Clue, guesses: u32) -> String {
    let base = format!(
        "{}You have already picked {guesses} words this turn. ",
        board_line(remaining, clue)
    );
    let ask = match strategy {
        Strategy::ChainOfThought => {
            "Think step by step whether there are still high-confidence targets left. \
             Then answer ONLY 'yes' or 'no'."
        }
        Strategy::SelfRefine => {
            "Decide if there is another SAFE guess that is very likely to be your team's word. \
             If you are unsure, answer 'no'. Answer ONLY 'yes' or 'no'."
        }
        Strategy::SoloPerformance => {
            "First internally evaluate remaining options, but output ONLY 'yes' or 'no'. \
             Say 'yes' if there is at least one strong candidate."
        }
        _ => "Would you like to keep guessing? Answer only 'yes' or 'no'.",
    };
    base + ask
}

#[cfg(test)]
mod tests {
    use super::*;

    const REMAINING: [&str; 3] = ["DOG", "CAT", "TREE"];

    fn clue() -> Clue {
        Clue::new("ANIMAL", 2)
    }

    #[test]
    fn test_board_line() {
        assert_eq!(
            board_line(&REMAINING, &clue()),
            "The remaining words are: ['DOG', 'CAT', 'TREE']. The Codemaster's clue is: (ANIMAL, 2). "
        );
    }

    #[test]
    fn test_word_prompts_demand_a_bare_word() {
        let mut prompts: Vec<String> = Strategy::ALL
            .iter()
            .map(|s| pick(*s, &REMAINING, &clue()))
            .collect();
        prompts.push(final_pick(&REMAINING, &clue()));
        prompts.push(initial_pick(&REMAINING, &clue()));
        prompts.push(critique_pick(Team::Red, &REMAINING, &clue(), "DOG"));
        for prompt in prompts {
            assert!(prompt.contains("Return ONLY"), "{prompt}");
            assert!(prompt.contains("(ANIMAL, 2)"), "{prompt}");
            assert!(!prompt.contains("'yes' or 'no'"), "{prompt}");
        }
    }

    #[test]
    fn test_ranking_prompt_does_not_ask_for_the_word() {
        let prompt = rank_candidates(&REMAINING, &clue());
        assert!(prompt.contains("Do NOT output the final guess yet."));
        assert!(!prompt.to_lowercase().contains("return only"));
    }

    #[test]
    fn test_continue_prompts_ask_yes_or_no() {
        for strategy in Strategy::ALL {
            let prompt = keep_guessing(strategy, &REMAINING, &clue(), 1);
            assert!(prompt.contains("'yes' or 'no'"), "{prompt}");
            assert!(prompt.contains("You have already picked 1 words this turn."));
        }
    }

    #[test]
    fn test_critique_names_opposing_team() {
        let prompt = critique_pick(Team::Blue, &REMAINING, &clue(), "CAT");
        assert!(prompt.starts_with("You guessed: CAT."));
        assert!(prompt.contains("accidentally be Red/Civilian/Assassin"));
    }
}
