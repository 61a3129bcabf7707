//! Prompt builders for the codemaster strategies.

use codenames_types::game::{Board, Role, RoleMap, Strategy, Team};

use crate::decision::rules::{plain_list, quoted_list};

const CLUE_FORMAT: &str = "Provide a single word clue and number for the guesser in the following format ('pebble',2). ";
const STRICT_FORMAT: &str = "Stick to this format exactly and provide no additional text. ";

/// Second step of the two-step strategies: just the formatted clue.
pub const FINAL_ANSWER: &str = "Give me only the final clue from your previous answer in the following format ('pebble',2). \
Stick to this format exactly and provide no additional text. ";

/// Unrevealed board words grouped by hidden role, in board order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemainingWords {
    pub team: Team,
    pub red: Vec<String>,
    pub blue: Vec<String>,
    pub civilian: Vec<String>,
    pub assassin: Vec<String>,
}

impl RemainingWords {
    /// Split the unrevealed words by role. The role map must already be
    /// aligned with the board.
    pub fn partition(board: &Board, roles: &RoleMap, team: Team) -> Self {
        let mut words = Self {
            team,
            ..Self::default()
        };
        for (word, role) in board.words.iter().zip(roles.roles()) {
            if word.revealed {
                continue;
            }
            let bucket = match role {
                Role::Red => &mut words.red,
                Role::Blue => &mut words.blue,
                Role::Civilian => &mut words.civilian,
                Role::Assassin => &mut words.assassin,
            };
            bucket.push(word.text.clone());
        }
        words
    }

    /// Target words: the engine's own team.
    pub fn own(&self) -> &[String] {
        match self.team {
            Team::Red => &self.red,
            Team::Blue => &self.blue,
        }
    }

    pub fn opponent(&self) -> &[String] {
        match self.team {
            Team::Red => &self.blue,
            Team::Blue => &self.red,
        }
    }

    /// Every non-target word: opponent, then assassin, then civilian.
    pub fn others(&self) -> Vec<&str> {
        self.opponent()
            .iter()
            .chain(&self.assassin)
            .chain(&self.civilian)
            .map(String::as_str)
            .collect()
    }

    /// `The remaining words are: Red: [...]. Blue: [...]. ...`
    pub fn describe(&self) -> String {
        format!(
            "The remaining words are: Red: {}. Blue: {}. Civilian: {}. Assassin: {}. ",
            quoted_list(&self.red),
            quoted_list(&self.blue),
            quoted_list(&self.civilian),
            quoted_list(&self.assassin),
        )
    }
}

/// Single-exchange prompt for Default, Cautious and Risky.
pub fn direct(words: &RemainingWords, strategy: Strategy) -> String {
    let mut prompt = format!("{}{CLUE_FORMAT}{STRICT_FORMAT}", words.describe());
    match strategy {
        Strategy::Cautious => prompt.push_str("Make sure that the number for your guess is always 1. "),
        Strategy::Risky => prompt.push_str("Make sure to pick a large number for your guess. "),
        _ => {}
    }
    prompt
}

/// First chain-of-thought step: reason out loud, answer afterwards.
pub fn reasoning(words: &RemainingWords) -> String {
    format!(
        "{}{CLUE_FORMAT}Solve the task step by step.\n\
         Your output should be of the following format:\n\
         ---\n\
         Steps: Your steps here.\n\
         Answer: (a single word here) / (a list of words here)\n",
        words.describe()
    )
}

/// Self-refine step one: a first clue steering clear of non-target words.
pub fn refine_initial(words: &RemainingWords) -> String {
    format!(
        "{}{CLUE_FORMAT}The clue should avoid associations with {}, Assassin and Civilian words. ",
        words.describe(),
        words.team.opponent(),
    )
}

/// Self-refine step two: critique `initial` against target and other words.
pub fn refine_critique(words: &RemainingWords, initial: &str) -> String {
    let team = words.team;
    format!(
        "Evaluate the Codenames clue {initial} for the {team} words {{{}}} and avoid words {{{}}} \
         on how related it is to the {team} words, and the likelihood of accidental association \
         with {}, assassin, or civilian words.\n\
         Give your answer in the form:\n\
         Feedback:\n\
         ...\n",
        plain_list(words.own()),
        plain_list(&words.others()),
        team.opponent(),
    )
}

/// Self-refine step three: keep or replace `initial` given `feedback`.
pub fn refine_final(words: &RemainingWords, initial: &str, feedback: &str) -> String {
    format!(
        "{}Refine the initial Codenames clue '{initial}' for the above words based on the \
         following feedback: '{feedback}'. \
         You can stick with the initial clue if the feedback indicates that this is a good choice. \
         {CLUE_FORMAT}{STRICT_FORMAT}",
        words.describe()
    )
}

const PERSONA_PRIMER: &str = "\
When faced with a task, begin by identifying the participants who will contribute to solving it. \
Then run a multi-round collaboration between them until a final solution is reached. \
The participants give critical comments and detailed suggestions whenever necessary.
Here is an example:
--
Example Task: Use numbers and basic arithmetic operations (+ - * /) to obtain 24. Use every number exactly once.
Input: 6 12 1 1
Participants: AI Assistant (you); Math Expert
Start collaboration!
Math Expert: You must use exactly the four numbers 6 12 1 1. Think of divisors of 24 such as 4, 6 and 8, or of sums such as 12 + 12.
AI Assistant (you): Here is a first attempt: (12 / (1 + 1)) * 6 = 24
Math Expert: Check it step by step. 1 + 1 = 2, 12 / 2 = 6, 6 * 6 = 36, which is not 24. Try another combination.
AI Assistant (you): Then 24 = 12 + 12 with the remaining numbers giving 12: 6 * (1 + 1) + 12 = 24
Math Expert: 1 + 1 = 2, 6 * 2 = 12, 12 + 12 = 24, and the numbers used are 6 12 1 1. Everything looks good!
Finish collaboration!
Final answer: 6 * (1 + 1) + 12 = 24
--
Example Task: Write a seven line poem whose first letters spell CHATGPT, explaining a quantum computer to a ten year old.
Participants: AI Assistant (you); Poet; Computer Scientist; Ten year old child
Poet: Seven lines, starting with C, H, A, T, G, P, T.
Computer Scientist: Quantum computers use qubits, which can be in several states at once thanks to superposition.
Ten year old child: Please keep it fun and skip the jargon.
AI Assistant (you): Curious machine of our time, Harnessing the quantum realm's odd ways, Atoms play, two states they embrace, \
Taking secrets from their puzzling maze. Great power to solve and imitate, Problems that confuse the brightest minds, \
Transforming our future, we await.
Poet: The first letters are C H A T G P T. Good.
Computer Scientist: Looking good!
Ten year old child: I like this version a lot!
Finish collaboration!
--
Now, identify the participants and collaboratively solve the following task step by step. Give your answer in the form \"WORD: (NUMBER)\".
Task: You are playing a game of Codenames as the Codemaster and must generate a one-word clue for the Guesser on your team \
that will semantically link to some of your target words. \
A clue comes in the form WORD: NUMBER (e.g. FLOWER: 2), where the number is how many target words the clue relates to. \
Clues should also avoid associations with words that are not target words, i.e. the rest of the words on the board.
";

/// Multi-persona deliberation prompt for Solo Performance.
pub fn solo_performance(words: &RemainingWords) -> String {
    format!(
        "{PERSONA_PRIMER}Here is a list of your target words {{{}}}. \
         Here are the rest of the words on the board: {{{}}}. ",
        plain_list(words.own()),
        plain_list(&words.others()),
    )
}
