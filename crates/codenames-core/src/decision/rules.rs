//! System prompts: the rules of Codenames plus the agent's role line.

use codenames_types::game::Team;

/// Rules text every agent session opens with.
pub const GAME_RULES: &str = "\
Codenames is a word-based game of language understanding and communication.
Players are split into two teams (red and blue), with each team consisting of a Codemaster and Guesser.
Setup:
At the start of the game, the board consists of 25 English words.
The Codemasters on each team have access to a hidden map that tells them the identity of all of the words (Red, Blue, Civilian or Assassin).
The Guessers on each team do not have access to this map, and so do not know the identity of any words.
Players need to work as a team to select their words as quickly as possible, while minimizing the number of incorrect guesses.
Turns:
At the start of each team's turn, the Codemaster supplies a clue and a number (the number of words related to that clue).
The clue must:
- Be semantically related to the words the Codemaster wants their Guesser to guess.
- Be a single English word.
- NOT be derived from or derive one of the words on the board.
The Guesser then selects from the remaining words on the board, based on which words are most associated with the Codemaster's clue.
The identity of the selected word is then revealed to all players.
If the Guesser selected a word that is their team's colour, then they may get to pick another word.
The Guesser must always make at least one guess each turn, and can guess up to one word more than the number provided in the Codemaster's clue.
If a Guesser selects a word that is not their team's colour, their turn ends.
The Guesser can choose to stop selecting words (ending their turn) any time after the first guess.
Ending:
Play proceeds, passing back and forth, until one of three outcomes is achieved:
All of the words of your team's colour have been selected -- you win
All of the words of the other team's colour have been selected -- you lose
You select the assassin tile -- you lose

";

pub fn codemaster_system_prompt(team: Team) -> String {
    format!(
        "{GAME_RULES}You are playing the game Codenames as the {team} Codemaster. \
         Never reveal hidden roles. Only return clues when asked."
    )
}

pub fn guesser_system_prompt(team: Team) -> String {
    format!(
        "{GAME_RULES}You are playing the game Codenames as the {team} Guesser. \
         Never reveal hidden roles. Only return guesses when asked."
    )
}

/// `['DOG', 'CAT']`, the list style the prompts use.
pub(crate) fn quoted_list<S: AsRef<str>>(words: &[S]) -> String {
    let inner: Vec<String> = words
        .iter()
        .map(|w| format!("'{}'", w.as_ref()))
        .collect();
    format!("[{}]", inner.join(", "))
}

/// `DOG, CAT`, for prompts that wrap words in braces.
pub(crate) fn plain_list<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}
