use codenames_types::error::ReplyError;
use codenames_types::game::{Board, Clue};

/// Pull a `(word, number)` pair out of a reply shaped like `('pebble',2)`.
///
/// The reply is upper-cased and split on commas. The word is every ASCII
/// letter of the first segment, the number every digit of the second.
pub fn extract_clue(reply: &str) -> Result<(String, u32), ReplyError> {
    let normalized = reply.trim().to_uppercase();
    let mut parts = normalized.split(',');

    let word: String = parts
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect();
    let digits: String = parts
        .next()
        .ok_or(ReplyError::MalformedClue)?
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if word.is_empty() || digits.is_empty() {
        return Err(ReplyError::MalformedClue);
    }
    let number = digits.parse::<u32>().map_err(|_| ReplyError::MalformedClue)?;
    Ok((word, number))
}

/// Check a clue against the game rules for the current board.
///
/// The number must be at least 1, and the word may neither appear inside an
/// unrevealed board word nor contain one. Revealed words are ignored.
pub fn validate_clue(word: &str, number: u32, board: &Board) -> Result<Clue, ReplyError> {
    if number == 0 {
        return Err(ReplyError::NonPositiveNumber);
    }
    let clue = word.to_uppercase();
    for remaining in board.remaining() {
        let board_word = remaining.to_uppercase();
        if board_word.contains(&clue) || clue.contains(&board_word) {
            return Err(ReplyError::DerivedFromBoardWord {
                clue,
                word: remaining.to_string(),
            });
        }
    }
    Ok(Clue::new(clue, number))
}

/// [`extract_clue`] followed by [`validate_clue`].
pub fn parse_clue(reply: &str, board: &Board) -> Result<Clue, ReplyError> {
    let (word, number) = extract_clue(reply)?;
    validate_clue(&word, number, board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use codenames_types::game::BoardWord;

    fn board() -> Board {
        Board::from_hidden(["DOG", "CAT", "TREE"])
    }

    #[test]
    fn test_extract_canonical_format() {
        assert_eq!(extract_clue("('pebble',2)").unwrap(), ("PEBBLE".to_string(), 2));
        assert_eq!(extract_clue("  ('Ocean' , 3)\n").unwrap(), ("OCEAN".to_string(), 3));
        assert_eq!(extract_clue("FLOWER, 12").unwrap(), ("FLOWER".to_string(), 12));
    }

    #[test]
    fn test_extract_only_reads_second_segment() {
        assert_eq!(extract_clue("('sky',2), or 3").unwrap(), ("SKY".to_string(), 2));
    }

    #[test]
    fn test_extract_rejects_malformed() {
        assert_eq!(extract_clue("pebble 2"), Err(ReplyError::MalformedClue));
        assert_eq!(extract_clue("('pebble', two)"), Err(ReplyError::MalformedClue));
        assert_eq!(extract_clue("(, 2)"), Err(ReplyError::MalformedClue));
        assert_eq!(extract_clue(""), Err(ReplyError::MalformedClue));
        assert_eq!(
            extract_clue("('pebble', 99999999999)"),
            Err(ReplyError::MalformedClue)
        );
    }

    #[test]
    fn test_parse_accepts_unrelated_word() {
        assert_eq!(parse_clue("('pebble',2)", &board()).unwrap(), Clue::new("PEBBLE", 2));
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(
            parse_clue("('pebble',0)", &board()),
            Err(ReplyError::NonPositiveNumber)
        );
    }

    #[test]
    fn test_derived_words_are_rejected() {
        let err = parse_clue("('dogs',2)", &board()).unwrap_err();
        assert_eq!(
            err,
            ReplyError::DerivedFromBoardWord {
                clue: "DOGS".to_string(),
                word: "DOG".to_string(),
            }
        );
        // A clue contained in a board word is just as illegal.
        assert!(matches!(
            parse_clue("('tre',1)", &board()),
            Err(ReplyError::DerivedFromBoardWord { .. })
        ));
    }

    #[test]
    fn test_revealed_words_do_not_constrain() {
        let board = Board::new(vec![BoardWord::revealed("DOG"), BoardWord::hidden("TREE")]);
        assert_eq!(parse_clue("('dogs',1)", &board).unwrap(), Clue::new("DOGS", 1));
    }

    #[test]
    fn test_board_case_is_ignored() {
        let board = Board::from_hidden(["Pebble"]);
        assert!(matches!(
            parse_clue("('PEBBLE',1)", &board),
            Err(ReplyError::DerivedFromBoardWord { .. })
        ));
    }
}
