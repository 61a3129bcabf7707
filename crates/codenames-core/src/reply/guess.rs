use codenames_types::game::Board;

/// Find the unrevealed board word a guesser reply names, if any.
///
/// Tried in order: the whole trimmed reply, its first whitespace-separated
/// token, the text inside the first pair of double quotes, then inside the
/// first pair of single quotes. Matching ignores case; the board's own
/// spelling is returned. A word buried elsewhere in prose does not count.
pub fn resolve_guess(reply: &str, board: &Board) -> Option<String> {
    let remaining = board.remaining();
    let lookup = |candidate: &str| -> Option<String> {
        let candidate = candidate.trim().to_uppercase();
        if candidate.is_empty() {
            return None;
        }
        remaining
            .iter()
            .find(|w| w.to_uppercase() == candidate)
            .map(|w| w.to_string())
    };

    let trimmed = reply.trim();
    lookup(trimmed)
        .or_else(|| trimmed.split_whitespace().next().and_then(&lookup))
        .or_else(|| quoted(reply, '"').and_then(&lookup))
        .or_else(|| quoted(reply, '\'').and_then(&lookup))
}

/// Text between the first two occurrences of `quote`.
fn quoted(reply: &str, quote: char) -> Option<&str> {
    let mut parts = reply.split(quote);
    parts.next()?;
    let inner = parts.next()?;
    // Needs a closing quote.
    parts.next()?;
    Some(inner)
}

/// Read a yes/no answer to "keep guessing?".
///
/// `Some(true)` when the reply mentions only "yes", `Some(false)` when it
/// mentions only "no", `None` when it mentions both or neither.
pub fn detect_continue(reply: &str) -> Option<bool> {
    let text = reply.to_lowercase();
    match (text.contains("yes"), text.contains("no")) {
        (true, false) => Some(true),
        (false, true) => Some(false),
        _ => None,
    }
}
