//! Turning free-text model replies into legal actions.
//!
//! Everything here is pure: a reply and the current board go in, a
//! validated action or the broken rule comes out.

pub mod clue;
pub mod guess;

pub use clue::{extract_clue, parse_clue, validate_clue};
pub use guess::{detect_continue, resolve_guess};
