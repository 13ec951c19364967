//! One-shot guess suggestion for an externally narrowed word list

use super::candidates::CandidateStore;
use super::selector::{GuessSelector, Selection};
use crate::core::Word;
use std::fmt;

/// Printed when the list has nothing left to suggest
pub const NO_WORDS_LEFT: &str = "NO_WORDS_LEFT";

/// Suggestion for the next guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hint<'a> {
    Guess(Selection<'a>),
    NoWordsLeft,
}

impl fmt::Display for Hint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guess(selection) => write!(f, "{}", selection.word),
            Self::NoWordsLeft => f.write_str(NO_WORDS_LEFT),
        }
    }
}

/// Best next guess when `candidates` are the only words still possible
#[must_use]
pub fn hint<'a>(selector: &GuessSelector<'_>, candidates: &'a [Word]) -> Hint<'a> {
    let store = CandidateStore::new(candidates);
    selector
        .select_guess(&store)
        .map_or(Hint::NoWordsLeft, Hint::Guess)
}
