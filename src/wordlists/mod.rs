//! Word lists and score tables
//!
//! Provides the embedded defaults plus file loaders for custom data.

mod embedded;
pub mod loader;
mod tables;

pub use embedded::{FREQUENCY_JSON, INFO_JSON, WORDS, WORDS_COUNT};
pub use tables::{ScoreTable, Tables};

use crate::core::Word;
use crate::error::Result;

/// The embedded solution universe as Words
///
/// # Errors
///
/// Returns `SolverError::DataLoad` if the embedded list is malformed.
pub fn default_universe() -> Result<Vec<Word>> {
    loader::parse_words("embedded word list", WORDS.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn default_universe_keeps_file_order() {
        let universe = default_universe().unwrap();
        assert_eq!(universe.len(), WORDS_COUNT);
        assert_eq!(universe[0].text(), WORDS[0]);
        assert_eq!(universe[WORDS_COUNT - 1].text(), WORDS[WORDS_COUNT - 1]);
    }
}
