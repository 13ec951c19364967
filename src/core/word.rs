//! Wordle word representation
//!
//! A Word is five lowercase ASCII letters, stored both as text and as bytes.

use crate::error::{Result, SolverError};
use std::fmt;
use std::str::FromStr;

/// A 5-letter Wordle word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; 5],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased but not trimmed.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if:
    /// - Length is not exactly 5
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text: String = text.into().to_lowercase();

        let len = text.chars().count();
        if len != 5 {
            return Err(SolverError::invalid_input(
                text,
                format!("expected 5 letters, got {len}"),
            ));
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(SolverError::invalid_input(
                text,
                "only letters a-z are allowed",
            ));
        }

        let mut chars = [0u8; 5];
        chars.copy_from_slice(text.as_bytes());

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// Distinct letters of the word, sorted
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<u8> {
        let mut letters = self.chars.to_vec();
        letters.sort_unstable();
        letters.dedup();
        letters
    }
}

impl FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
