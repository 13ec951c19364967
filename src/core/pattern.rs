//! Wordle feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess using base-3 encoding:
//! - 0 = Black (letter not credited to any secret slot)
//! - 1 = Yellow (letter in word, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The pattern is stored as a single u8 value (0-242), where each position
//! contributes digit × 3^position to the total.

use super::Word;
use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Black,
    Yellow,
    Green,
}

impl Feedback {
    const fn digit(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Black,
        }
    }

    /// The `B`/`Y`/`G` symbol for this feedback
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }
}

/// Feedback pattern for a Wordle guess
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build a pattern from per-position feedback
    #[must_use]
    pub fn from_feedback(feedback: [Feedback; 5]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for fb in feedback {
            pattern += fb.digit() * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        Self(pattern)
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Per-position feedback, left to right
    #[must_use]
    pub fn symbols(self) -> [Feedback; 5] {
        let mut out = [Feedback::Black; 5];
        let mut val = self.0;
        for slot in &mut out {
            *slot = Feedback::from_digit(val % 3);
            val /= 3;
        }
        out
    }

    /// Calculate the pattern `guess` receives when `secret` is the hidden word
    ///
    /// Greens are marked first and consume their secret slot. Then each
    /// remaining guess position, left to right, takes the first unconsumed
    /// secret slot holding the same letter and becomes Yellow. Everything
    /// else is Black, so each secret letter is credited at most once.
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::core::{Pattern, Word};
    ///
    /// let secret = Word::new("atoll").unwrap();
    /// let guess = Word::new("allot").unwrap();
    /// assert_eq!(Pattern::compute(&secret, &guess).to_string(), "GYYYY");
    /// ```
    #[must_use]
    pub fn compute(secret: &Word, guess: &Word) -> Self {
        let secret = secret.chars();
        let guess = guess.chars();
        let mut result = [Feedback::Black; 5];
        let mut used = [false; 5];

        // Allow: index pairs guess[i] with secret[i] and result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess[i] == secret[i] {
                result[i] = Feedback::Green;
                used[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if result[i] == Feedback::Green {
                continue;
            }
            if let Some(j) = (0..5).find(|&j| !used[j] && secret[j] == guess[i]) {
                result[i] = Feedback::Yellow;
                used[j] = true;
            }
        }

        Self::from_feedback(result)
    }

    /// Convert pattern to emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols()
            .iter()
            .map(|fb| match fb {
                Feedback::Green => '🟩',
                Feedback::Yellow => '🟨',
                Feedback::Black => '⬛',
            })
            .collect()
    }
}

/// Compute feedback for raw strings
///
/// # Errors
/// Returns `SolverError::InvalidInput` if either input is not five letters.
///
/// # Examples
/// ```
/// use entropy_wordle::core::compute_feedback;
///
/// assert_eq!(compute_feedback("abcde", "abcde").unwrap().to_string(), "GGGGG");
/// assert!(compute_feedback("abc", "abcde").is_err());
/// ```
pub fn compute_feedback(secret: &str, guess: &str) -> Result<Pattern> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    Ok(Pattern::compute(&secret, &guess))
}

/// Parses exactly five `B`/`Y`/`G` symbols, case-insensitively
impl std::str::FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 5 {
            return Err(SolverError::invalid_input(
                s,
                format!("pattern needs 5 symbols, got {}", chars.len()),
            ));
        }

        let mut feedback = [Feedback::Black; 5];
        for (slot, ch) in feedback.iter_mut().zip(chars) {
            *slot = match ch.to_ascii_uppercase() {
                'G' => Feedback::Green,
                'Y' => Feedback::Yellow,
                'B' => Feedback::Black,
                other => {
                    return Err(SolverError::invalid_input(
                        s,
                        format!("unexpected symbol '{other}', use B, Y or G"),
                    ));
                }
            };
        }

        Ok(Self::from_feedback(feedback))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fb in self.symbols() {
            write!(f, "{}", fb.symbol())?;
        }
        Ok(())
    }
}
