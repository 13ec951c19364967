//! Core domain types for Wordle
//!
//! Words and feedback patterns. Everything here is pure and cheap to copy
//! or clone.

mod pattern;
mod word;

pub use pattern::{Feedback, Pattern, compute_feedback};
pub use word::Word;
