//! Entropy-based guess ranking
//!
//! Implements Shannon entropy calculation for Wordle pattern distributions
//! and the ranking pass built on it.

mod calculator;
mod ranker;

pub use calculator::{GuessMetrics, Partition, calculate_entropy, calculate_metrics};
pub use ranker::{EntropyCache, rank_entropy};
