//! Word analysis command
//!
//! Analyzes the entropy and information content of a specific word.

use crate::core::Word;
use crate::error::{Result, SolverError};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub metrics: GuessMetrics,
    pub total_candidates: usize,
}

impl AnalysisResult {
    /// How many times smaller the candidate set gets on average
    #[must_use]
    pub fn expected_reduction(&self) -> f64 {
        self.metrics.entropy.exp2()
    }
}

/// Analyze the entropy of a word against the whole universe
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-ASCII)
/// - The word is not in the provided word list
pub fn analyze_word(word: &str, universe: &[Word]) -> Result<AnalysisResult> {
    let word = Word::new(word)?;
    if !universe.contains(&word) {
        return Err(SolverError::invalid_input(word.text(), "not in word list"));
    }

    let candidates: Vec<&Word> = universe.iter().collect();
    let metrics = calculate_metrics(&word, &candidates);

    Ok(AnalysisResult {
        word,
        metrics,
        total_candidates: universe.len(),
    })
}
