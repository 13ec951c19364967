//! Info table precomputation
//!
//! Scores every word by its entropy against the full universe. The result is
//! what the selector falls back on when the candidate set is too large to
//! rank directly.

use crate::core::Word;
use crate::error::Result;
use crate::solver::entropy::calculate_entropy;
use crate::wordlists::ScoreTable;
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Entropy of each word in `universe` against all of `universe`
#[must_use]
pub fn generate_info(universe: &[Word]) -> ScoreTable {
    let candidates: Vec<&Word> = universe.iter().collect();
    log::info!("scoring {} words", universe.len());

    universe
        .par_iter()
        .map(|word| (word.text().to_string(), calculate_entropy(word, &candidates)))
        .collect::<Vec<_>>()
        .into_iter()
        .collect()
}

/// Write `table` as JSON to `output`, or return it for printing when `None`
///
/// # Errors
/// Returns an error if serialization or the file write fails.
pub fn write_info(table: &ScoreTable, output: Option<&Path>) -> Result<Option<String>> {
    let json = table.to_json_pretty()?;
    match output {
        Some(path) => {
            fs::write(path, json)?;
            log::info!("wrote {} scores to {}", table.len(), path.display());
            Ok(None)
        }
        None => Ok(Some(json)),
    }
}
