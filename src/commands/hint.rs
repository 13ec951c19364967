//! Hint command
//!
//! Reads the words still possible after some outside game and suggests the
//! next guess.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{Hint, Solver};
use crate::wordlists::loader::parse_words;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read a candidate list that may legitimately be empty
///
/// # Errors
/// Returns `SolverError::Io` if reading fails and `SolverError::DataLoad`
/// on an entry that is not five letters.
pub fn read_candidates<R: Read>(source_name: &str, mut reader: R) -> Result<Vec<Word>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    if content.lines().all(|line| line.trim().is_empty()) {
        return Ok(Vec::new());
    }
    parse_words(source_name, content.lines())
}

/// Load candidates from `path`, or stdin when `None`
///
/// # Errors
/// See [`read_candidates`].
pub fn load_candidates(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => read_candidates(&path.display().to_string(), fs::File::open(path)?),
        None => read_candidates("stdin", std::io::stdin().lock()),
    }
}

/// Next guess for `candidates`, as printed by the CLI
#[must_use]
pub fn hint_for(solver: &Solver<'_>, candidates: &[Word]) -> String {
    match solver.hint(candidates) {
        Hint::Guess(selection) => {
            log::debug!("hint {} via {}", selection.word, selection.method);
            selection.word.text().to_string()
        }
        hint @ Hint::NoWordsLeft => hint.to_string(),
    }
}
