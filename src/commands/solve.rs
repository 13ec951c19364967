//! Word solving command
//!
//! Solves a specific target word and returns the full transcript.

use crate::core::Word;
use crate::error::{Result, SolverError};
use crate::solver::{SolveReport, Solver};

/// Solve `target` automatically with the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid 5-letter word
/// - The target is not part of the solver's universe
pub fn solve_word<'a>(solver: &Solver<'a>, target: &str) -> Result<SolveReport<'a>> {
    let secret = Word::new(target)?;
    if !solver.universe().contains(&secret) {
        return Err(SolverError::invalid_input(target, "not in word list"));
    }

    solver.solve_automatic(&secret)
}
