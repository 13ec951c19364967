//! Self-play against a random secret

use crate::core::Word;
use crate::error::{Result, SolverError};
use crate::solver::{SolveReport, Solver};
use rand::prelude::IndexedRandom;

/// Pick a secret uniformly from `universe`
#[must_use]
pub fn random_secret(universe: &[Word]) -> Option<&Word> {
    universe.choose(&mut rand::rng())
}

/// Let the solver play against a randomly chosen secret
///
/// Returns the secret together with the game transcript.
///
/// # Errors
/// Returns `SolverError::DataLoad` if the universe is empty.
pub fn play_random<'a>(solver: &Solver<'a>) -> Result<(&'a Word, SolveReport<'a>)> {
    let secret = random_secret(solver.universe())
        .ok_or_else(|| SolverError::data_load("word list", "no words to choose a secret from"))?;
    log::debug!("playing against {secret}");

    let report = solver.solve_automatic(secret)?;
    Ok((secret, report))
}
