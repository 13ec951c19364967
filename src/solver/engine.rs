//! Main solver interface

use super::hint::{Hint, hint};
use super::selector::GuessSelector;
use super::session::{Mode, Session, SolveReport};
use crate::core::Word;
use crate::error::Result;
use crate::wordlists::Tables;

/// Tunable limits for a solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Guesses allowed per game
    pub max_attempts: usize,
    /// Largest candidate count that is ranked by entropy
    pub entropy_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            entropy_threshold: GuessSelector::DEFAULT_ENTROPY_THRESHOLD,
        }
    }
}

/// Read-only solving context
///
/// Holds the universe, the score tables and the config. It never changes
/// after construction and is `Sync`, so one solver can hand out sessions to
/// many threads at once.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    universe: &'a [Word],
    tables: &'a Tables,
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(universe: &'a [Word], tables: &'a Tables, config: SolverConfig) -> Self {
        Self {
            universe,
            tables,
            config,
        }
    }

    #[must_use]
    pub const fn universe(&self) -> &'a [Word] {
        self.universe
    }

    #[must_use]
    pub const fn config(&self) -> SolverConfig {
        self.config
    }

    /// Selector configured with this solver's tables and threshold
    #[must_use]
    pub const fn selector(&self) -> GuessSelector<'a> {
        GuessSelector::new(self.tables, self.config.entropy_threshold)
    }

    /// A fresh session over the whole universe
    #[must_use]
    pub fn session(&self) -> Session<'a> {
        Session::new(self.universe, self.selector())
    }

    /// Play one automatic game against `secret`
    ///
    /// # Errors
    /// Propagates errors from [`Session::solve`].
    pub fn solve_automatic(&self, secret: &Word) -> Result<SolveReport<'a>> {
        self.session()
            .solve(Some(secret), Mode::Automatic, self.config.max_attempts)
    }

    /// Suggest a guess for a list narrowed outside this solver
    #[must_use]
    pub fn hint<'w>(&self, candidates: &'w [Word]) -> Hint<'w> {
        hint(&self.selector(), candidates)
    }
}
