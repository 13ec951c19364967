//! One game, start to finish
//!
//! A session owns its candidate store; nothing in it is shared, so many
//! sessions can run side by side against the same universe.

use super::candidates::CandidateStore;
use super::input::{PatternInput, read_pattern};
use super::selector::{GuessSelector, Method};
use crate::core::{Pattern, Word};
use crate::error::{Result, SolverError};

/// Where feedback comes from
pub enum Mode<'i> {
    /// Computed against a known secret
    Automatic,
    /// Reported by the player after each guess
    Interactive(&'i mut dyn PatternInput),
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveOutcome {
    /// Secret found on this attempt (1-based)
    Solved(usize),
    /// Ran out of attempts
    Exhausted,
    /// No candidate could explain the feedback
    Unsolvable,
}

impl SolveOutcome {
    /// Attempts used when solved, -1 otherwise
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Solved(attempts) => i32::try_from(attempts).unwrap_or(i32::MAX),
            Self::Exhausted | Self::Unsolvable => -1,
        }
    }

    #[must_use]
    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// One guess and what it taught us
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Round<'a> {
    pub attempt: usize,
    pub guess: &'a Word,
    pub method: Method,
    pub pattern: Pattern,
    pub candidates_before: usize,
    /// Equal to `candidates_before` on the winning round, which is never filtered
    pub candidates_after: usize,
    /// The filter removed nothing
    pub stalled: bool,
}

/// Result of [`Session::solve`]
#[derive(Debug, Clone)]
pub struct SolveReport<'a> {
    pub outcome: SolveOutcome,
    pub rounds: Vec<Round<'a>>,
}

/// Solving state for one game
pub struct Session<'a> {
    universe: &'a [Word],
    selector: GuessSelector<'a>,
    store: CandidateStore<'a>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(universe: &'a [Word], selector: GuessSelector<'a>) -> Self {
        Self {
            universe,
            selector,
            store: CandidateStore::new(universe),
        }
    }

    /// Candidates as of the last round
    #[must_use]
    pub const fn store(&self) -> &CandidateStore<'a> {
        &self.store
    }

    /// Play one game from the full universe
    ///
    /// Each round picks a guess, gets its pattern, stops on all-green and
    /// otherwise filters. A round that removes no candidates is logged as a
    /// warning and play continues.
    ///
    /// # Errors
    ///
    /// - `SolverError::MissingSecret` in automatic mode without a secret
    /// - `SolverError::Io` if interactive input fails or ends
    pub fn solve(
        &mut self,
        secret: Option<&Word>,
        mode: Mode<'_>,
        max_attempts: usize,
    ) -> Result<SolveReport<'a>> {
        self.store = CandidateStore::new(self.universe);
        let mut rounds = Vec::new();

        let mut input = match mode {
            Mode::Automatic if secret.is_none() => return Err(SolverError::MissingSecret),
            Mode::Automatic => None,
            Mode::Interactive(input) => Some(input),
        };

        for attempt in 1..=max_attempts {
            let Some(selection) = self.selector.select_guess(&self.store) else {
                log::debug!("no guess available on attempt {attempt}");
                return Ok(SolveReport {
                    outcome: SolveOutcome::Unsolvable,
                    rounds,
                });
            };
            let guess = selection.word;
            let before = self.store.len();
            log::debug!(
                "attempt {attempt}: {guess} via {} ({before} candidates)",
                selection.method
            );

            let pattern = match (&mut input, secret) {
                (Some(input), _) => {
                    let prompt = format!("Pattern for {}", guess.text().to_uppercase());
                    read_pattern(&mut **input, &prompt)?
                }
                (None, Some(secret)) => Pattern::compute(secret, guess),
                (None, None) => return Err(SolverError::MissingSecret),
            };

            let mut round = Round {
                attempt,
                guess,
                method: selection.method,
                pattern,
                candidates_before: before,
                candidates_after: before,
                stalled: false,
            };

            if pattern.is_perfect() {
                rounds.push(round);
                return Ok(SolveReport {
                    outcome: SolveOutcome::Solved(attempt),
                    rounds,
                });
            }

            self.store.filter(guess, pattern);
            round.candidates_after = self.store.len();
            round.stalled = round.candidates_after == before;
            rounds.push(round);

            if self.store.is_empty() {
                log::debug!("feedback {pattern} for {guess} left no candidates");
                return Ok(SolveReport {
                    outcome: SolveOutcome::Unsolvable,
                    rounds,
                });
            }
            if round.stalled {
                log::warn!("{guess} with {pattern} did not narrow the {before} candidates");
            }
        }

        Ok(SolveReport {
            outcome: SolveOutcome::Exhausted,
            rounds,
        })
    }
}
