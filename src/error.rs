//! Error types shared by the solving core and its data providers

use thiserror::Error;

/// Errors raised by the solver
///
/// These are programmer or data errors. Running out of candidates or guesses
/// is a normal solve outcome and is reported through
/// [`SolveOutcome`](crate::solver::SolveOutcome) instead.
#[derive(Error, Debug)]
pub enum SolverError {
    /// A word or pattern that is not five valid symbols
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Automatic mode was asked to play without a secret word
    #[error("automatic mode requires a secret word")]
    MissingSecret,

    /// A word list or score table could not be loaded
    #[error("failed to load {source_name}: {reason}")]
    DataLoad { source_name: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SolverError {
    pub(crate) fn invalid_input(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn data_load(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::DataLoad {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, SolverError>;
