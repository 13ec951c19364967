//! Entropy Wordle
//!
//! A Wordle solver that picks each guess to maximize the expected information
//! gained from the feedback, falling back to precomputed scores and letter
//! frequencies while the candidate set is large.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use entropy_wordle::core::compute_feedback;
//! use entropy_wordle::solver::{Solver, SolverConfig};
//! use entropy_wordle::wordlists::{Tables, default_universe};
//!
//! // Score a guess against a secret
//! let pattern = compute_feedback("atoll", "allot").unwrap();
//! assert_eq!(pattern.to_string(), "GYYYY");
//!
//! // Solve a word with the embedded data
//! let universe = default_universe().unwrap();
//! let tables = Tables::embedded().unwrap();
//! let solver = Solver::new(&universe, &tables, SolverConfig::default());
//! let report = solver.solve_automatic(&universe[0]).unwrap();
//! println!("solved in {}", report.outcome.code());
//! ```

// Core domain types
pub mod core;

// Error type shared across the crate
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists and score tables
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
