//! Wordle solving algorithms
//!
//! Candidate tracking, entropy ranking, the guess selection ladder and the
//! per-game loop that ties them together.

pub mod candidates;
mod engine;
pub mod entropy;
mod hint;
pub mod input;
pub mod selector;
mod session;

pub use candidates::CandidateStore;
pub use engine::{Solver, SolverConfig};
pub use hint::{Hint, NO_WORDS_LEFT, hint};
pub use input::{ConsoleInput, PatternInput, ScriptedInput, read_pattern};
pub use selector::{GuessSelector, Method, Selection};
pub use session::{Mode, Round, Session, SolveOutcome, SolveReport};
