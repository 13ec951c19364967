//! Command implementations

pub mod analyze;
pub mod gen_info;
pub mod hint;
pub mod play;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use gen_info::{generate_info, write_info};
pub use hint::{hint_for, load_candidates};
pub use play::{play_random, random_secret};
pub use simple::{print_instructions, run_simple};
pub use solve::solve_word;
pub use test_all::{BatchReport, run_test_all};
