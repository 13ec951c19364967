//! Simple interactive CLI mode
//!
//! The solver suggests guesses and the player reports the feedback they got.

use crate::error::Result;
use crate::solver::{Mode, PatternInput, SolveReport, Solver};

/// Print how feedback is entered
pub fn print_instructions(max_attempts: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses that maximize expected information.");
    println!("After each guess, enter the feedback pattern as five letters:\n");
    println!("  - G for green (correct position)");
    println!("  - Y for yellow (in the word, wrong position)");
    println!("  - B for black (not in the word)\n");
    println!("Up to {max_attempts} guesses. Example: BYGBB\n");
}

/// Run one interactive game, reading feedback from `input`
///
/// # Errors
///
/// Returns an error if reading input fails or the input ends before the game
/// does. Invalid patterns are re-prompted, not errors.
pub fn run_simple<'a>(
    solver: &Solver<'a>,
    input: &mut dyn PatternInput,
) -> Result<SolveReport<'a>> {
    let mut session = solver.session();
    session.solve(None, Mode::Interactive(input), solver.config().max_attempts)
}
