//! Display functions for command results

use super::formatters::{create_progress_bar, entropy_bar, plural_guesses};
use crate::commands::{AnalysisResult, BatchReport};
use crate::commands::test_all::FAILED;
use crate::core::Word;
use crate::solver::{SolveOutcome, SolveReport};
use colored::Colorize;

/// Print a game transcript
///
/// `secret` is shown in the header when known. With `verbose`, each round
/// also lists how the guess was chosen and how far it narrowed the field.
pub fn print_solve_report(secret: Option<&Word>, report: &SolveReport<'_>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    match secret {
        Some(secret) => println!(
            "Solving: {}",
            secret.text().to_uppercase().bright_yellow().bold()
        ),
        None => println!("{}", "Transcript".bright_yellow().bold()),
    }
    println!("{}", "─".repeat(60).cyan());

    for round in &report.rounds {
        println!(
            "\nTurn {}: {} {}",
            round.attempt,
            round.guess.text().to_uppercase(),
            round.pattern.to_emoji()
        );

        if verbose {
            println!("  Chosen by:  {}", round.method);
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
            if round.stalled {
                println!("  {}", "No candidates eliminated".yellow());
            } else if round.candidates_after > 0
                && round.candidates_after < round.candidates_before
            {
                let reduction = round.candidates_before as f64 / round.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    match report.outcome {
        SolveOutcome::Solved(attempts) => println!(
            "{}",
            format!("✅ Solved in {}!", plural_guesses(attempts))
                .green()
                .bold()
        ),
        SolveOutcome::Exhausted => println!(
            "{}",
            format!("❌ Failed to solve in {}", plural_guesses(report.rounds.len()))
                .red()
                .bold()
        ),
        SolveOutcome::Unsolvable => println!(
            "{}",
            "❌ No candidates remain! The feedback may be inconsistent."
                .red()
                .bold()
        ),
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let metrics = &result.metrics;
    let bar = entropy_bar(metrics.entropy, result.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", metrics.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction()
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        metrics.expected_remaining
    );
    println!(
        "   Worst case:  {} candidates ({} patterns)",
        metrics.max_partition, metrics.groups
    );
}

/// Print a batch report with a guess histogram
pub fn print_batch_report(report: &BatchReport) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let percent = |count: usize| {
        if report.total == 0 {
            0.0
        } else {
            count as f64 / report.total as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", report.total);
    println!(
        "  Successfully solved: {} {}",
        report.solved(),
        format!("({:.1}%)", percent(report.solved())).green()
    );
    if report.failed() > 0 {
        println!(
            "  Failed to solve:     {} {}",
            report.failed(),
            format!("({:.1}%)", percent(report.failed())).red()
        );
    }
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", report.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!("  Total time:          {:.2}s", report.elapsed_secs);

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = report.histogram.values().copied().max().unwrap_or(0);
    for (&code, &count) in report.histogram.iter().filter(|&(&code, _)| code != FAILED) {
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {code} guesses: {} {count:4} ({:5.1}%)",
            bar.green(),
            percent(count)
        );
    }
    let failed = report.failed();
    let bar = create_progress_bar(failed as f64, max_count as f64, 40);
    println!(
        "  failed:    {} {failed:4} ({:5.1}%)",
        bar.red(),
        percent(failed)
    );
}
