//! Entropy Wordle - CLI
//!
//! Interactive and automatic Wordle solving driven by information theory.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use entropy_wordle::{
    commands::{
        analyze_word, generate_info, hint_for, load_candidates, play_random, print_instructions,
        run_simple, run_test_all, solve_word, write_info,
    },
    core::Word,
    output::{print_analysis_result, print_batch_report, print_solve_report},
    solver::{ConsoleInput, Solver, SolverConfig},
    wordlists::{ScoreTable, Tables, default_universe, loader::load_from_file},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "entropy_wordle",
    about = "Wordle solver that maximizes expected information per guess",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses allowed per game
    #[arg(long, global = true, default_value_t = SolverConfig::default().max_attempts)]
    max_attempts: usize,

    /// Rank by entropy once this few candidates remain
    #[arg(long, global = true, default_value_t = SolverConfig::default().entropy_threshold)]
    entropy_threshold: usize,

    /// Word list file (one word per line); embedded list when absent
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Letter frequency table (JSON object); embedded table when absent
    #[arg(long, global = true)]
    frequency: Option<PathBuf>,

    /// Precomputed info scores (JSON object); embedded table when absent
    #[arg(long, global = true)]
    info: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: report the feedback for each suggested guess (default)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show how each guess was chosen and how much it narrowed the field
        #[arg(short, long)]
        verbose: bool,
    },

    /// Suggest the next guess for a list of remaining candidates
    Hint {
        /// Candidate list file; reads stdin when absent
        file: Option<PathBuf>,
    },

    /// Solve every word in the list and report the guess distribution
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze the entropy of a specific word against the whole list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Watch the solver play against a random word
    Play,

    /// Precompute info scores for every word in the list
    GenInfo {
        /// Output file; prints to stdout when absent
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Load the word list from `--words`, or the embedded one
fn load_universe(path: Option<&Path>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => load_from_file(path)?,
        None => default_universe()?,
    };
    log::debug!("universe has {} words", words.len());
    Ok(words)
}

/// Embedded tables with any `--frequency` / `--info` overrides applied
fn load_tables(frequency: Option<&Path>, info: Option<&Path>) -> Result<Tables> {
    let mut tables = Tables::embedded()?;
    if let Some(path) = frequency {
        tables.frequency = ScoreTable::load_from_file(path)?;
    }
    if let Some(path) = info {
        tables.info = ScoreTable::load_from_file(path)?;
    }
    Ok(tables)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let universe = load_universe(cli.words.as_deref())?;
    let tables = load_tables(cli.frequency.as_deref(), cli.info.as_deref())?;
    let config = SolverConfig {
        max_attempts: cli.max_attempts,
        entropy_threshold: cli.entropy_threshold,
    };
    let solver = Solver::new(&universe, &tables, config);

    // Default to interactive mode if no command given
    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple_command(&solver),
        Commands::Solve { word, verbose } => run_solve_command(&solver, &word, verbose),
        Commands::Hint { file } => {
            let candidates = load_candidates(file.as_deref())?;
            println!("{}", hint_for(&solver, &candidates));
            Ok(())
        }
        Commands::TestAll { limit, json } => run_test_all_command(&solver, limit, json),
        Commands::Analyze { word } => {
            let result = analyze_word(&word, solver.universe())?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Play => {
            let (secret, report) = play_random(&solver)?;
            print_solve_report(Some(secret), &report, true);
            Ok(())
        }
        Commands::GenInfo { output } => {
            let table = generate_info(solver.universe());
            if let Some(json) = write_info(&table, output.as_deref())? {
                println!("{json}");
            }
            Ok(())
        }
    }
}

fn run_simple_command(solver: &Solver<'_>) -> Result<()> {
    print_instructions(solver.config().max_attempts);

    let mut input = ConsoleInput::stdin();
    let report = run_simple(solver, &mut input).context("interactive session ended")?;

    print_solve_report(None, &report, false);
    Ok(())
}

fn run_solve_command(solver: &Solver<'_>, word: &str, verbose: bool) -> Result<()> {
    let report = solve_word(solver, word)?;
    let secret = Word::new(word)?;

    print_solve_report(Some(&secret), &report, verbose);
    Ok(())
}

fn run_test_all_command(solver: &Solver<'_>, limit: Option<usize>, json: bool) -> Result<()> {
    let universe = solver.universe();
    let count = limit.unwrap_or(universe.len()).min(universe.len());
    if count == 0 {
        bail!("nothing to test");
    }

    if !json {
        println!("\n{}", "═".repeat(70));
        println!(" Comprehensive Wordle Solver Test ");
        println!("{}", "═".repeat(70));
        println!("\n🎯 Testing {count} of {} words", universe.len());
    }

    let report = run_test_all(solver, &universe[..count], !json)?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_batch_report(&report);
    }
    Ok(())
}
