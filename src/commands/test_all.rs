//! Test all answers - batch solver evaluation
//!
//! Plays an automatic game against every secret and tallies how many guesses
//! each one took.

use crate::core::Word;
use crate::error::Result;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Histogram key for games that were not solved
pub const FAILED: i32 = -1;

/// Outcome counts for a batch run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Games played
    pub total: usize,
    /// Attempts used (`1..=max_attempts`, or -1 for failures) to game count.
    /// Every bucket is present, even when empty.
    pub histogram: BTreeMap<i32, usize>,
    /// Wall-clock time for the whole batch
    pub elapsed_secs: f64,
}

impl BatchReport {
    /// Tally outcome codes into a zero-filled histogram
    #[must_use]
    pub fn from_codes<I>(codes: I, max_attempts: usize, elapsed_secs: f64) -> Self
    where
        I: IntoIterator<Item = i32>,
    {
        let mut histogram: BTreeMap<i32, usize> = (1..=max_attempts)
            .filter_map(|attempts| i32::try_from(attempts).ok())
            .map(|attempts| (attempts, 0))
            .collect();
        histogram.insert(FAILED, 0);

        let mut total = 0;
        for code in codes {
            *histogram.entry(code).or_insert(0) += 1;
            total += 1;
        }

        Self {
            total,
            histogram,
            elapsed_secs,
        }
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.histogram.get(&FAILED).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn solved(&self) -> usize {
        self.total - self.failed()
    }

    /// Mean attempts over solved games, 0 if none were solved
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        let solved = self.solved();
        if solved == 0 {
            return 0.0;
        }
        let attempts: usize = self
            .histogram
            .iter()
            .filter_map(|(&code, &count)| usize::try_from(code).ok().map(|n| n * count))
            .sum();
        attempts as f64 / solved as f64
    }

    /// Pretty-printed JSON for downstream tooling
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Solve every word in `secrets` in parallel
///
/// Each game runs in its own session; the solver is only read.
///
/// # Errors
/// Propagates the first solver error; unsolved games are counted, not errors.
pub fn run_test_all(
    solver: &Solver<'_>,
    secrets: &[Word],
    show_progress: bool,
) -> Result<BatchReport> {
    log::info!("batch over {} secrets started", secrets.len());
    let pb = progress_bar(secrets.len(), show_progress);
    let start = Instant::now();

    let codes = secrets
        .par_iter()
        .map(|secret| {
            let report = solver.solve_automatic(secret)?;
            pb.inc(1);
            Ok(report.outcome.code())
        })
        .collect::<Result<Vec<i32>>>()?;

    pb.finish_and_clear();
    let elapsed = start.elapsed().as_secs_f64();
    let report = BatchReport::from_codes(codes, solver.config().max_attempts, elapsed);
    log::info!(
        "batch finished: {} solved, {} failed in {:.2}s",
        report.solved(),
        report.failed(),
        report.elapsed_secs
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::SolverConfig;
    use crate::wordlists::Tables;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn histogram_is_zero_filled() {
        let report = BatchReport::from_codes([], 6, 0.0);

        assert_eq!(report.total, 0);
        assert_eq!(report.histogram.len(), 7);
        assert!(report.histogram.values().all(|&count| count == 0));
        assert!(report.average_attempts().abs() < f64::EPSILON);
    }

    #[test]
    fn tallies_codes() {
        let report = BatchReport::from_codes([1, 3, 3, -1, 2], 6, 1.5);

        assert_eq!(report.total, 5);
        assert_eq!(report.histogram[&3], 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.solved(), 4);
        assert!((report.average_attempts() - 2.25).abs() < 1e-9);
    }

    #[test]
    fn json_lists_every_bucket() {
        let report = BatchReport::from_codes([2], 3, 0.25);
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(json["total"], 1);
        assert_eq!(json["histogram"]["-1"], 0);
        assert_eq!(json["histogram"]["1"], 0);
        assert_eq!(json["histogram"]["2"], 1);
        assert_eq!(json["histogram"]["3"], 0);
        assert_eq!(json["elapsed_secs"], 0.25);
    }

    #[test]
    fn batch_covers_every_secret() {
        let words =
            words_from_slice(&["crane", "crate", "grate", "irate", "atoll", "allot", "abbey"])
                .unwrap();
        let tables = Tables::default();
        let solver = Solver::new(&words, &tables, SolverConfig::default());

        let report = run_test_all(&solver, &words, false).unwrap();

        assert_eq!(report.total, words.len());
        assert_eq!(report.histogram.values().sum::<usize>(), words.len());
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn tight_budget_records_failures() {
        let words = words_from_slice(&["crane", "crate", "grate", "irate"]).unwrap();
        let tables = Tables::default();
        let config = SolverConfig {
            max_attempts: 1,
            ..SolverConfig::default()
        };
        let solver = Solver::new(&words, &tables, config);

        let report = run_test_all(&solver, &words, false).unwrap();

        assert_eq!(report.histogram[&1], 1);
        assert_eq!(report.failed(), 3);
        assert_eq!(report.histogram.len(), 2);
    }
}
