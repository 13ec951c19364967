//! Entropy-maximizing guess ranking
//!
//! Selects the guess that maximizes Shannon entropy over the candidates.

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Entropy per guess for one fixed candidate snapshot
///
/// Built by a single [`rank_entropy`] call and dropped with it. Each distinct
/// guess is evaluated once, in parallel.
#[derive(Debug)]
pub struct EntropyCache<'a> {
    entries: FxHashMap<&'a Word, f64>,
}

impl<'a> EntropyCache<'a> {
    /// Evaluate every distinct guess in `guess_pool` against `candidates`
    #[must_use]
    pub fn build(guess_pool: &[&'a Word], candidates: &[&Word]) -> Self {
        let mut seen = FxHashSet::default();
        let distinct: Vec<&'a Word> = guess_pool
            .iter()
            .copied()
            .filter(|&guess| seen.insert(guess))
            .collect();

        let entries = distinct
            .par_iter()
            .map(|&guess| (guess, calculate_entropy(guess, candidates)))
            .collect();

        Self { entries }
    }

    /// Cached entropy for `guess`, if it was in the pool
    #[must_use]
    pub fn get(&self, guess: &Word) -> Option<f64> {
        self.entries.get(guess).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pick the guess with the highest entropy over `candidates`
///
/// Returns the guess and its entropy, or `None` if the pool is empty. Ties go
/// to the guess that comes first in `guess_pool`, so results are reproducible
/// no matter how the parallel evaluation is scheduled.
///
/// # Examples
/// ```
/// use entropy_wordle::core::Word;
/// use entropy_wordle::solver::entropy::rank_entropy;
///
/// let words: Vec<Word> = ["aaaaa", "crane", "crate", "grate", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let (best, entropy) = rank_entropy(&refs[1..], &refs).unwrap();
/// assert_ne!(best.text(), "aaaaa");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn rank_entropy<'a>(candidates: &[&Word], guess_pool: &[&'a Word]) -> Option<(&'a Word, f64)> {
    let cache = EntropyCache::build(guess_pool, candidates);

    let mut best: Option<(&'a Word, f64)> = None;
    for &guess in guess_pool {
        let entropy = cache.get(guess).unwrap_or(0.0);
        match best {
            Some((_, best_entropy)) if entropy <= best_entropy => {}
            _ => best = Some((guess, entropy)),
        }
    }

    if let Some((word, entropy)) = best {
        log::debug!(
            "entropy pick {word} ({entropy:.3} bits) from {} guesses over {} candidates",
            cache.len(),
            candidates.len()
        );
    }
    best
}
