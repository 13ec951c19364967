//! Shannon entropy of the pattern distribution a guess induces
//!
//! Every candidate is treated as a hypothetical secret; the guess splits the
//! candidates into groups that share a pattern. The more evenly it splits
//! them, the more a single round of feedback tells us.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Summary numbers for one guess against one candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of candidates left after this guess
    pub expected_remaining: f64,
    /// Size of the largest group (worst-case candidates left)
    pub max_partition: usize,
    /// Number of distinct patterns
    pub groups: usize,
}

/// Candidates grouped by the pattern they produce for one guess
#[derive(Debug, Clone, Default)]
pub struct Partition {
    sizes: FxHashMap<Pattern, usize>,
    total: usize,
}

impl Partition {
    /// Partition `candidates` by their pattern against `guess`
    #[must_use]
    pub fn of(guess: &Word, candidates: &[&Word]) -> Self {
        let mut sizes: FxHashMap<Pattern, usize> = FxHashMap::default();
        for &candidate in candidates {
            *sizes.entry(Pattern::compute(candidate, guess)).or_insert(0) += 1;
        }
        Self {
            sizes,
            total: candidates.len(),
        }
    }

    /// Number of non-empty groups
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.sizes.len()
    }

    /// Size of the group for `pattern`
    #[must_use]
    pub fn size_of(&self, pattern: Pattern) -> usize {
        self.sizes.get(&pattern).copied().unwrap_or(0)
    }

    /// H = -Σ p·log₂(p) over the non-empty groups
    ///
    /// Zero for an empty partition or a single group; at most log₂(groups).
    #[must_use]
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        // summed in size order so equal splits give bit-identical results
        let h: f64 = self
            .sorted_sizes()
            .into_iter()
            .map(|size| {
                let p = size as f64 / total;
                -p * p.log2()
            })
            .sum();
        // a single group sums to -0.0
        h.max(0.0)
    }

    /// Group sizes, smallest first
    #[must_use]
    pub fn sorted_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.sizes.values().copied().collect();
        sizes.sort_unstable();
        sizes
    }

    /// Σ p·size: the candidate count we expect to face next round
    #[must_use]
    pub fn expected_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let squares: usize = self.sizes.values().map(|&size| size * size).sum();
        squares as f64 / self.total as f64
    }

    #[must_use]
    pub fn metrics(&self) -> GuessMetrics {
        GuessMetrics {
            entropy: self.entropy(),
            expected_remaining: self.expected_remaining(),
            max_partition: self.sizes.values().copied().max().unwrap_or(0),
            groups: self.group_count(),
        }
    }
}

/// Entropy in bits of `guess` against `candidates`
///
/// # Examples
/// ```
/// use entropy_wordle::core::Word;
/// use entropy_wordle::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("slate").unwrap();
/// let candidates = [Word::new("slate").unwrap(), Word::new("fghij").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// // two equally likely patterns
/// assert!((calculate_entropy(&guess, &refs) - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    Partition::of(guess, candidates).entropy()
}

/// Entropy, expected remaining and worst case for `guess`
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    Partition::of(guess, candidates).metrics()
}
