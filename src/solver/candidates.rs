//! Live candidate set for one solving session

use crate::core::{Pattern, Word};
use crate::error::Result;
use std::collections::BTreeSet;

/// Candidates still consistent with every observed pattern, plus the letters
/// each position can still hold
///
/// Candidates borrow from the solution universe; filtering only ever drops
/// words and never reorders them.
#[derive(Debug, Clone)]
pub struct CandidateStore<'a> {
    candidates: Vec<&'a Word>,
    available: [BTreeSet<u8>; 5],
}

impl<'a> CandidateStore<'a> {
    /// Build a store over `words`, in their given order
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut store = Self {
            candidates: words.into_iter().collect(),
            available: Default::default(),
        };
        store.recompute_available();
        store
    }

    /// Current candidates, in universe order
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sorted letters still possible at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn available_at(&self, position: usize) -> &BTreeSet<u8> {
        &self.available[position]
    }

    /// Rebuild the per-position letter sets from the current candidates
    pub fn recompute_available(&mut self) {
        for set in &mut self.available {
            set.clear();
        }
        for word in &self.candidates {
            for (set, &letter) in self.available.iter_mut().zip(word.chars()) {
                set.insert(letter);
            }
        }
    }

    /// Keep exactly the candidates that would have produced `pattern` for `guess`
    ///
    /// An empty result is a valid state, not an error.
    pub fn filter(&mut self, guess: &Word, pattern: Pattern) {
        let before = self.candidates.len();
        self.candidates
            .retain(|&candidate| Pattern::compute(candidate, guess) == pattern);
        self.recompute_available();
        log::debug!(
            "filter {guess} {pattern}: {before} -> {} candidates",
            self.candidates.len()
        );
    }

    /// String form of [`filter`](Self::filter)
    ///
    /// The guess is lowercased and the pattern uppercased before use.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if either string is malformed.
    pub fn filter_str(&mut self, guess: &str, pattern: &str) -> Result<()> {
        let guess = Word::new(guess)?;
        let pattern: Pattern = pattern.to_uppercase().parse()?;
        self.filter(&guess, pattern);
        Ok(())
    }

    /// Whether `word` is a current candidate whose every letter is still
    /// available at its position
    ///
    /// Membership already implies the letter check; this is a cheap
    /// consistency check for callers vetting a guess.
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        self.candidates.iter().any(|&candidate| candidate == word)
            && word
                .chars()
                .iter()
                .zip(&self.available)
                .all(|(letter, set)| set.contains(letter))
    }
}
