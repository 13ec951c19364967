//! Guess selection ladder
//!
//! Entropy is exact but quadratic in the number of candidates, so it only
//! runs below a size threshold. Above it, precomputed info scores and then a
//! letter-frequency heuristic stand in.

use super::candidates::CandidateStore;
use super::entropy::rank_entropy;
use crate::core::Word;
use crate::wordlists::{ScoreTable, Tables};
use std::fmt;

/// Which rung of the ladder picked a guess, with its score
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Method {
    /// Highest entropy over the candidates
    Entropy { bits: f64 },
    /// Highest precomputed info score
    Info { score: f64 },
    /// Most distinct letters, then highest summed letter weight
    LetterFrequency { distinct: usize, weight: f64 },
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy { bits } => write!(f, "entropy {bits:.3} bits"),
            Self::Info { score } => write!(f, "info score {score:.3}"),
            Self::LetterFrequency { distinct, weight } => {
                write!(f, "{distinct} distinct letters, weight {weight:.2}")
            }
        }
    }
}

/// A chosen guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub word: &'a Word,
    pub method: Method,
}

/// Picks the next guess from a candidate store
#[derive(Debug, Clone, Copy)]
pub struct GuessSelector<'t> {
    tables: &'t Tables,
    entropy_threshold: usize,
}

impl<'t> GuessSelector<'t> {
    /// Largest candidate count entropy ranking runs on by default
    pub const DEFAULT_ENTROPY_THRESHOLD: usize = 500;

    #[must_use]
    pub const fn new(tables: &'t Tables, entropy_threshold: usize) -> Self {
        Self {
            tables,
            entropy_threshold,
        }
    }

    /// Choose the next guess, drawn from the candidates themselves
    ///
    /// Returns `None` only when no candidates remain.
    #[must_use]
    pub fn select_guess<'a>(&self, store: &CandidateStore<'a>) -> Option<Selection<'a>> {
        let candidates = store.candidates();
        if candidates.is_empty() {
            return None;
        }

        if candidates.len() <= self.entropy_threshold
            && let Some((word, bits)) = rank_entropy(candidates, candidates)
        {
            return Some(Selection {
                word,
                method: Method::Entropy { bits },
            });
        }

        if let Some((word, score)) = best_by_info(candidates, &self.tables.info) {
            log::debug!("info pick {word} ({score:.3}) from {} candidates", candidates.len());
            return Some(Selection {
                word,
                method: Method::Info { score },
            });
        }

        best_by_letters(candidates, &self.tables.frequency).map(|(word, distinct, weight)| {
            log::debug!("letter pick {word} ({distinct} letters, weight {weight:.2})");
            Selection {
                word,
                method: Method::LetterFrequency { distinct, weight },
            }
        })
    }
}

/// Candidate with the highest info score; first wins on ties
fn best_by_info<'a>(candidates: &[&'a Word], info: &ScoreTable) -> Option<(&'a Word, f64)> {
    let mut best: Option<(&'a Word, f64)> = None;
    for &word in candidates {
        let Some(score) = info.get(word.text()) else {
            continue;
        };
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((word, score)),
        }
    }
    best
}

/// Candidate maximizing (distinct letters, summed weight of distinct letters);
/// first wins on ties
fn best_by_letters<'a>(
    candidates: &[&'a Word],
    frequency: &ScoreTable,
) -> Option<(&'a Word, usize, f64)> {
    let mut best: Option<(&'a Word, usize, f64)> = None;
    for &word in candidates {
        let letters = word.distinct_letters();
        let distinct = letters.len();
        let weight: f64 = letters.iter().map(|&l| frequency.letter_weight(l)).sum();

        let better = match best {
            None => true,
            Some((_, best_distinct, best_weight)) => {
                distinct > best_distinct || (distinct == best_distinct && weight > best_weight)
            }
        };
        if better {
            best = Some((word, distinct, weight));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn tables(info: &str, frequency: &str) -> Tables {
        Tables {
            frequency: ScoreTable::from_json_str("frequency", frequency).unwrap(),
            info: ScoreTable::from_json_str("info", info).unwrap(),
        }
    }

    const FREQUENCY: &str =
        r#"{"e": 12.0, "a": 8.0, "t": 9.0, "s": 6.0, "l": 4.0, "o": 7.0, "b": 1.0}"#;

    #[test]
    fn empty_store_yields_nothing() {
        let tables = tables("{}", FREQUENCY);
        let selector = GuessSelector::new(&tables, 500);
        let store = CandidateStore::new(std::iter::empty());

        assert!(selector.select_guess(&store).is_none());
    }

    #[test]
    fn small_sets_use_entropy() {
        let tables = tables(r#"{"slate": 9.9}"#, FREQUENCY);
        let selector = GuessSelector::new(&tables, 500);
        let words = words_from_slice(&["aaaaa", "crane", "crate", "grate", "slate"]).unwrap();
        let store = CandidateStore::new(&words);

        let selection = selector.select_guess(&store).unwrap();

        assert!(matches!(selection.method, Method::Entropy { .. }));
        assert_ne!(selection.word.text(), "aaaaa");
    }

    #[test]
    fn single_candidate_is_returned() {
        let tables = tables("{}", FREQUENCY);
        let selector = GuessSelector::new(&tables, 500);
        let words = words_from_slice(&["atoll"]).unwrap();
        let store = CandidateStore::new(&words);

        let selection = selector.select_guess(&store).unwrap();
        assert_eq!(selection.word.text(), "atoll");
        assert_eq!(selection.method, Method::Entropy { bits: 0.0 });
    }

    #[test]
    fn large_sets_use_info_scores_of_candidates_only() {
        let tables = tables(r#"{"zzzzz": 99.0, "crate": 5.8, "slate": 5.9}"#, FREQUENCY);
        let selector = GuessSelector::new(&tables, 2);
        let words = words_from_slice(&["crane", "crate", "slate"]).unwrap();
        let store = CandidateStore::new(&words);

        let selection = selector.select_guess(&store).unwrap();

        assert_eq!(selection.word.text(), "slate");
        assert_eq!(selection.method, Method::Info { score: 5.9 });
    }

    #[test]
    fn info_ties_keep_the_first() {
        let tables = tables(r#"{"crate": 5.0, "slate": 5.0}"#, FREQUENCY);
        let selector = GuessSelector::new(&tables, 0);
        let words = words_from_slice(&["crane", "crate", "slate"]).unwrap();
        let store = CandidateStore::new(&words);

        assert_eq!(selector.select_guess(&store).unwrap().word.text(), "crate");
    }

    #[test]
    fn letter_heuristic_prefers_distinct_letters_then_weight() {
        let tables = tables("{}", FREQUENCY);
        let selector = GuessSelector::new(&tables, 0);
        // atoll has 4 distinct letters; stale and bloat have 5, stale weighs more
        let words = words_from_slice(&["atoll", "bloat", "stale"]).unwrap();
        let store = CandidateStore::new(&words);

        let selection = selector.select_guess(&store).unwrap();

        assert_eq!(selection.word.text(), "stale");
        match selection.method {
            Method::LetterFrequency { distinct, weight } => {
                assert_eq!(distinct, 5);
                assert!((weight - 39.0).abs() < 1e-9);
            }
            other => panic!("unexpected method {other}"),
        }
    }

    #[test]
    fn letter_heuristic_ties_keep_the_first() {
        let tables = tables("{}", "{}");
        let selector = GuessSelector::new(&tables, 0);
        let words = words_from_slice(&["bloat", "stale", "atoll"]).unwrap();
        let store = CandidateStore::new(&words);

        assert_eq!(selector.select_guess(&store).unwrap().word.text(), "bloat");
    }
}
