//! Key → score tables
//!
//! Both the letter frequency table and the precomputed info table are flat
//! JSON objects mapping a lowercase key to a number.

use super::embedded::{FREQUENCY_JSON, INFO_JSON};
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Read-only mapping from a key to a numeric score
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    scores: FxHashMap<String, f64>,
}

impl ScoreTable {
    /// Decode a table from a JSON object of numbers
    ///
    /// Keys are lowercased.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::DataLoad` if the text is not a JSON object whose
    /// values are all numbers, or if two keys differ only in case.
    ///
    /// # Examples
    /// ```
    /// use entropy_wordle::wordlists::ScoreTable;
    ///
    /// let table = ScoreTable::from_json_str("inline", r#"{"E": 12.7, "z": 0.07}"#).unwrap();
    /// assert_eq!(table.get("e"), Some(12.7));
    /// assert_eq!(table.get("q"), None);
    /// ```
    pub fn from_json_str(source_name: &str, json: &str) -> Result<Self> {
        let raw: BTreeMap<String, f64> =
            serde_json::from_str(json).map_err(|e| SolverError::data_load(source_name, e))?;

        let mut scores = FxHashMap::default();
        for (key, score) in raw {
            let lowered = key.to_lowercase();
            if scores.insert(lowered, score).is_some() {
                return Err(SolverError::data_load(
                    source_name,
                    format!("key {key:?} repeats another key up to case"),
                ));
            }
        }
        Ok(Self { scores })
    }

    /// Load a table from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `SolverError::DataLoad` if the file cannot be read or decoded.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let json = fs::read_to_string(path).map_err(|e| SolverError::data_load(&source_name, e))?;
        Self::from_json_str(&source_name, &json)
    }

    /// Score for `key`, if present
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied()
    }

    /// Weight of a single letter, 0 when absent
    #[must_use]
    pub fn letter_weight(&self, letter: u8) -> f64 {
        let mut buf = [0u8; 4];
        let key = char::from(letter).encode_utf8(&mut buf);
        self.get(key).unwrap_or(0.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Encode as a pretty JSON object with sorted keys
    ///
    /// # Errors
    ///
    /// Returns `SolverError::DataLoad` if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        let sorted: BTreeMap<&str, f64> = self
            .scores
            .iter()
            .map(|(key, &score)| (key.as_str(), score))
            .collect();
        serde_json::to_string_pretty(&sorted).map_err(|e| SolverError::data_load("score table", e))
    }
}

impl FromIterator<(String, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            scores: iter
                .into_iter()
                .map(|(key, score)| (key.to_lowercase(), score))
                .collect(),
        }
    }
}

/// The static tables consulted by the fallback heuristics
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// Letter → weight
    pub frequency: ScoreTable,
    /// Word → precomputed score
    pub info: ScoreTable,
}

impl Tables {
    /// Decode the tables compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `SolverError::DataLoad` if the embedded JSON is malformed.
    pub fn embedded() -> Result<Self> {
        Ok(Self {
            frequency: ScoreTable::from_json_str("embedded frequency table", FREQUENCY_JSON)?,
            info: ScoreTable::from_json_str("embedded info table", INFO_JSON)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercased() {
        let table = ScoreTable::from_json_str("t", r#"{"CRANE": 5.7}"#).unwrap();
        assert_eq!(table.get("crane"), Some(5.7));
        assert_eq!(table.get("CRANE"), None);
    }

    #[test]
    fn keys_differing_only_in_case_are_rejected() {
        let err = ScoreTable::from_json_str("t", r#"{"CRANE": 5.7, "crane": 1.0}"#).unwrap_err();
        assert!(matches!(err, SolverError::DataLoad { .. }));
        assert!(err.to_string().contains("crane"));
    }

    #[test]
    fn integers_decode_as_numbers() {
        let table = ScoreTable::from_json_str("t", r#"{"a": 3}"#).unwrap();
        assert_eq!(table.letter_weight(b'a'), 3.0);
    }

    #[test]
    fn malformed_json_is_a_data_load_error() {
        for bad in [r#"{"a": "high"}"#, "[1, 2]", "{a: 1}", ""] {
            assert!(
                matches!(
                    ScoreTable::from_json_str("t", bad),
                    Err(SolverError::DataLoad { .. })
                ),
                "{bad:?} should fail"
            );
        }
    }

    #[test]
    fn missing_letter_weighs_nothing() {
        let table = ScoreTable::from_json_str("t", r#"{"e": 12.7}"#).unwrap();
        assert_eq!(table.letter_weight(b'e'), 12.7);
        assert_eq!(table.letter_weight(b'q'), 0.0);
    }

    #[test]
    fn json_output_is_sorted_and_decodable() {
        let table: ScoreTable = [("b".to_string(), 2.0), ("a".to_string(), 1.0)]
            .into_iter()
            .collect();
        let json = table.to_json_pretty().unwrap();
        assert!(json.find("\"a\"").unwrap() < json.find("\"b\"").unwrap());

        let decoded = ScoreTable::from_json_str("round trip", &json).unwrap();
        assert_eq!(decoded.get("b"), Some(2.0));
    }

    #[test]
    fn embedded_tables_decode() {
        let tables = Tables::embedded().unwrap();
        assert_eq!(tables.frequency.len(), 26);
        assert!(tables.frequency.letter_weight(b'e') > tables.frequency.letter_weight(b'z'));
        assert!(!tables.info.is_empty());
    }
}
