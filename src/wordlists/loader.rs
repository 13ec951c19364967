//! Word list loading utilities
//!
//! Every provider here is strict: a malformed entry or an empty list is a
//! `DataLoad` error, never silently skipped.

use crate::core::Word;
use crate::error::{Result, SolverError};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse newline-delimited words
///
/// Blank lines are ignored; entries are trimmed and lowercased.
///
/// # Errors
///
/// Returns `SolverError::DataLoad` naming `source_name` and the offending
/// line if an entry is not five letters, or if no words were found.
pub fn parse_words<'s, I>(source_name: &str, lines: I) -> Result<Vec<Word>>
where
    I: IntoIterator<Item = &'s str>,
{
    let mut words = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed)
            .map_err(|e| SolverError::data_load(source_name, format!("line {}: {e}", idx + 1)))?;
        words.push(word);
    }

    if words.is_empty() {
        return Err(SolverError::data_load(source_name, "no words found"));
    }

    log::debug!("loaded {} words from {source_name}", words.len());
    Ok(words)
}

/// Load words from a file
///
/// # Errors
///
/// Returns `SolverError::DataLoad` if the file cannot be read or contains
/// an invalid entry.
///
/// # Examples
/// ```no_run
/// use entropy_wordle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let source_name = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SolverError::data_load(&source_name, e))?;
    parse_words(&source_name, content.lines())
}

/// Load words from any reader, e.g. stdin
///
/// # Errors
///
/// Returns `SolverError::Io` if reading fails and `SolverError::DataLoad`
/// on an invalid entry.
pub fn load_from_reader<R: Read>(source_name: &str, mut reader: R) -> Result<Vec<Word>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_words(source_name, content.lines())
}

/// Convert a string slice to a Word vector
///
/// # Errors
///
/// Returns `SolverError::DataLoad` if any entry is invalid or the slice is empty.
///
/// # Examples
/// ```
/// use entropy_wordle::wordlists::loader::words_from_slice;
/// use entropy_wordle::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS).unwrap();
/// assert_eq!(words.len(), WORDS.len());
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>> {
    parse_words("word slice", slice.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "SLATE", " irate "]).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn invalid_entry_is_a_data_load_error() {
        let err = words_from_slice(&["crane", "toolong", "slate"]).unwrap_err();
        match err {
            SolverError::DataLoad { reason, .. } => assert!(reason.starts_with("line 2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_list_is_a_data_load_error() {
        assert!(matches!(
            words_from_slice(&[]),
            Err(SolverError::DataLoad { .. })
        ));
        assert!(matches!(
            parse_words("blank", "\n  \n\n".lines()),
            Err(SolverError::DataLoad { .. })
        ));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let words = parse_words("inline", "crane\n\nslate\n".lines()).unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn reader_input_is_parsed() {
        let words = load_from_reader("stdin", "atoll\nallot\n".as_bytes()).unwrap();
        assert_eq!(words[1].text(), "allot");
    }

    #[test]
    fn missing_file_is_a_data_load_error() {
        assert!(matches!(
            load_from_file("definitely/not/here.txt"),
            Err(SolverError::DataLoad { .. })
        ));
    }
}
