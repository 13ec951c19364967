//! Pattern input for interactive solving
//!
//! A front end only has to hand back raw lines; validation and re-prompting
//! happen here.

use crate::core::Pattern;
use crate::error::{Result, SolverError};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Source of raw feedback lines
pub trait PatternInput {
    /// Show `prompt` and return the next line, or `None` when input is exhausted
    ///
    /// # Errors
    /// Any I/O error from the underlying source.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Told about a line that was not a valid pattern, before re-prompting
    fn rejected(&mut self, _line: &str, _err: &SolverError) {}
}

/// Prompt until `input` supplies five `B`/`Y`/`G` symbols
///
/// Surrounding whitespace is ignored and case does not matter. Invalid lines
/// are reported through [`PatternInput::rejected`] and the prompt repeats.
///
/// # Errors
/// Returns `SolverError::Io` if reading fails or the input ends.
pub fn read_pattern(input: &mut dyn PatternInput, prompt: &str) -> Result<Pattern> {
    loop {
        let Some(line) = input.read_line(prompt)? else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before a pattern was entered",
            )
            .into());
        };

        match line.trim().to_uppercase().parse::<Pattern>() {
            Ok(pattern) => return Ok(pattern),
            Err(err) => {
                log::debug!("rejected pattern input {line:?}: {err}");
                input.rejected(&line, &err);
            }
        }
    }
}

/// Reads patterns from a terminal or any buffered reader
pub struct ConsoleInput<R> {
    reader: R,
}

impl ConsoleInput<io::StdinLock<'static>> {
    #[must_use]
    pub fn stdin() -> Self {
        Self {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> ConsoleInput<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> PatternInput for ConsoleInput<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn rejected(&mut self, _line: &str, err: &SolverError) {
        println!("Invalid pattern ({err}). Use five of B/Y/G, e.g. BYGBB.");
    }
}

/// Replays a fixed list of lines
///
/// Useful for scripted sessions and tests.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    rejected: usize,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            rejected: 0,
        }
    }

    /// How many lines were rejected so far
    #[must_use]
    pub const fn rejected_count(&self) -> usize {
        self.rejected
    }
}

impl PatternInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn rejected(&mut self, _line: &str, _err: &SolverError) {
        self.rejected += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_and_whitespace() {
        let mut input = ScriptedInput::new([" gybbg \n"]);
        let pattern = read_pattern(&mut input, "pattern").unwrap();
        assert_eq!(pattern.to_string(), "GYBBG");
        assert_eq!(input.rejected_count(), 0);
    }

    #[test]
    fn reprompts_until_valid() {
        let mut input = ScriptedInput::new(["", "GGG", "GXGGG", "gggggg", "BBBBY"]);
        let pattern = read_pattern(&mut input, "pattern").unwrap();
        assert_eq!(pattern.to_string(), "BBBBY");
        assert_eq!(input.rejected_count(), 4);
    }

    #[test]
    fn exhausted_input_is_an_io_error() {
        let mut input = ScriptedInput::new(["nope"]);
        let err = read_pattern(&mut input, "pattern").unwrap_err();
        assert!(matches!(err, SolverError::Io(ref e) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn console_input_reads_lines() {
        let mut input = ConsoleInput::new("xx\nYYBBG\n".as_bytes());
        let pattern = read_pattern(&mut input, "pattern").unwrap();
        assert_eq!(pattern.to_string(), "YYBBG");
    }

    #[test]
    fn console_input_reports_eof() {
        let mut input = ConsoleInput::new("".as_bytes());
        assert!(input.read_line("pattern").unwrap().is_none());
    }
}
