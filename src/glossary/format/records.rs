//! Term file record parsing.
//!
//! A term file is a sequence of records:
//!
//! ```text
//! Term                 <- one line
//! definition line 1    <- one or more non-blank lines
//! definition line 2
//!                      <- blank line (or end of input) closes the record
//! ```
//!
//! Lines may end with `\n`, `\r\n` or a lone `\r`.
//!
//! Parsing is a two-state machine fed one line at a time. A blank line seen
//! while a term is expected is malformed input; it is skipped and counted so
//! that no record with an empty term is ever produced.

use std::mem;

use log::{trace, warn};

/// A completed `(term, definition)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub term: String,
    /// Definition lines joined with `\n`, trimmed at both ends.
    pub definition: String,
}

#[derive(Debug, Default)]
enum ParseState {
    #[default]
    AwaitingTerm,
    ReadingDefinition { term: String, buffer: String },
}

/// Incremental record parser.
#[derive(Debug, Default)]
pub struct RecordParser {
    state: ParseState,
    line_number: usize,
    skipped_blank_lines: usize,
}

impl RecordParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next input line (without its line terminator).
    ///
    /// Returns a record when `line` closes one.
    pub fn feed(&mut self, line: &str) -> Option<Record> {
        self.line_number += 1;
        match mem::take(&mut self.state) {
            ParseState::AwaitingTerm => {
                if line.is_empty() {
                    warn!("Line {}: blank line where a term was expected, skipping", self.line_number);
                    self.skipped_blank_lines += 1;
                } else {
                    trace!("Line {}: term '{}'", self.line_number, line);
                    self.state = ParseState::ReadingDefinition {
                        term: line.to_string(),
                        buffer: String::new(),
                    };
                }
                None
            }
            ParseState::ReadingDefinition { term, mut buffer } => {
                if line.is_empty() {
                    return Some(close_record(term, buffer));
                }
                buffer.push_str(line);
                buffer.push('\n');
                self.state = ParseState::ReadingDefinition { term, buffer };
                None
            }
        }
    }

    /// Signals end of input, returning the record still open, if any.
    pub fn finish(&mut self) -> Option<Record> {
        match mem::take(&mut self.state) {
            ParseState::AwaitingTerm => None,
            ParseState::ReadingDefinition { term, buffer } => Some(close_record(term, buffer)),
        }
    }

    /// Number of blank lines skipped because a term was expected.
    pub fn skipped_blank_lines(&self) -> usize {
        self.skipped_blank_lines
    }

    /// True while a term has been read and its definition is still open.
    pub fn is_reading_definition(&self) -> bool {
        matches!(self.state, ParseState::ReadingDefinition { .. })
    }
}

fn close_record(term: String, buffer: String) -> Record {
    Record {
        term,
        definition: buffer.trim().to_string(),
    }
}

/// Splits text into lines ending at `\n`, `\r\n` or a lone `\r`.
///
/// Terminators are not included, and a terminator at the very end of the
/// text does not start an extra empty line.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let Some(end) = self.rest.find(|c: char| c == '\r' || c == '\n') else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };
        let line = &self.rest[..end];
        let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = &self.rest[end + terminator..];
        Some(line)
    }
}

/// Parses every record from a sequence of lines.
///
/// Also returns the number of blank lines that were skipped.
pub fn parse_lines<I, S>(lines: I) -> (Vec<Record>, usize)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = RecordParser::new();
    let mut records: Vec<Record> = lines
        .into_iter()
        .filter_map(|line| parser.feed(line.as_ref()))
        .collect();
    records.extend(parser.finish());
    (records, parser.skipped_blank_lines())
}
