//! The term index: every term mapped to its definition.
//!
//! Built once from a term file and read-only afterwards. The sorted term
//! sequence and the case-folded lookup table are computed at construction so
//! every later query is a plain lookup.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use log::{debug, info};

use super::format::records::{self, Record};
use super::types::error::{GlossaryError, Result};
use super::types::models::LookupPolicy;
use super::utils;

#[derive(Debug, Clone, Default)]
pub struct TermIndex {
    definitions: HashMap<String, String>,
    /// All terms in case-insensitive order.
    sorted: Vec<String>,
    /// Case-folded term -> position in `sorted` of the first matching term.
    folded: HashMap<String, usize>,
    skipped_blank_lines: usize,
}

impl TermIndex {
    /// Builds an index from parsed records. Later duplicates of an exact term
    /// replace earlier ones; terms differing only by case stay distinct.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut definitions = HashMap::new();
        for Record { term, definition } in records {
            if let Some(previous) = definitions.insert(term, definition) {
                debug!("Duplicate term replaced an earlier definition ({} bytes)", previous.len());
            }
        }

        let mut sorted: Vec<String> = definitions.keys().cloned().collect();
        sorted.sort_by(|a, b| utils::term_order(a, b));

        let mut folded = HashMap::with_capacity(sorted.len());
        for (position, term) in sorted.iter().enumerate() {
            folded.entry(utils::fold_case(term)).or_insert(position);
        }

        Self {
            definitions,
            sorted,
            folded,
            skipped_blank_lines: 0,
        }
    }

    /// Builds an index from term file lines (terminators already stripped).
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (records, skipped) = records::parse_lines(lines);
        let mut index = Self::from_records(records);
        index.skipped_blank_lines = skipped;
        index
    }

    /// Builds an index from the full text of a term file.
    ///
    /// `\n`, `\r\n` and lone `\r` line endings are all accepted.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(records::split_lines(text))
    }

    /// Reads and parses a term file.
    ///
    /// `encoding` selects the input encoding when the file carries no byte
    /// order mark; `None` means UTF-8.
    pub fn from_path(path: impl AsRef<Path>, encoding: Option<&'static Encoding>) -> Result<Self> {
        let path = path.as_ref();
        info!("Reading term file: {}", path.display());
        let bytes = fs::read(path).map_err(|source| GlossaryError::OpenInput {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::parse(&utils::decode_text(&bytes, encoding));
        info!(
            "Term file parsed: {} terms, {} stray blank lines skipped",
            index.len(),
            index.skipped_blank_lines
        );
        Ok(index)
    }

    /// Definition of an exact term.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.definitions.get(term).map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All terms ordered case-insensitively; case variants are adjacent and
    /// ordered by bytes.
    pub fn sorted_terms(&self) -> &[String] {
        &self.sorted
    }

    /// `(term, definition)` pairs in sorted term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.sorted
            .iter()
            .filter_map(|term| self.get(term).map(|definition| (term.as_str(), definition)))
    }

    /// Finds the stored term a token refers to under `policy`.
    pub fn resolve(&self, token: &str, policy: LookupPolicy) -> Option<&str> {
        match policy {
            LookupPolicy::ExactCase => self
                .definitions
                .get_key_value(token)
                .map(|(term, _)| term.as_str()),
            LookupPolicy::IgnoreCase => self
                .folded
                .get(&utils::fold_case(token))
                .and_then(|&position| self.sorted.get(position))
                .map(String::as_str),
        }
    }

    /// Number of blank lines skipped where a term was expected.
    pub fn skipped_blank_lines(&self) -> usize {
        self.skipped_blank_lines
    }
}
