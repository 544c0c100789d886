//! Core data structures shared by the glossary components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Tokens produced while scanning definition text
//! - Render events produced by the cross-referencer
//! - Lookup policy and build reporting types

use std::fmt;

use super::error::GlossaryError;

/// Character class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A run of characters outside the separator set.
    Word,
    /// A run of separator characters (`,`, space, `.`, `?`, `!`, `-`, newline, tab).
    Separator,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Word => write!(f, "word"),
            TokenKind::Separator => write!(f, "separator"),
        }
    }
}

/// A maximal run of same-class characters borrowed from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the first character of this token in the scanned text.
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Byte length of the token, i.e. how far the scan position advances.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One unit of output produced when cross-referencing a definition.
///
/// The page renderer turns `Text` into literal markup and `Link` into an
/// anchor pointing at another term's page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent<'a> {
    /// Text emitted unmodified.
    Text(&'a str),
    /// A token that names a glossary term.
    Link {
        /// The token as it appears in the definition.
        text: &'a str,
        /// Page the link points at, e.g. `fruit.html`.
        target: String,
    },
}

/// How definition tokens are matched against the term set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupPolicy {
    /// A token links only when it equals a stored term byte for byte.
    #[default]
    ExactCase,
    /// A token links when it equals a stored term ignoring letter case.
    ///
    /// The link targets the stored spelling, so the generated file name
    /// always exists. When several stored terms differ only by case, the one
    /// that comes first in the sorted term sequence wins.
    IgnoreCase,
}

/// A term page that could not be written.
#[derive(Debug)]
pub struct PageFailure {
    pub term: String,
    pub error: GlossaryError,
}

/// Outcome of a site build.
///
/// Setup failures abort the build and never produce a report; everything
/// scoped to a single page ends up in `failures`.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of term pages written successfully (the index page excluded).
    pub pages_written: usize,
    /// Term pages that were skipped because of an I/O error.
    pub failures: Vec<PageFailure>,
    /// Set when the index page was written but flushing it failed.
    pub index_close_error: Option<GlossaryError>,
}

impl BuildReport {
    /// True when every page, including the index, was written and closed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty() && self.index_close_error.is_none()
    }
}
