//! Small helpers shared across the glossary modules.

use std::cmp::Ordering;

use encoding_rs::Encoding;
use log::warn;

use super::types::error::{GlossaryError, Result};

/// Suffix appended to a term to form its page name.
pub const PAGE_EXTENSION: &str = ".html";

/// Compares two strings ignoring letter case.
///
/// Strings that differ only by case compare equal here; callers that need a
/// total order should use [`term_order`].
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Total order used for the sorted term sequence.
///
/// Case-insensitive first, then byte order, so case variants end up adjacent
/// and their relative order does not depend on hash map iteration.
pub fn term_order(a: &str, b: &str) -> Ordering {
    cmp_ignore_case(a, b).then_with(|| a.cmp(b))
}

/// Key used for case-insensitive term lookup.
pub fn fold_case(term: &str) -> String {
    term.to_lowercase()
}

/// Page name (and file name) for a term: the term verbatim plus `.html`.
pub fn page_name(term: &str) -> String {
    let mut name = String::with_capacity(term.len() + PAGE_EXTENSION.len());
    name.push_str(term);
    name.push_str(PAGE_EXTENSION);
    name
}

/// Resolves an encoding label, normalizing GBK/GB2312 to GB18030.
pub fn parse_encoding(label: &str) -> Result<&'static Encoding> {
    let normalized = if label.eq_ignore_ascii_case("GBK") || label.eq_ignore_ascii_case("GB2312") {
        "GB18030"
    } else {
        label
    };
    Encoding::for_label(normalized.as_bytes())
        .ok_or_else(|| GlossaryError::UnknownEncoding(label.to_string()))
}

/// Decodes raw input bytes into text.
///
/// A byte order mark always wins. Without one, `encoding` is used, falling
/// back to UTF-8. Malformed sequences are replaced rather than rejected.
pub fn decode_text(bytes: &[u8], encoding: Option<&'static Encoding>) -> String {
    let encoding = encoding.unwrap_or(encoding_rs::UTF_8);
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!("Input contained malformed {} sequences; they were replaced", used.name());
    }
    text.into_owned()
}
