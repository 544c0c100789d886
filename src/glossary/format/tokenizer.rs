//! Splits definition text into alternating word and separator runs.
//!
//! A token is the longest run, starting at a given position, whose characters
//! all share the class of the first one. Scanning every token from offset 0
//! reproduces the text exactly:
//!
//! ```
//! # use glossgen::glossary::format::tokenizer::Tokens;
//! let parts: Vec<&str> = Tokens::new("A fruit.").map(|t| t.text).collect();
//! assert_eq!(parts, ["A", " ", "fruit", "."]);
//! ```

use crate::glossary::types::error::{GlossaryError, Result};
use crate::glossary::types::models::{Token, TokenKind};

/// Characters that delimit words.
pub const SEPARATORS: [char; 8] = [',', ' ', '.', '?', '!', '-', '\n', '\t'];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

fn classify(c: char) -> TokenKind {
    if is_separator(c) {
        TokenKind::Separator
    } else {
        TokenKind::Word
    }
}

/// Returns the token starting at byte offset `position`.
///
/// # Errors
/// `InvalidPosition` if `position` is at or past the end of `text`, or does
/// not fall on a character boundary.
pub fn next_token(text: &str, position: usize) -> Result<Token<'_>> {
    let rest = text
        .get(position..)
        .filter(|rest| !rest.is_empty())
        .ok_or(GlossaryError::InvalidPosition { position, len: text.len() })?;

    let mut chars = rest.char_indices();
    let kind = match chars.next() {
        Some((_, first)) => classify(first),
        None => return Err(GlossaryError::InvalidPosition { position, len: text.len() }),
    };
    let end = chars
        .find(|&(_, c)| classify(c) != kind)
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    Ok(Token {
        kind,
        text: &rest[..end],
        offset: position,
    })
}

/// Iterator over every token of a text, front to back.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, position: 0 }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }
        // The position only ever advances by whole tokens, so it stays on a
        // character boundary and inside the text.
        let token = next_token(self.text, self.position).ok()?;
        self.position += token.len();
        Some(token)
    }
}
