//! Cross-referencing of definition text against the term index.
//!
//! Each token of a definition becomes either literal text or a link to the
//! page of the term it names. Only whole tokens are matched, so `fruit.`
//! yields a link for `fruit` followed by a literal `.`.

use super::format::tokenizer::Tokens;
use super::index::TermIndex;
use super::types::models::{LookupPolicy, RenderEvent};
use super::utils;

/// Iterator of render events for one definition.
///
/// Created by [`CrossReferences::new`] or [`cross_reference`].
#[derive(Debug, Clone)]
pub struct CrossReferences<'a> {
    index: &'a TermIndex,
    tokens: Tokens<'a>,
    policy: LookupPolicy,
}

impl<'a> CrossReferences<'a> {
    pub fn new(index: &'a TermIndex, definition: &'a str, policy: LookupPolicy) -> Self {
        Self {
            index,
            tokens: Tokens::new(definition),
            policy,
        }
    }
}

impl<'a> Iterator for CrossReferences<'a> {
    type Item = RenderEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        // Separator runs are looked up as well; a term such as `--` links.
        Some(match self.index.resolve(token.text, self.policy) {
            Some(term) => RenderEvent::Link {
                text: token.text,
                target: utils::page_name(term),
            },
            None => RenderEvent::Text(token.text),
        })
    }
}

/// Collects the render events for `definition`.
pub fn cross_reference<'a>(
    index: &'a TermIndex,
    definition: &'a str,
    policy: LookupPolicy,
) -> Vec<RenderEvent<'a>> {
    CrossReferences::new(index, definition, policy).collect()
}
