//! # glossgen
//!
//! Turns a plain-text term file into a static HTML glossary: an index page
//! listing every term alphabetically and one page per term, where words of a
//! definition that name another term link to that term's page.
//!
//! The term file holds records separated by blank lines; the first line of
//! a record is the term, the remaining lines its definition.
pub mod glossary;

// Re-export the main types for convenience
pub use glossary::{
    build_site,
    cross_reference,
    format::tokenizer::{next_token, Tokens},
    BuildReport,
    GlossaryError,
    LookupPolicy,
    PageStyle,
    RenderEvent,
    SiteOptions,
    TermIndex,
    Token,
    TokenKind,
};
