//! Text format layer: term file records and definition tokens.
//!
//! # Module Organization
//!
//! - [`records`]: Parses the term file into `(term, definition)` records
//! - [`tokenizer`]: Splits definition text into word and separator runs
//!
//! # Data Flow
//!
//! ```text
//! terms.txt ──► records::RecordParser ──► TermIndex
//!                                            │
//! definition ──► tokenizer::Tokens ──► xref::CrossReferences ──► render
//! ```

pub mod records;
pub mod tokenizer;
