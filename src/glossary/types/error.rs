//! Custom error types for the glossgen crate.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum GlossaryError {
    /// The output directory could not be created.
    #[error("Unable to create output directory {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The term file could not be opened or read.
    #[error("Unable to read input file {}: {source}", path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A single page could not be created, written or flushed.
    #[error("Unable to write page {}: {source}", path.display())]
    WritePage {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The requested input encoding label is not known to `encoding_rs`.
    #[error("Unknown text encoding label: {0}")]
    UnknownEncoding(String),

    /// A scan position does not start a character inside the text.
    #[error("Invalid scan position {position} for text of {len} bytes")]
    InvalidPosition { position: usize, len: usize },
}

/// A convenience `Result` type alias using the crate's `GlossaryError` type.
pub type Result<T> = std::result::Result<T, GlossaryError>;
