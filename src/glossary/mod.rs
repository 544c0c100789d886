//! Core glossary module

pub mod format;
pub mod index;
pub mod render;
pub mod site;
pub mod types;
pub mod utils;
pub mod xref;

pub use index::TermIndex;
pub use render::PageStyle;
pub use site::{build_site, write_site, SiteOptions};
pub use types::error::{GlossaryError, Result};
pub use types::models::{BuildReport, LookupPolicy, PageFailure, RenderEvent, Token, TokenKind};
pub use xref::{cross_reference, CrossReferences};
