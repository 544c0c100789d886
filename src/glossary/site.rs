//! Writes the glossary site to an output directory.
//!
//! Failures while setting up (output directory, term file, index page) abort
//! the build. A failure on a single term page is logged, recorded in the
//! [`BuildReport`] and the remaining pages are still written.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use log::{debug, info, warn};

use super::index::TermIndex;
use super::render::{self, PageStyle, INDEX_PAGE};
use super::types::error::{GlossaryError, Result};
use super::types::models::{BuildReport, LookupPolicy, PageFailure};
use super::utils;
use super::xref::CrossReferences;

/// Default term file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "terms.txt";
/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Everything a site build needs besides the term file contents.
#[derive(Debug, Clone)]
pub struct SiteOptions {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub policy: LookupPolicy,
    /// Input encoding label (e.g. `latin1`, `gbk`). `None` means UTF-8.
    pub encoding: Option<String>,
    pub style: PageStyle,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            policy: LookupPolicy::default(),
            encoding: None,
            style: PageStyle::default(),
        }
    }
}

/// Reads the term file and writes the full site.
///
/// # Errors
/// Returns an error if:
/// - The encoding label is unknown
/// - The output directory cannot be created
/// - The term file cannot be read
/// - The index page cannot be created or written
pub fn build_site(options: &SiteOptions) -> Result<BuildReport> {
    let encoding = options
        .encoding
        .as_deref()
        .map(utils::parse_encoding)
        .transpose()?;

    ensure_output_dir(&options.output_dir)?;
    let index = TermIndex::from_path(&options.input, encoding)?;
    write_site(&index, &options.output_dir, options.policy, &options.style)
}

/// Creates the output directory (and parents) if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        debug!("Output directory {} already exists", dir.display());
        return Ok(());
    }
    info!("Creating output directory {}", dir.display());
    fs::create_dir_all(dir).map_err(|source| GlossaryError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes the index page and one page per term into `output_dir`.
///
/// Existing files with the same names are overwritten.
pub fn write_site(
    index: &TermIndex,
    output_dir: &Path,
    policy: LookupPolicy,
    style: &PageStyle,
) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    let index_path = output_dir.join(INDEX_PAGE);
    let mut index_out = create_page(&index_path)?;
    render::write_index_page(&mut index_out, index.sorted_terms(), style)
        .map_err(|source| page_error(&index_path, source))?;

    for (term, definition) in index.iter() {
        match write_term_file(index, output_dir, term, definition, policy, style) {
            Ok(()) => report.pages_written += 1,
            Err(error) => {
                warn!("Error writing the term file for '{}': {}", term, error);
                report.failures.push(PageFailure {
                    term: term.to_string(),
                    error,
                });
            }
        }
    }

    if let Err(source) = index_out.flush() {
        warn!("Error closing {}: {}", index_path.display(), source);
        report.index_close_error = Some(page_error(&index_path, source));
    }

    info!(
        "Site written to {}: {} term pages, {} failed",
        output_dir.display(),
        report.pages_written,
        report.failures.len()
    );
    Ok(report)
}

fn write_term_file(
    index: &TermIndex,
    output_dir: &Path,
    term: &str,
    definition: &str,
    policy: LookupPolicy,
    style: &PageStyle,
) -> Result<()> {
    let path = page_path(output_dir, term);
    let mut out = create_page(&path)?;
    let events = CrossReferences::new(index, definition, policy);
    render::write_term_page(&mut out, term, events, style)
        .and_then(|()| out.flush())
        .map_err(|source| page_error(&path, source))?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Path of a term's page: the output directory, a separator, then the page
/// name appended as text. A term that looks like an absolute path still
/// lands below `output_dir`.
pub fn page_path(output_dir: &Path, term: &str) -> PathBuf {
    let mut path = output_dir.as_os_str().to_owned();
    path.push(MAIN_SEPARATOR_STR);
    path.push(utils::page_name(term));
    PathBuf::from(path)
}

fn create_page(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| page_error(path, source))
}

fn page_error(path: &Path, source: std::io::Error) -> GlossaryError {
    GlossaryError::WritePage {
        path: path.to_path_buf(),
        source,
    }
}
