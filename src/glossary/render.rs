//! HTML page rendering.
//!
//! Terms and definitions are written into the markup verbatim; no escaping
//! is applied.

use std::io::{self, Write};

use super::types::models::RenderEvent;
use super::utils;

/// Name of the index page inside the output directory.
pub const INDEX_PAGE: &str = "index.html";

/// Fixed parts of the generated pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStyle {
    /// Title and heading of the index page.
    pub title: String,
    /// `href` of the stylesheet linked from every page.
    pub stylesheet: String,
    /// Raw HTML line closing the index page.
    pub attribution: String,
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            title: "Glossary".to_string(),
            stylesheet: "style.css".to_string(),
            attribution: format!("<p>Created by {}</p>", env!("CARGO_PKG_NAME")),
        }
    }
}

/// Writes the doctype and `<head>` section.
pub fn write_header(out: &mut impl Write, title: &str, style: &PageStyle) -> io::Result<()> {
    out.write_all(b"<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n")?;
    writeln!(out, "<title>{}</title>", title)?;
    writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", style.stylesheet)?;
    out.write_all(b"</head>\n")
}

fn write_link(out: &mut impl Write, target: &str, text: &str) -> io::Result<()> {
    write!(out, "<a id=\"link\" href=\"{}\">{}</a>", target, text)
}

/// Writes the `<ul>` listing every term with a link to its page.
pub fn write_term_list<S: AsRef<str>>(out: &mut impl Write, terms: &[S]) -> io::Result<()> {
    out.write_all(b"<ul>\n")?;
    for term in terms {
        let term = term.as_ref();
        out.write_all(b"<li>")?;
        write_link(out, &utils::page_name(term), term)?;
        out.write_all(b"</li>\n")?;
    }
    out.write_all(b"</ul>\n")
}

/// Writes a definition body from its render events, wrapped in `<blockquote>`.
pub fn write_definition<'a>(
    out: &mut impl Write,
    events: impl IntoIterator<Item = RenderEvent<'a>>,
) -> io::Result<()> {
    out.write_all(b"<blockquote>")?;
    for event in events {
        match event {
            RenderEvent::Text(text) => out.write_all(text.as_bytes())?,
            RenderEvent::Link { text, target } => write_link(out, &target, text)?,
        }
    }
    out.write_all(b"</blockquote>")
}

/// Writes the complete index page.
pub fn write_index_page<S: AsRef<str>>(
    out: &mut impl Write,
    terms: &[S],
    style: &PageStyle,
) -> io::Result<()> {
    write_header(out, &style.title, style)?;
    writeln!(out, "<body>\n<h2>{}</h2>\n<hr />", style.title)?;
    write_term_list(out, terms)?;
    writeln!(out, "{}", style.attribution)?;
    out.write_all(b"</body>\n</html>\n")
}

/// Writes the complete page of one term.
pub fn write_term_page<'a>(
    out: &mut impl Write,
    term: &str,
    events: impl IntoIterator<Item = RenderEvent<'a>>,
    style: &PageStyle,
) -> io::Result<()> {
    write_header(out, term, style)?;
    writeln!(out, "<body>\n<h2>{}</h2>", term)?;
    write_definition(out, events)?;
    out.write_all(b"<hr />\n")?;
    writeln!(out, "<p>Return to <a id=\"link\" href=\"{}\">index</a>.</p>", INDEX_PAGE)?;
    out.write_all(b"</body>\n</html>\n")
}
