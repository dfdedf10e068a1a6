//! # Folio
//!
//! A layout core for exporting plain text with lightweight inline
//! markup (`**bold**`, `*italic*`, `__underline__`) into document
//! backends, entirely offline and side-effect-free.
//!
//! Folio does not produce PDF or DOCX bytes. It produces the two
//! streams those writers consume:
//!
//! - a **page stream**: fixed-size pages of positioned, styled draw
//!   instructions, for a PDF-shaped backend, and
//! - a **paragraph stream**: flowing styled paragraphs with alignment
//!   and spacing metadata, for a DOCX-shaped backend.
//!
//! ## Architecture
//!
//! ```text
//! raw text + LayoutConfig
//!       |
//!   [markup]   - parse each line into styled segments
//!       |
//!   [text]     - greedy word-wrap against a TextMeasurer   (page path)
//!       |
//!   [layout]   - cursor walk into pages, alignment, footers
//!       |
//!   page stream               [paragraph] - paragraph stream (no wrap)
//! ```
//!
//! Layout is a pure function of `(text, config, measurer)`: no I/O, no
//! shared state, nothing retained between calls. Width measurement is
//! pluggable through [`text::TextMeasurer`]; [`font::FontContext`] is
//! the built-in implementation with real font metrics.

pub mod config;
pub mod error;
pub mod font;
pub mod layout;
pub mod markup;
pub mod paragraph;
pub mod templates;
pub mod text;

pub use config::{Alignment, LayoutConfig, PageSize};
pub use error::FolioError;
pub use layout::{DrawOp, Page};
pub use markup::{Segment, Stats};
pub use paragraph::Paragraph;
pub use text::TextMeasurer;

use font::FontContext;
use layout::LayoutEngine;

/// Lay out `text` into the page stream.
///
/// This is the primary page-oriented entry point. Empty text returns
/// an empty Vec; an invalid config or an unusable measured width
/// returns an error before any pages are emitted.
pub fn build_pages(
    text: &str,
    config: &LayoutConfig,
    measurer: &dyn TextMeasurer,
) -> Result<Vec<Page>, FolioError> {
    LayoutEngine::new().build_pages(text, config, measurer)
}

/// Build the paragraph stream: one styled paragraph per source line,
/// unwrapped.
pub fn build_paragraphs(text: &str, config: &LayoutConfig) -> Result<Vec<Paragraph>, FolioError> {
    paragraph::build_paragraphs(text, config)
}

/// Strip all markup, keeping line structure. The plain-text export.
pub fn strip_markup(text: &str) -> String {
    markup::strip_markup(text)
}

/// Word and character counts.
pub fn stats(text: &str) -> Stats {
    markup::stats(text)
}

/// Lay out `text` with a JSON config and return the page stream as
/// JSON, measured with the built-in font metrics.
pub fn build_pages_json(text: &str, config_json: &str) -> Result<String, FolioError> {
    let config = LayoutConfig::from_json(config_json)?;
    let pages = build_pages(text, &config, &FontContext::new())?;
    serde_json::to_string_pretty(&pages).map_err(FolioError::from)
}

/// Build the paragraph stream with a JSON config and return it as JSON.
pub fn build_paragraphs_json(text: &str, config_json: &str) -> Result<String, FolioError> {
    let config = LayoutConfig::from_json(config_json)?;
    let paragraphs = build_paragraphs(text, &config)?;
    serde_json::to_string_pretty(&paragraphs).map_err(FolioError::from)
}
