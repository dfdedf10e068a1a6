//! # Page Layout Engine
//!
//! Turns raw text into a stream of fixed-size pages of positioned draw
//! instructions. The page is the unit of output: every line placement
//! asks "does this still fit above the footer?" and a page closes the
//! moment the answer is no, so content flows into pages rather than
//! being sliced after the fact.
//!
//! The walk is:
//!
//! ```text
//! raw text
//!    |  split('\n')
//! logical lines
//!    |  markup::parse_line
//! styled segments
//!    |  text::wrap (greedy, measured)
//! physical lines
//!    |  cursor walk + align::resolve_start
//! pages of draw ops
//! ```
//!
//! Layout is a pure function of (text, config, measurer); nothing is
//! cached or mutated across calls.

pub mod align;

use log::debug;
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::error::FolioError;
use crate::markup::parse_line;
use crate::text::{wrap, PhysicalLine, TextMeasurer};

/// Vertical advance per line is `font_size * line_spacing * 0.35`.
/// The 0.35 is an empirical constant tuned against the rendered
/// output; it is reproduced here, not derived from font metrics.
pub const LINE_HEIGHT_FACTOR: f64 = 0.35;

/// Height reserved above the bottom margin for the page-number footer.
pub const FOOTER_RESERVE: f64 = 10.0;

/// Font size of the "Page N" footer stamp.
pub const PAGE_NUMBER_SIZE: f64 = 10.0;

/// Distance of the footer baseline from the bottom page edge.
pub const PAGE_NUMBER_INSET: f64 = 10.0;

/// How far below the text baseline an underline stroke sits, as a
/// fraction of the font size.
pub const UNDERLINE_DROP_FACTOR: f64 = 0.05;

/// One draw instruction on a page. Consumed by a PDF-emitting backend;
/// this crate never produces the bytes itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DrawOp {
    /// A styled text run at (x, y), y being the text baseline.
    #[serde(rename_all = "camelCase")]
    Text {
        text: String,
        x: f64,
        y: f64,
        font_size: f64,
        bold: bool,
        italic: bool,
        underline: bool,
        /// Measured width of `text`; an underlined run's stroke spans
        /// exactly this much.
        width: f64,
    },
    /// A horizontal stroke (the underline beneath a text run).
    #[serde(rename_all = "camelCase")]
    Rule { x: f64, y: f64, width: f64 },
    /// The "Page N" footer. `x` is the center anchor, matching how the
    /// backend is expected to center the stamp.
    #[serde(rename_all = "camelCase")]
    PageNumber {
        text: String,
        x: f64,
        y: f64,
        font_size: f64,
    },
}

/// A laid-out page: consecutive number, fixed dimensions, ordered ops.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub number: u32,
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

/// The page-oriented layout engine.
pub struct LayoutEngine;

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self
    }

    /// Lay out `text` into pages.
    ///
    /// Empty text returns an empty Vec and is a no-op export, not an
    /// error. Config validation runs before any parsing; a measurer
    /// returning an unusable width aborts with no partial stream.
    pub fn build_pages(
        &self,
        text: &str,
        config: &LayoutConfig,
        measurer: &dyn TextMeasurer,
    ) -> Result<Vec<Page>, FolioError> {
        config.validate()?;
        if text.is_empty() {
            return Ok(Vec::new());
        }

        // Each logical line wraps independently; physical lines of
        // neighboring logical lines never merge.
        let mut physical = Vec::new();
        for line in text.split('\n') {
            let segments = parse_line(line);
            physical.extend(wrap(
                &segments,
                config.max_line_width(),
                measurer,
                config.font_size,
                &config.font_family,
            )?);
        }

        Ok(self.paginate(&physical, config))
    }

    /// Place physical lines onto pages with a vertical cursor.
    fn paginate(&self, lines: &[PhysicalLine], config: &LayoutConfig) -> Vec<Page> {
        let page_width = config.page_width();
        let page_height = config.page_height();
        let line_height = config.font_size * config.line_spacing * LINE_HEIGHT_FACTOR;
        let footer_reserve = if config.show_page_numbers {
            FOOTER_RESERVE
        } else {
            0.0
        };
        let limit = page_height - config.margin - footer_reserve;

        let mut pages = Vec::new();
        let mut current = Page {
            number: 1,
            width: page_width,
            height: page_height,
            ops: Vec::new(),
        };
        let mut cursor = config.margin;
        let mut lines_on_page = 0usize;

        for line in lines {
            if cursor + line_height > limit && lines_on_page > 0 {
                self.close_page(&mut current, config);
                debug!(
                    "page {} closed with {} ops",
                    current.number,
                    current.ops.len()
                );
                let number = current.number + 1;
                pages.push(std::mem::replace(
                    &mut current,
                    Page {
                        number,
                        width: page_width,
                        height: page_height,
                        ops: Vec::new(),
                    },
                ));
                cursor = config.margin;
                lines_on_page = 0;
            }

            self.place_line(&mut current, line, cursor, config);
            cursor += line_height;
            lines_on_page += 1;
        }

        self.close_page(&mut current, config);
        pages.push(current);
        pages
    }

    /// Emit the draw ops for one physical line at baseline `y`.
    fn place_line(&self, page: &mut Page, line: &PhysicalLine, y: f64, config: &LayoutConfig) {
        let offsets = align::fragment_offsets(line, config);
        for (fragment, x) in line.fragments.iter().zip(offsets) {
            if fragment.text.is_empty() {
                continue;
            }
            page.ops.push(DrawOp::Text {
                text: fragment.text.clone(),
                x,
                y,
                font_size: config.font_size,
                bold: fragment.bold,
                italic: fragment.italic,
                underline: fragment.underline,
                width: fragment.width,
            });
            if fragment.underline && fragment.width > 0.0 {
                page.ops.push(DrawOp::Rule {
                    x,
                    y: y + config.font_size * UNDERLINE_DROP_FACTOR,
                    width: fragment.width,
                });
            }
        }
    }

    /// Stamp the footer on a page that is about to close.
    fn close_page(&self, page: &mut Page, config: &LayoutConfig) {
        if config.show_page_numbers {
            page.ops.push(DrawOp::PageNumber {
                text: format!("Page {}", page.number),
                x: page.width / 2.0,
                y: page.height - PAGE_NUMBER_INSET,
                font_size: PAGE_NUMBER_SIZE,
            });
        }
    }
}
