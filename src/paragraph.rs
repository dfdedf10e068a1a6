//! # Paragraph Stream
//!
//! The flowing, word-processor-shaped view of a document: one paragraph
//! per source line, styled runs intact, no physical wrapping. The
//! consuming backend (a DOCX writer) re-wraps at render time, so the
//! paragraph carries alignment and spacing metadata instead of
//! positions.

use serde::Serialize;

use crate::config::{Alignment, LayoutConfig};
use crate::error::FolioError;
use crate::markup::{parse_line, Segment};

/// One flowing paragraph: the parse of one logical line plus the
/// layout metadata the backend needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub segments: Vec<Segment>,
    pub alignment: Alignment,
    pub line_spacing: f64,
    pub font_size: f64,
}

impl Paragraph {
    /// Line spacing in 240ths of a line, the unit OOXML paragraph
    /// spacing is declared in (single spacing = 240).
    pub fn spacing_240ths(&self) -> u32 {
        (self.line_spacing * 240.0).round() as u32
    }

    /// Font size in half-points, the unit OOXML run sizes are declared
    /// in (12pt = 24).
    pub fn size_half_points(&self) -> u32 {
        (self.font_size * 2.0).round() as u32
    }
}

/// Build one paragraph per logical line.
///
/// Empty text returns an empty Vec. A blank source line becomes a
/// paragraph holding a single empty unstyled segment so the blank
/// survives into the backend's output.
pub fn build_paragraphs(text: &str, config: &LayoutConfig) -> Result<Vec<Paragraph>, FolioError> {
    config.validate()?;
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let paragraphs = text
        .split('\n')
        .map(|line| {
            let mut segments = parse_line(line);
            if segments.is_empty() {
                segments.push(Segment::plain(""));
            }
            Paragraph {
                segments,
                alignment: config.alignment,
                line_spacing: config.line_spacing,
                font_size: config.font_size,
            }
        })
        .collect();
    Ok(paragraphs)
}
