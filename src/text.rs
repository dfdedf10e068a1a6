//! # Text Wrapping
//!
//! Greedy word-wrap over styled segments. A logical line (the parse of
//! one raw input line) becomes one or more physical lines, each no
//! wider than the configured content width. Style flags travel with
//! every fragment, including fragments of a segment that had to split
//! across physical lines.
//!
//! Width comes from a pluggable [`TextMeasurer`] so the wrapper has no
//! coupling to any particular metrics source; the built-in
//! [`crate::font::FontContext`] implements it with real font metrics.

use crate::error::FolioError;
use crate::markup::Segment;
use log::trace;
use serde::Serialize;

/// The measurement capability the environment supplies.
///
/// Must be deterministic and side-effect-free for a given
/// (text, bold, italic, size, family) tuple, and monotonic in text
/// length for a fixed style. Bold and italic affect the reported
/// width; underline never does.
pub trait TextMeasurer {
    fn measure(&self, text: &str, bold: bool, italic: bool, font_size: f64, family: &str) -> f64;
}

/// A styled piece of a physical line, with its measured width.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub width: f64,
}

/// A maximal run of fragments that fits the content width.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhysicalLine {
    pub fragments: Vec<Fragment>,
}

impl PhysicalLine {
    /// The line's text with markup already stripped.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Sum of the measured fragment widths.
    pub fn width(&self) -> f64 {
        self.fragments.iter().map(|f| f.width).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// A word is a whitespace-free run of styled pieces. It can span a
/// style boundary ("semi**bold**" is one word of two pieces).
#[derive(Debug, Clone)]
struct Word {
    pieces: Vec<Piece>,
}

#[derive(Debug, Clone)]
struct Piece {
    text: String,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl Piece {
    fn same_style(&self, other: &Piece) -> bool {
        self.bold == other.bold && self.italic == other.italic && self.underline == other.underline
    }
}

/// Wrap one logical line's segments into physical lines of at most
/// `max_width`.
///
/// Whitespace collapses to single spaces at joins and disappears at
/// wrap points. A word wider than `max_width` gets a physical line of
/// its own rather than being dropped or split. Empty input (or input
/// that is all whitespace) yields exactly one empty physical line, so
/// a blank source line still occupies vertical space downstream.
pub fn wrap(
    segments: &[Segment],
    max_width: f64,
    measurer: &dyn TextMeasurer,
    font_size: f64,
    family: &str,
) -> Result<Vec<PhysicalLine>, FolioError> {
    let words = split_words(segments);
    if words.is_empty() {
        return Ok(vec![PhysicalLine::default()]);
    }

    let mut lines = Vec::new();
    let mut current: Vec<Piece> = Vec::new();
    let mut current_width = 0.0;

    for word in words {
        let word_width = word
            .pieces
            .iter()
            .map(|p| checked_measure(measurer, &p.text, p, font_size, family))
            .sum::<Result<f64, _>>()?;

        if current.is_empty() {
            current_width = word_width;
            current.extend(word.pieces);
            continue;
        }

        // Joining spaces are unstyled, so bold or underline never
        // bleeds across a word join.
        let join = Piece {
            text: " ".to_string(),
            bold: false,
            italic: false,
            underline: false,
        };
        let space_width = checked_measure(measurer, " ", &join, font_size, family)?;

        if current_width + space_width + word_width <= max_width {
            current.push(join);
            current.extend(word.pieces);
            current_width += space_width + word_width;
        } else {
            trace!(
                "wrap: breaking at {:.2} of {:.2} units",
                current_width,
                max_width
            );
            lines.push(finish_line(current, measurer, font_size, family)?);
            current = word.pieces;
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(finish_line(current, measurer, font_size, family)?);
    }
    Ok(lines)
}

/// Merge adjacent same-style pieces and measure the final fragments.
fn finish_line(
    pieces: Vec<Piece>,
    measurer: &dyn TextMeasurer,
    font_size: f64,
    family: &str,
) -> Result<PhysicalLine, FolioError> {
    let mut merged: Vec<Piece> = Vec::new();
    for piece in pieces {
        match merged.last_mut() {
            Some(last) if last.same_style(&piece) => last.text.push_str(&piece.text),
            _ => merged.push(piece),
        }
    }

    let mut fragments = Vec::with_capacity(merged.len());
    for piece in merged {
        let width = checked_measure(measurer, &piece.text, &piece, font_size, family)?;
        fragments.push(Fragment {
            text: piece.text,
            bold: piece.bold,
            italic: piece.italic,
            underline: piece.underline,
            width,
        });
    }
    Ok(PhysicalLine { fragments })
}

/// Split a segment run into whitespace-delimited words, preserving
/// style boundaries inside a word.
fn split_words(segments: &[Segment]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut pieces: Vec<Piece> = Vec::new();

    for segment in segments {
        let mut run = String::new();
        for ch in segment.text.chars() {
            if ch.is_whitespace() {
                if !run.is_empty() {
                    pieces.push(Piece {
                        text: std::mem::take(&mut run),
                        bold: segment.bold,
                        italic: segment.italic,
                        underline: segment.underline,
                    });
                }
                if !pieces.is_empty() {
                    words.push(Word {
                        pieces: std::mem::take(&mut pieces),
                    });
                }
            } else {
                run.push(ch);
            }
        }
        if !run.is_empty() {
            pieces.push(Piece {
                text: run,
                bold: segment.bold,
                italic: segment.italic,
                underline: segment.underline,
            });
        }
    }
    if !pieces.is_empty() {
        words.push(Word { pieces });
    }
    words
}

/// Measure and reject widths layout cannot work with. A NaN, infinite,
/// or negative width aborts the whole pass; partial pagination is
/// worse than failing outright.
fn checked_measure(
    measurer: &dyn TextMeasurer,
    text: &str,
    style: &Piece,
    font_size: f64,
    family: &str,
) -> Result<f64, FolioError> {
    let width = measurer.measure(text, style.bold, style.italic, font_size, family);
    if !width.is_finite() || width < 0.0 {
        return Err(FolioError::Measurement(format!(
            "measurer returned width {} for {:?}",
            width, text
        )));
    }
    Ok(width)
}
