//! # Inline Markup
//!
//! Parses one line of raw text into styled runs. The markup is the
//! lightweight toolbar syntax users type directly:
//!
//! ```text
//! **bold**   *italic*   __underline__
//! ```
//!
//! The scan is a single left-to-right pass. At each position the longer
//! markers win (`**` before `*`), a marker closes at the *next*
//! occurrence of the same marker, and the enclosed run must be
//! non-empty. Anything that doesn't close degrades to literal text;
//! there is no error path out of the parser. Styles never nest or
//! combine: a run carries exactly the one flag of the marker that
//! matched it.

use serde::{Deserialize, Serialize};

/// One contiguous run of uniformly styled text within a line.
///
/// Concatenating the `text` of all segments of a parse, in order,
/// reconstructs the line with the markers stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

impl Segment {
    /// An unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }

    pub fn underline(text: impl Into<String>) -> Self {
        Self {
            underline: true,
            ..Self::plain(text)
        }
    }

    pub fn is_styled(&self) -> bool {
        self.bold || self.italic || self.underline
    }
}

/// Marker table, in match-precedence order. `**` must come before `*`
/// so a bold opener is never misread as an italic opener.
const MARKERS: [(&str, Style); 3] = [
    ("**", Style::Bold),
    ("__", Style::Underline),
    ("*", Style::Italic),
];

#[derive(Debug, Clone, Copy)]
enum Style {
    Bold,
    Italic,
    Underline,
}

impl Style {
    fn apply(self, text: String) -> Segment {
        match self {
            Style::Bold => Segment::bold(text),
            Style::Italic => Segment::italic(text),
            Style::Underline => Segment::underline(text),
        }
    }
}

/// Parse one logical line into styled segments.
///
/// Empty input returns an empty Vec; layout-side consumers substitute a
/// single empty unstyled segment so a blank line still occupies height.
pub fn parse_line(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut i = 0;

    while i < line.len() {
        if let Some((marker_len, content_len, style)) = match_marker(&line[i..]) {
            if !literal.is_empty() {
                segments.push(Segment::plain(std::mem::take(&mut literal)));
            }
            let content = &line[i + marker_len..i + marker_len + content_len];
            segments.push(style.apply(content.to_string()));
            i += marker_len * 2 + content_len;
            continue;
        }

        // No marker matches here; the next char is literal text.
        if let Some(ch) = line[i..].chars().next() {
            literal.push(ch);
            i += ch.len_utf8();
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::plain(literal));
    }
    segments
}

/// Try to match a complete marker pair at the start of `rest`.
/// Returns (marker byte length, content byte length, style).
fn match_marker(rest: &str) -> Option<(usize, usize, Style)> {
    for (marker, style) in MARKERS {
        if let Some(inner) = rest.strip_prefix(marker) {
            // Close at the next occurrence of the same marker; the
            // enclosed run must be non-empty.
            if let Some(end) = inner.find(marker) {
                if end > 0 {
                    return Some((marker.len(), end, style));
                }
            }
        }
    }
    None
}

/// Strip all markup from a multi-line text, preserving line structure.
/// This is the plain-text export payload.
pub fn strip_markup(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            parse_line(line)
                .into_iter()
                .map(|s| s.text)
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Word and character counts for a text, as shown live in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub words: usize,
    pub chars: usize,
}

/// Count words (whitespace-separated, after trimming) and characters.
pub fn stats(text: &str) -> Stats {
    let trimmed = text.trim();
    let words = if trimmed.is_empty() {
        0
    } else {
        trimmed.split_whitespace().count()
    };
    Stats {
        words,
        chars: text.chars().count(),
    }
}
