//! # Alignment
//!
//! Computes where a physical line starts horizontally. Kept as pure
//! functions so the arithmetic is trivially testable apart from the
//! pagination walk.

use crate::config::{Alignment, LayoutConfig};
use crate::text::PhysicalLine;

/// The x-offset at which a line of `total_width` starts.
pub fn resolve_start(total_width: f64, config: &LayoutConfig) -> f64 {
    match config.alignment {
        Alignment::Left => config.margin,
        Alignment::Center => (config.page_width() - total_width) / 2.0,
        Alignment::Right => config.page_width() - config.margin - total_width,
    }
}

/// Per-fragment x-offsets for a physical line: the line start plus the
/// widths of all preceding fragments.
pub fn fragment_offsets(line: &PhysicalLine, config: &LayoutConfig) -> Vec<f64> {
    let mut x = resolve_start(line.width(), config);
    let mut offsets = Vec::with_capacity(line.fragments.len());
    for fragment in &line.fragments {
        offsets.push(x);
        x += fragment.width;
    }
    offsets
}
