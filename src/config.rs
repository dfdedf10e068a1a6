//! # Layout Configuration
//!
//! The options a caller sets for one export pass. A `LayoutConfig` is
//! constructed fresh per export and is immutable for the duration of a
//! layout pass; the engine never reads shared mutable state mid-layout.
//!
//! Page geometry is expressed in the same abstract units the measurer
//! reports widths in. The built-in page sizes use millimeter dimensions
//! (A4 is 210 x 297) with a default margin of 20.

use crate::error::FolioError;
use serde::{Deserialize, Serialize};

/// Font sizes the layout accepts. Anything else is a config error.
pub const RECOGNIZED_FONT_SIZES: [f64; 8] = [10.0, 11.0, 12.0, 14.0, 16.0, 18.0, 20.0, 24.0];

/// Line spacing multipliers the layout accepts.
pub const RECOGNIZED_LINE_SPACINGS: [f64; 3] = [1.0, 1.5, 2.0];

/// Standard page sizes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Legal,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height).
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// Horizontal alignment of text on the page / in a paragraph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// The complete set of layout options for one export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutConfig {
    /// Page size. Defaults to A4.
    #[serde(default)]
    pub page_size: PageSize,

    /// Uniform page margin.
    #[serde(default = "default_margin")]
    pub margin: f64,

    /// Font size. Must be one of [`RECOGNIZED_FONT_SIZES`].
    #[serde(default = "default_font_size")]
    pub font_size: f64,

    /// Line spacing multiplier. Must be one of [`RECOGNIZED_LINE_SPACINGS`].
    #[serde(default = "default_line_spacing")]
    pub line_spacing: f64,

    /// Horizontal alignment.
    #[serde(default)]
    pub alignment: Alignment,

    /// Whether to stamp "Page N" footers on the page stream.
    #[serde(default)]
    pub show_page_numbers: bool,

    /// Font family handed to the measurer. Unknown families fall back
    /// to Helvetica in the built-in measurer.
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_margin() -> f64 {
    20.0
}

fn default_font_size() -> f64 {
    12.0
}

fn default_line_spacing() -> f64 {
    1.5
}

fn default_font_family() -> String {
    "Helvetica".to_string()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin: default_margin(),
            font_size: default_font_size(),
            line_spacing: default_line_spacing(),
            alignment: Alignment::default(),
            show_page_numbers: false,
            font_family: default_font_family(),
        }
    }
}

impl LayoutConfig {
    /// Parse a config from JSON. Unknown fields and unknown enum values
    /// are rejected rather than silently defaulted.
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: LayoutConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on option values outside the recognized sets. Runs
    /// before any parsing or wrapping in a layout pass.
    pub fn validate(&self) -> Result<(), FolioError> {
        if !RECOGNIZED_FONT_SIZES
            .iter()
            .any(|s| (s - self.font_size).abs() < 1e-9)
        {
            return Err(FolioError::Config(format!(
                "font size {} is not one of {:?}",
                self.font_size, RECOGNIZED_FONT_SIZES
            )));
        }
        if !RECOGNIZED_LINE_SPACINGS
            .iter()
            .any(|s| (s - self.line_spacing).abs() < 1e-9)
        {
            return Err(FolioError::Config(format!(
                "line spacing {} is not one of {:?}",
                self.line_spacing, RECOGNIZED_LINE_SPACINGS
            )));
        }

        let (width, height) = self.page_size.dimensions();
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(FolioError::Config(format!(
                "page dimensions {}x{} are not positive",
                width, height
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(FolioError::Config(format!(
                "margin {} is not a non-negative number",
                self.margin
            )));
        }
        if self.margin * 2.0 >= width || self.margin * 2.0 >= height {
            return Err(FolioError::Config(format!(
                "margin {} leaves no content area on a {}x{} page",
                self.margin, width, height
            )));
        }
        Ok(())
    }

    /// Page width in layout units.
    pub fn page_width(&self) -> f64 {
        self.page_size.dimensions().0
    }

    /// Page height in layout units.
    pub fn page_height(&self) -> f64 {
        self.page_size.dimensions().1
    }

    /// Widest a physical line may measure.
    pub fn max_line_width(&self) -> f64 {
        self.page_width() - self.margin * 2.0
    }
}
