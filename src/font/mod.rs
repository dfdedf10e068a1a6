//! # Font Measurement
//!
//! The built-in [`TextMeasurer`] implementation. Supports the standard
//! PDF font families (Helvetica, Times, Courier) through baked-in AFM
//! metrics, and user-registered TTF/OTF fonts through `ttf-parser`.
//! Unknown families fall back to Helvetica so measurement never fails;
//! a family mismatch shows up as visual overflow in the backend, not as
//! a layout error.

pub mod metrics;

pub use metrics::StandardFontMetrics;
use std::collections::HashMap;

use crate::text::TextMeasurer;

/// Identifies one font variant in the registry.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct FontKey {
    pub family: String,
    pub bold: bool,
    pub italic: bool,
}

/// Font data behind a registry entry.
pub enum FontData {
    /// One of the standard font families; metrics are baked in.
    Standard(StandardFont),
    /// A registered TTF/OTF font measured through its own tables.
    Custom { metrics: CustomFontMetrics },
}

/// The standard font variants with known metrics.
#[derive(Debug, Clone, Copy)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

/// Advance widths parsed from a TrueType/OpenType font.
pub struct CustomFontMetrics {
    units_per_em: u16,
    advance_widths: HashMap<char, u16>,
    default_advance: u16,
}

impl CustomFontMetrics {
    /// Advance width of a character at `font_size`.
    pub fn char_width(&self, ch: char, font_size: f64) -> f64 {
        let w = self
            .advance_widths
            .get(&ch)
            .copied()
            .unwrap_or(self.default_advance);
        w as f64 / self.units_per_em as f64 * font_size
    }

    /// Parse metrics from raw font data. Returns None when the data is
    /// not a parseable font face.
    pub fn from_font_data(data: &[u8]) -> Option<Self> {
        let face = ttf_parser::Face::parse(data, 0).ok()?;
        let units_per_em = face.units_per_em();

        let mut advance_widths = HashMap::new();
        let mut default_advance = 0u16;

        // Sample the BMP to build the width map.
        for code in 32u32..=0xFFFF {
            if let Some(ch) = char::from_u32(code) {
                if let Some(glyph_id) = face.glyph_index(ch) {
                    let advance = face.glyph_hor_advance(glyph_id).unwrap_or(0);
                    advance_widths.insert(ch, advance);
                    if ch == ' ' {
                        default_advance = advance;
                    }
                }
            }
        }

        if default_advance == 0 {
            default_advance = units_per_em / 2;
        }

        Some(CustomFontMetrics {
            units_per_em,
            advance_widths,
            default_advance,
        })
    }
}

/// Maps (family, bold, italic) to font data, with Helvetica fallback.
pub struct FontRegistry {
    fonts: HashMap<FontKey, FontData>,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FontRegistry {
    pub fn new() -> Self {
        let mut fonts = HashMap::new();

        let standard_mappings = [
            (("Helvetica", false, false), StandardFont::Helvetica),
            (("Helvetica", true, false), StandardFont::HelveticaBold),
            (("Helvetica", false, true), StandardFont::HelveticaOblique),
            (("Helvetica", true, true), StandardFont::HelveticaBoldOblique),
            (("Times", false, false), StandardFont::TimesRoman),
            (("Times", true, false), StandardFont::TimesBold),
            (("Times", false, true), StandardFont::TimesItalic),
            (("Times", true, true), StandardFont::TimesBoldItalic),
            (("Courier", false, false), StandardFont::Courier),
            (("Courier", true, false), StandardFont::CourierBold),
            (("Courier", false, true), StandardFont::CourierOblique),
            (("Courier", true, true), StandardFont::CourierBoldOblique),
        ];

        for ((family, bold, italic), font) in standard_mappings {
            fonts.insert(
                FontKey {
                    family: family.to_string(),
                    bold,
                    italic,
                },
                FontData::Standard(font),
            );
        }

        Self { fonts }
    }

    /// Look up a font, falling back to Helvetica if not found.
    pub fn resolve(&self, family: &str, bold: bool, italic: bool) -> &FontData {
        let family = canonical_family(family);
        let key = FontKey {
            family: family.to_string(),
            bold,
            italic,
        };
        if let Some(font) = self.fonts.get(&key) {
            return font;
        }

        // Unknown family: same variant of Helvetica.
        let key = FontKey {
            family: "Helvetica".to_string(),
            bold,
            italic,
        };
        if let Some(font) = self.fonts.get(&key) {
            return font;
        }

        // Last resort; always registered.
        static REGULAR: FontData = FontData::Standard(StandardFont::Helvetica);
        &REGULAR
    }

    /// Register a custom font. Data that doesn't parse as a font face
    /// is ignored and measurement keeps falling back.
    pub fn register(&mut self, family: &str, bold: bool, italic: bool, data: &[u8]) -> bool {
        match CustomFontMetrics::from_font_data(data) {
            Some(metrics) => {
                self.fonts.insert(
                    FontKey {
                        family: family.to_string(),
                        bold,
                        italic,
                    },
                    FontData::Custom { metrics },
                );
                true
            }
            None => false,
        }
    }
}

/// Common aliases for the standard families.
fn canonical_family(family: &str) -> &str {
    match family {
        "Arial" => "Helvetica",
        "Times New Roman" => "Times",
        "Courier New" => "Courier",
        other => other,
    }
}

/// The built-in measurement capability used by the JSON entry points
/// and the CLI. Deterministic per (text, style, size, family).
pub struct FontContext {
    registry: FontRegistry,
}

impl Default for FontContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FontContext {
    pub fn new() -> Self {
        Self {
            registry: FontRegistry::new(),
        }
    }

    /// Advance width of a single character.
    pub fn char_width(&self, ch: char, family: &str, bold: bool, italic: bool, font_size: f64) -> f64 {
        match self.registry.resolve(family, bold, italic) {
            FontData::Standard(std_font) => std_font.metrics().char_width(ch, font_size),
            FontData::Custom { metrics } => metrics.char_width(ch, font_size),
        }
    }

    /// Width of a string.
    pub fn measure_string(
        &self,
        text: &str,
        family: &str,
        bold: bool,
        italic: bool,
        font_size: f64,
    ) -> f64 {
        match self.registry.resolve(family, bold, italic) {
            FontData::Standard(std_font) => std_font.metrics().measure_string(text, font_size),
            FontData::Custom { metrics } => text
                .chars()
                .map(|ch| metrics.char_width(ch, font_size))
                .sum(),
        }
    }

    /// Access the underlying font registry.
    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    /// Access the underlying font registry mutably.
    pub fn registry_mut(&mut self) -> &mut FontRegistry {
        &mut self.registry
    }
}

impl TextMeasurer for FontContext {
    fn measure(&self, text: &str, bold: bool, italic: bool, font_size: f64, family: &str) -> f64 {
        self.measure_string(text, family, bold, italic, font_size)
    }
}
