//! Structured error types for the folio layout core.
//!
//! Three variants cover the real failure sources: JSON handling on the
//! config/stream boundary, invalid layout configuration, and a text
//! measurer reporting a width that cannot be laid out.

use std::fmt;

/// The unified error type returned by all public folio API functions.
#[derive(Debug)]
pub enum FolioError {
    /// JSON input failed to parse as a valid layout config, or a stream
    /// failed to serialize.
    Parse {
        source: serde_json::Error,
        hint: String,
    },
    /// A layout option is outside the recognized set.
    Config(String),
    /// The text measurer returned an unusable width (NaN, infinite, or
    /// negative). Layout aborts without emitting a partial stream.
    Measurement(String),
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Parse { source, hint } => {
                write!(f, "Failed to parse: {}", source)?;
                if !hint.is_empty() {
                    write!(f, "\n  Hint: {}", hint)?;
                }
                Ok(())
            }
            FolioError::Config(msg) => write!(f, "Config error: {}", msg),
            FolioError::Measurement(msg) => write!(f, "Measurement error: {}", msg),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the layout config schema. Check field names and values.".to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input; is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        FolioError::Parse { source: e, hint }
    }
}
