//! Error types for gabby.
//!
//! The boundary engine and the font stepper are total and never fail; errors
//! only come from configuration: settings files, font descriptors and
//! custom font scales.

use std::fmt;
use std::io;

/// Result type alias for gabby operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for gabby operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error reading or writing a settings file.
    Io(io::Error),
    /// Settings document could not be parsed or serialized.
    Settings(serde_json::Error),
    /// Font scale rejected (empty, non-positive, or not ascending).
    InvalidFontScale(String),
    /// Font descriptor string could not be parsed (e.g. missing point size).
    InvalidFontDescriptor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Settings(e) => write!(f, "invalid settings document: {e}"),
            Self::InvalidFontScale(msg) => write!(f, "invalid font scale: {msg}"),
            Self::InvalidFontDescriptor(s) => write!(f, "invalid font descriptor: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Settings(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Settings(e)
    }
}
