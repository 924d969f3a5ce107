//! Persisted editor settings.
//!
//! Settings live in a small JSON document that keeps the field names the
//! editor has always written (`EnableWordWrap`, `EnableWordByWord`,
//! `VoiceName`, `FontString`), so existing settings files keep loading.
//! Missing fields take their defaults.

use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Editor settings document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Settings {
    /// Wrap long lines in the editor.
    pub enable_word_wrap: bool,
    /// Speak each word or sentence as a boundary key completes it.
    pub enable_word_by_word: bool,
    /// Voice to select on startup; empty means the system default.
    pub voice_name: String,
    /// Serialized [`FontDescriptor`]; empty means the host default font.
    pub font_string: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_word_wrap: false,
            enable_word_by_word: true,
            voice_name: String::new(),
            font_string: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                emit_log(
                    LogLevel::Info,
                    &format!("no settings at {}, using defaults", path.display()),
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::from_json(&text)
    }

    /// Parse a settings document. A leading byte order mark is ignored.
    pub fn from_json(text: &str) -> Result<Self> {
        let text = text.trim_start_matches('\u{feff}');
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write settings to `path`, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut text = self.to_json()?;
        text.push('\n');
        fs::write(path, text)?;
        Ok(())
    }

    /// Restore the defaults.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Parse the stored font, if any.
    pub fn font(&self) -> Result<Option<FontDescriptor>> {
        if self.font_string.trim().is_empty() {
            return Ok(None);
        }
        self.font_string.parse().map(Some)
    }

    /// Store a font, or clear it with `None`.
    pub fn set_font(&mut self, font: Option<&FontDescriptor>) {
        self.font_string = font.map(ToString::to_string).unwrap_or_default();
    }
}

/// A font as `"Family, 9pt"` or `"Family, 9pt, style=Bold, Italic"`.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// Font family name.
    pub family: String,
    /// Size in points.
    pub size: f32,
    /// Style list as written after `style=`, if any.
    pub style: Option<String>,
}

impl FontDescriptor {
    /// Create a descriptor without style.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            style: None,
        }
    }

    /// Attach a style list.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }
}

impl FromStr for FontDescriptor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidFontDescriptor(s.to_string());

        let (family, rest) = s.split_once(',').ok_or_else(invalid)?;
        let family = family.trim();
        if family.is_empty() {
            return Err(invalid());
        }

        let (size, style) = match rest.split_once(',') {
            Some((size, style)) => (size.trim(), Some(style.trim())),
            None => (rest.trim(), None),
        };
        let size: f32 = size
            .strip_suffix("pt")
            .and_then(|n| n.trim().parse().ok())
            .filter(|n: &f32| n.is_finite() && *n > 0.0)
            .ok_or_else(invalid)?;

        let style = match style {
            Some(style) => {
                let list = style.strip_prefix("style=").ok_or_else(invalid)?.trim();
                (!list.is_empty()).then(|| list.to_string())
            }
            None => None,
        };

        Ok(Self {
            family: family.to_string(),
            size,
            style,
        })
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}pt", self.family, self.size)?;
        if let Some(style) = &self.style {
            write!(f, ", style={style}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(!settings.enable_word_wrap);
        assert!(settings.enable_word_by_word);
        assert!(settings.voice_name.is_empty());
        assert_eq!(settings.font().unwrap(), None);
    }

    #[test]
    fn test_parse_document() {
        let json = r#"{"EnableWordByWord":false,"EnableWordWrap":true,"FontString":"Meiryo UI, 9pt","VoiceName":"Microsoft Haruka Desktop"}"#;
        let settings = Settings::from_json(json).unwrap();
        assert!(settings.enable_word_wrap);
        assert!(!settings.enable_word_by_word);
        assert_eq!(settings.voice_name, "Microsoft Haruka Desktop");
        assert_eq!(
            settings.font().unwrap(),
            Some(FontDescriptor::new("Meiryo UI", 9.0))
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let settings = Settings::from_json("\u{feff}{\"VoiceName\":\"Zira\"}").unwrap();
        assert_eq!(settings.voice_name, "Zira");
        assert!(settings.enable_word_by_word);
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(
            Settings::from_json("{\"EnableWordWrap\":"),
            Err(Error::Settings(_))
        ));
        assert!(Settings::from_json("{\"EnableWordWrap\":\"yes\"}").is_err());
    }

    #[test]
    fn test_clear() {
        let mut settings = Settings {
            enable_word_wrap: true,
            voice_name: "x".to_string(),
            ..Settings::default()
        };
        settings.clear();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_font_descriptor_parse() {
        let font: FontDescriptor = "Arial, 12pt, style=Bold, Italic".parse().unwrap();
        assert_eq!(font.family, "Arial");
        assert_eq!(font.size, 12.0);
        assert_eq!(font.style.as_deref(), Some("Bold, Italic"));

        let font: FontDescriptor = "MS Gothic,10.5pt".parse().unwrap();
        assert_eq!(font, FontDescriptor::new("MS Gothic", 10.5));
    }

    #[test]
    fn test_font_descriptor_rejects() {
        for bad in ["", "Arial", ", 9pt", "Arial, 9", "Arial, -3pt", "Arial, 9pt, Bold"] {
            assert!(
                matches!(
                    bad.parse::<FontDescriptor>(),
                    Err(Error::InvalidFontDescriptor(_))
                ),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_font_descriptor_display() {
        assert_eq!(FontDescriptor::new("Consolas", 11.0).to_string(), "Consolas, 11pt");
        let font = FontDescriptor::new("Arial", 10.5).with_style("Bold");
        assert_eq!(font.to_string(), "Arial, 10.5pt, style=Bold");
        assert_eq!(font.to_string().parse::<FontDescriptor>().unwrap(), font);
    }

    #[test]
    fn test_set_font() {
        let mut settings = Settings::default();
        settings.set_font(Some(&FontDescriptor::new("Meiryo UI", 9.0)));
        assert_eq!(settings.font_string, "Meiryo UI, 9pt");
        settings.set_font(None);
        assert!(settings.font_string.is_empty());
    }
}
