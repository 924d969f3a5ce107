//! Rope-backed text buffer.
//!
//! This module provides [`TextBuffer`], a snapshot of editor text that hosts
//! can hand to the segment finder. It uses a rope internally so that the
//! per-keystroke lookups stay O(log n) per character access even on large
//! documents.

use crate::text::Span;
use crate::text::source::TextSource;
use ropey::Rope;
use std::fmt;

/// Text storage addressed by character offset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer with initial text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Get the character at `idx`, or `None` past the end.
    #[must_use]
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.rope.get_char(idx)
    }

    /// Copy the text covered by `span`.
    ///
    /// The span is clamped to the buffer, so a stale span yields a shorter
    /// (possibly empty) string instead of panicking.
    #[must_use]
    pub fn slice(&self, span: Span) -> String {
        let len = self.len_chars();
        let start = span.start.min(len);
        let end = span.end().min(len);
        self.rope
            .get_slice(start..end)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }
}

impl TextSource for TextBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.rope.get_char(idx)
    }
}

impl From<&str> for TextBuffer {
    fn from(s: &str) -> Self {
        Self::with_text(s)
    }
}

impl From<String> for TextBuffer {
    fn from(s: String) -> Self {
        Self::with_text(&s)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}
