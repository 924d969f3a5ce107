//! Read-only character access used by the boundary scans.

use crate::text::Span;
use ropey::{Rope, RopeSlice};

/// Indexed, read-only view of the host's text.
///
/// Offsets are character indices. Implementations must return `None` for any
/// index at or past [`len_chars`](Self::len_chars); the scans rely on this and
/// never index out of range themselves.
pub trait TextSource {
    /// Number of characters.
    fn len_chars(&self) -> usize;

    /// Character at `idx`, if in range.
    fn char_at(&self, idx: usize) -> Option<char>;

    /// Check if there are no characters.
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Collect the characters covered by `span`. Out-of-range offsets are
    /// skipped.
    fn text_in(&self, span: Span) -> String {
        span.range().map_while(|idx| self.char_at(idx)).collect()
    }
}

impl TextSource for [char] {
    fn len_chars(&self) -> usize {
        self.len()
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.get(idx).copied()
    }
}

impl TextSource for Vec<char> {
    fn len_chars(&self) -> usize {
        self.len()
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.get(idx).copied()
    }
}

impl TextSource for Rope {
    fn len_chars(&self) -> usize {
        Rope::len_chars(self)
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.get_char(idx)
    }
}

impl TextSource for RopeSlice<'_> {
    fn len_chars(&self) -> usize {
        RopeSlice::len_chars(self)
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        self.get_char(idx)
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn len_chars(&self) -> usize {
        (**self).len_chars()
    }

    fn char_at(&self, idx: usize) -> Option<char> {
        (**self).char_at(idx)
    }
}
