//! Character spans into a text buffer.

use std::ops::Range;

/// A half-open character range `[start, start + len)` into a buffer.
///
/// Offsets count Unicode scalar values, not bytes. A span does not borrow
/// the text it points into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// First character offset.
    pub start: usize,
    /// Number of characters covered.
    pub len: usize,
}

impl Span {
    /// Create a span.
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Create an empty span at `start`.
    #[must_use]
    pub const fn empty(start: usize) -> Self {
        Self { start, len: 0 }
    }

    /// Create the span covering `first..=last`.
    #[must_use]
    pub const fn inclusive(first: usize, last: usize) -> Self {
        Self {
            start: first,
            len: last - first + 1,
        }
    }

    /// Exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start.saturating_add(self.len)
    }

    /// Check if empty. An empty span means "nothing to speak".
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if this span contains an offset.
    #[must_use]
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Get the offsets as a range.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_bounds() {
        let span = Span::new(5, 5);
        assert_eq!(span.end(), 10);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert_eq!(Range::from(span), 5..10);
    }

    #[test]
    fn test_span_end_saturates() {
        let span = Span::new(usize::MAX, 1);
        assert_eq!(span.end(), usize::MAX);
        assert!(!span.contains(usize::MAX));
        assert_eq!(Span::new(3, usize::MAX).range(), 3..usize::MAX);
    }

    #[test]
    fn test_span_inclusive() {
        assert_eq!(Span::inclusive(0, 11), Span::new(0, 12));
        assert_eq!(Span::inclusive(3, 3).len, 1);
    }

    #[test]
    fn test_empty_span() {
        let span = Span::empty(7);
        assert!(span.is_empty());
        assert!(!span.contains(7));
        assert_eq!(Span::default(), Span::empty(0));
    }
}
