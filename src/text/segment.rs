//! Word and sentence boundary lookup.
//!
//! Every function here is a pure scan over a [`TextSource`] snapshot and
//! returns a [`Span`]. Offsets are clamped, never rejected: an empty buffer or
//! a caret far past the end degrades to an empty span, and no scan reads
//! outside `[0, len_chars)`.
//!
//! # Examples
//!
//! ```
//! use gabby::text::{Span, TextBuffer, find_sentence, on_boundary_key};
//!
//! let buffer = TextBuffer::with_text("Hello world. How are you?");
//!
//! // Space typed right after "world." speaks the finished sentence.
//! let span = on_boundary_key(&buffer, 12);
//! assert_eq!(span, Span::new(0, 12));
//! assert_eq!(buffer.slice(span), "Hello world.");
//!
//! // A caret inside the second sentence selects it.
//! let span = find_sentence(&buffer, 17, 0);
//! assert_eq!(buffer.slice(span), "How are you?");
//! ```

use crate::text::Span;
use crate::text::delimiter::CharClass;
use crate::text::source::TextSource;

/// Find the run of non-whitespace characters ending at `offset`.
///
/// `offset` is the position one before the caret; pass `selection_start - 1`
/// when reacting to a just-typed character. It is clamped into
/// `[0, len_chars - 1]`. The result is empty when the character at the
/// clamped offset is itself whitespace, or when the buffer is empty.
#[must_use]
pub fn find_preceding_word<T: TextSource + ?Sized>(text: &T, offset: isize) -> Span {
    let len = text.len_chars();
    if len == 0 {
        return Span::empty(0);
    }
    let last = usize::try_from(offset).unwrap_or(0).min(len - 1);
    word_ending_at(text, last)
}

/// Find the sentence containing (or just before) the caret, or covering a
/// selection.
///
/// The start scan walks backward skipping trailing punctuation and
/// whitespace until it has seen at least one content character; the next
/// delimiter after that belongs to the previous sentence and stops the scan.
/// The end scan walks forward to the first delimiter, which is included.
///
/// With `selection_len == 0` both scans are anchored at the character before
/// the caret. With a selection, the start scan begins at the first selected
/// character, so a returned span passed back in as the selection yields
/// itself again.
///
/// Surrounding blanks (whitespace that is not a line break) are trimmed off
/// the result, and a span holding only whitespace is reported as empty.
#[must_use]
pub fn find_sentence<T: TextSource + ?Sized>(
    text: &T,
    selection_start: usize,
    selection_len: usize,
) -> Span {
    let len = text.len_chars();
    if len == 0 {
        return Span::empty(0);
    }
    let last = len - 1;

    let origin = if selection_len == 0 {
        selection_start.checked_sub(1).map(|i| i.min(last))
    } else {
        Some(selection_start.min(last))
    };
    let anchor = selection_start
        .saturating_add(selection_len)
        .saturating_sub(1)
        .min(last);

    let start = scan_sentence_start(text, origin);
    let end = scan_sentence_end(text, anchor);
    trim_blanks(text, start, end)
}

/// Decide what to speak after a boundary key (space, enter, tab).
///
/// `caret` is the caret offset when the key fires; the character before it
/// is the one just completed. Terminal punctuation there means a sentence
/// was finished and the whole sentence is returned. Anything else, including
/// a bare line break, falls back to the preceding word.
#[must_use]
pub fn on_boundary_key<T: TextSource + ?Sized>(text: &T, caret: usize) -> Span {
    let len = text.len_chars();
    if len == 0 {
        return Span::empty(0);
    }
    let Some(prev) = caret.checked_sub(1).map(|p| p.min(len - 1)) else {
        return Span::empty(0);
    };

    match text.char_at(prev) {
        Some(ch) if CharClass::of(ch).is_punctuation() => find_sentence(text, prev + 1, 0),
        _ => word_ending_at(text, prev),
    }
}

fn class_at<T: TextSource + ?Sized>(text: &T, idx: usize) -> CharClass {
    text.char_at(idx).map_or(CharClass::empty(), CharClass::of)
}

fn word_ending_at<T: TextSource + ?Sized>(text: &T, last: usize) -> Span {
    let mut start = last + 1;
    while start > 0 {
        match text.char_at(start - 1) {
            Some(ch) if !ch.is_whitespace() => start -= 1,
            _ => break,
        }
    }
    Span::new(start, last + 1 - start)
}

/// Backward pass. `None` stands for "before the buffer start".
fn scan_sentence_start<T: TextSource + ?Sized>(text: &T, origin: Option<usize>) -> usize {
    let Some(origin) = origin else {
        return 0;
    };

    let mut start = origin;
    let mut found_content = false;
    let mut i = origin + 1;
    while i > 0 {
        i -= 1;
        let class = class_at(text, i);
        if class.is_content() {
            start = i;
            found_content = true;
        } else if found_content && class.contains(CharClass::SENTENCE) {
            break;
        }
    }
    start
}

/// Forward pass. The first delimiter at or after `anchor` is included.
fn scan_sentence_end<T: TextSource + ?Sized>(text: &T, anchor: usize) -> usize {
    let len = text.len_chars();
    let mut end = anchor;
    for i in anchor..len {
        end = i;
        if class_at(text, i).contains(CharClass::SENTENCE) {
            break;
        }
    }
    end
}

fn trim_blanks<T: TextSource + ?Sized>(text: &T, mut start: usize, mut end: usize) -> Span {
    while start < end && class_at(text, start).is_blank() {
        start += 1;
    }
    while end > start && class_at(text, end).is_blank() {
        end -= 1;
    }

    let has_text = (start..=end).any(|i| !class_at(text, i).contains(CharClass::WHITESPACE));
    if has_text {
        Span::inclusive(start, end)
    } else {
        Span::empty(start)
    }
}
