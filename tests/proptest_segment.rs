//! Property-based tests for the word and sentence boundary engine.
//!
//! Uses proptest to verify invariants that must hold for every buffer and
//! every caret, including empty buffers and offsets far past the end.

use gabby::text::{
    CharClass, Span, TextBuffer, TextSource, find_preceding_word, find_sentence, on_boundary_key,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Text built from the characters that matter to the scans.
fn editor_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', 'Z', ',', ' ', ' ', '\t', '.', '!', '?', ':', ';', '\n', '\r', '。', '：',
            '\u{2029}', '\u{3000}', '語',
        ]),
        0..60,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Text paired with a caret that may overshoot the end.
fn text_and_caret() -> impl Strategy<Value = (String, usize)> {
    editor_text().prop_flat_map(|s| {
        let len = s.chars().count();
        (Just(s), 0..=len + 5)
    })
}

/// Text paired with a selection that may overshoot the end.
fn text_and_selection() -> impl Strategy<Value = (String, usize, usize)> {
    editor_text().prop_flat_map(|s| {
        let len = s.chars().count();
        (Just(s), 0..=len + 3, 0..=len + 3)
    })
}

fn in_bounds(span: Span, len: usize) -> bool {
    if len == 0 {
        span == Span::empty(0)
    } else {
        span.end() <= len
    }
}

fn class_at(buffer: &TextBuffer, idx: usize) -> CharClass {
    CharClass::of(buffer.char_at(idx).expect("index inside span"))
}

// ============================================================================
// Bounds
// ============================================================================

proptest! {
    /// No lookup returns a span reaching past the buffer.
    #[test]
    fn spans_stay_in_bounds((s, start, len) in text_and_selection()) {
        let buffer = TextBuffer::with_text(&s);
        let n = buffer.len_chars();

        prop_assert!(in_bounds(find_sentence(&buffer, start, len), n));
        prop_assert!(in_bounds(on_boundary_key(&buffer, start), n));

        let offset = isize::try_from(start).unwrap() - 4;
        prop_assert!(in_bounds(find_preceding_word(&buffer, offset), n));
    }

    /// Extreme offsets are clamped, not rejected.
    #[test]
    fn extreme_offsets_clamp(s in editor_text()) {
        let buffer = TextBuffer::with_text(&s);
        let n = buffer.len_chars();
        prop_assert!(in_bounds(find_sentence(&buffer, usize::MAX, usize::MAX), n));
        prop_assert!(in_bounds(find_sentence(&buffer, usize::MAX, 0), n));
        prop_assert!(in_bounds(on_boundary_key(&buffer, usize::MAX), n));
        prop_assert!(in_bounds(find_preceding_word(&buffer, isize::MAX), n));
        prop_assert!(in_bounds(find_preceding_word(&buffer, isize::MIN), n));
    }
}

// ============================================================================
// Sentence Properties
// ============================================================================

proptest! {
    /// A found sentence, passed back in as the selection, selects itself.
    #[test]
    fn sentence_reselects_itself((s, caret) in text_and_caret()) {
        let buffer = TextBuffer::with_text(&s);
        let span = find_sentence(&buffer, caret, 0);
        if !span.is_empty() {
            prop_assert_eq!(find_sentence(&buffer, span.start, span.len), span);
        }
    }

    /// Reselection also holds for spans found from a selection.
    #[test]
    fn selection_sentence_reselects_itself((s, start, len) in text_and_selection()) {
        let buffer = TextBuffer::with_text(&s);
        let span = find_sentence(&buffer, start, len);
        if !span.is_empty() {
            prop_assert_eq!(find_sentence(&buffer, span.start, span.len), span);
        }
    }

    /// A sentence never starts or ends on a blank character.
    #[test]
    fn sentence_edges_are_not_blank((s, start, len) in text_and_selection()) {
        let buffer = TextBuffer::with_text(&s);
        let span = find_sentence(&buffer, start, len);
        if !span.is_empty() {
            prop_assert!(!class_at(&buffer, span.start).is_blank());
            prop_assert!(!class_at(&buffer, span.end() - 1).is_blank());
        }
    }

    /// A non-empty sentence holds at least one non-whitespace character.
    #[test]
    fn sentence_has_text((s, caret) in text_and_caret()) {
        let buffer = TextBuffer::with_text(&s);
        let span = find_sentence(&buffer, caret, 0);
        let text = buffer.text_in(span);
        prop_assert_eq!(span.is_empty(), text.chars().all(char::is_whitespace));
    }

    /// Past the caret, only the last character of a sentence may be a
    /// delimiter.
    #[test]
    fn sentence_ends_at_first_delimiter_after_caret((s, caret) in text_and_caret()) {
        let buffer = TextBuffer::with_text(&s);
        let span = find_sentence(&buffer, caret, 0);
        if span.len > 1 {
            for idx in span.start.max(caret)..span.end() - 1 {
                prop_assert!(
                    !class_at(&buffer, idx).contains(CharClass::SENTENCE),
                    "delimiter at {} inside {:?}", idx, buffer.text_in(span)
                );
            }
        }
    }
}

// ============================================================================
// Word Properties
// ============================================================================

proptest! {
    /// The preceding word is a maximal whitespace-free run ending at the offset.
    #[test]
    fn word_is_maximal_run((s, caret) in text_and_caret()) {
        let buffer = TextBuffer::with_text(&s);
        let n = buffer.len_chars();
        prop_assume!(n > 0);
        let offset = caret.min(n - 1);
        let span = find_preceding_word(&buffer, isize::try_from(offset).unwrap());

        prop_assert!(!buffer.text_in(span).chars().any(char::is_whitespace));
        prop_assert_eq!(span.end(), offset + 1);
        if span.start > 0 {
            prop_assert!(buffer.char_at(span.start - 1).unwrap().is_whitespace());
        }
    }

    /// After anything but terminal punctuation, a boundary key speaks the
    /// preceding word.
    #[test]
    fn boundary_key_falls_back_to_word((s, caret) in text_and_caret()) {
        let buffer = TextBuffer::with_text(&s);
        let n = buffer.len_chars();
        prop_assume!(n > 0 && caret > 0);
        let prev = (caret - 1).min(n - 1);
        let class = class_at(&buffer, prev);
        let span = on_boundary_key(&buffer, caret);
        if class.is_punctuation() {
            prop_assert_eq!(span, find_sentence(&buffer, prev + 1, 0));
        } else {
            prop_assert_eq!(span, find_preceding_word(&buffer, isize::try_from(prev).unwrap()));
        }
    }

    /// Char slices and ropes agree.
    #[test]
    fn sources_agree((s, caret) in text_and_caret()) {
        let buffer = TextBuffer::with_text(&s);
        let chars: Vec<char> = s.chars().collect();
        prop_assert_eq!(find_sentence(&buffer, caret, 0), find_sentence(&chars, caret, 0));
        prop_assert_eq!(on_boundary_key(&buffer, caret), on_boundary_key(chars.as_slice(), caret));
        prop_assert_eq!(
            find_sentence(&buffer, caret, 0),
            find_sentence(&ropey::Rope::from_str(&s), caret, 0)
        );
    }
}
