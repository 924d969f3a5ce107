//! Fuzz target for the boundary engine.
//!
//! Arbitrary text and offsets must never panic and never yield a span past
//! the end of the buffer.

#![no_main]

use arbitrary::Arbitrary;
use gabby::text::{TextBuffer, find_preceding_word, find_sentence, on_boundary_key};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    text: &'a str,
    start: usize,
    len: usize,
    offset: isize,
}

fuzz_target!(|input: Input<'_>| {
    let buffer = TextBuffer::with_text(input.text);
    let n = buffer.len_chars();
    let caret = input.start % (n + 1);

    let spans = [
        find_sentence(&buffer, input.start, input.len),
        find_sentence(&buffer, caret, 0),
        on_boundary_key(&buffer, input.start),
        find_preceding_word(&buffer, input.offset),
    ];
    for span in spans {
        assert!(span.end() <= n);
    }

    // A found sentence re-selects itself.
    let span = find_sentence(&buffer, caret, 0);
    if !span.is_empty() {
        assert_eq!(find_sentence(&buffer, span.start, span.len), span);
    }
});
