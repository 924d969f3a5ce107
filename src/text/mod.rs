//! Text snapshots and the word/sentence boundary engine.
//!
//! This module answers one question on every keystroke: which contiguous
//! span of the buffer should be spoken right now?
//!
//! Key types:
//!
//! - [`TextSource`]: read-only character access the scans run over
//! - [`TextBuffer`]: rope-backed snapshot implementing [`TextSource`]
//! - [`Span`]: half-open character range returned by every lookup
//! - [`CharClass`]: delimiter and whitespace classification
//!
//! # Examples
//!
//! ```
//! use gabby::text::{TextBuffer, on_boundary_key};
//!
//! let buffer = TextBuffer::with_text("cat");
//! let span = on_boundary_key(&buffer, 3);
//! assert_eq!(buffer.slice(span), "cat");
//! ```

mod buffer;
pub mod delimiter;
mod segment;
mod source;
mod span;

pub use buffer::TextBuffer;
pub use delimiter::{
    CharClass, LINE_DELIMITERS, SENTENCE_DELIMITERS, is_line_delimiter, is_sentence_delimiter,
};
pub use segment::{find_preceding_word, find_sentence, on_boundary_key};
pub use source::TextSource;
pub use span::Span;
