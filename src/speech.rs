//! Speech output glue.
//!
//! [`Narrator`] turns editor actions into text for a [`SpeechSink`]: the
//! word or sentence just completed by a boundary key, the current sentence or
//! selection ("speak paragraph"), or the whole buffer. It owns no text; every
//! call takes a fresh snapshot from the host.
//!
//! # Examples
//!
//! ```
//! use gabby::input::KeyEvent;
//! use gabby::speech::{Narrator, SpeechSink};
//! use gabby::text::TextBuffer;
//!
//! #[derive(Default)]
//! struct Transcript(Vec<String>);
//!
//! impl SpeechSink for Transcript {
//!     fn speak(&mut self, text: &str) {
//!         self.0.push(text.to_string());
//!     }
//!     fn cancel_all(&mut self) {}
//! }
//!
//! let mut narrator = Narrator::new(Transcript::default());
//! let buffer = TextBuffer::with_text("Good morning.");
//! narrator.handle_key(&buffer, 13, &KeyEvent::char(' '));
//! assert_eq!(narrator.sink().0, vec!["Good morning."]);
//! ```

use crate::event::{EVENT_SPEAK, EVENT_STOP, LogLevel, emit_event, emit_log};
use crate::input::KeyEvent;
use crate::settings::Settings;
use crate::text::{Span, TextSource, find_sentence, on_boundary_key};

/// Text-to-speech engine contract. Owned by the host.
pub trait SpeechSink {
    /// Queue `text` for asynchronous speech.
    fn speak(&mut self, text: &str);

    /// Drop everything queued or in progress.
    fn cancel_all(&mut self);
}

/// Decides what to speak and forwards it to a [`SpeechSink`].
#[derive(Debug)]
pub struct Narrator<S> {
    sink: S,
    word_by_word: bool,
}

impl<S: SpeechSink> Narrator<S> {
    /// Create a narrator with word-by-word speech enabled.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            word_by_word: true,
        }
    }

    /// Create a narrator configured from saved settings.
    #[must_use]
    pub fn from_settings(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            word_by_word: settings.enable_word_by_word,
        }
    }

    /// Check if boundary keys trigger speech.
    #[must_use]
    pub fn word_by_word(&self) -> bool {
        self.word_by_word
    }

    /// Enable or disable speech on boundary keys.
    pub fn set_word_by_word(&mut self, enabled: bool) {
        self.word_by_word = enabled;
    }

    /// React to a key press before the host inserts it.
    ///
    /// `caret` is the caret offset at the time of the key. Returns the span
    /// that was spoken, or `None` if the key was not a boundary key, word-by-
    /// word speech is off, or there was nothing before the caret to speak.
    pub fn handle_key<T: TextSource + ?Sized>(
        &mut self,
        text: &T,
        caret: usize,
        key: &KeyEvent,
    ) -> Option<Span> {
        if !self.word_by_word || !key.is_boundary_key() {
            return None;
        }
        let span = on_boundary_key(text, caret);
        self.speak_span(text, span)
    }

    /// Speak the selection, or the sentence around the caret if nothing is
    /// selected.
    ///
    /// Returns the span spoken so the host can select it.
    pub fn speak_selection<T: TextSource + ?Sized>(
        &mut self,
        text: &T,
        selection_start: usize,
        selection_len: usize,
    ) -> Option<Span> {
        let span = if selection_len == 0 {
            find_sentence(text, selection_start, 0)
        } else {
            let len = text.len_chars();
            let start = selection_start.min(len);
            let end = selection_start.saturating_add(selection_len).min(len);
            Span::new(start, end - start)
        };
        self.speak_span(text, span)
    }

    /// Speak the whole buffer. Returns `false` if it is empty.
    pub fn speak_all<T: TextSource + ?Sized>(&mut self, text: &T) -> bool {
        let all = Span::new(0, text.len_chars());
        self.speak_span(text, all).is_some()
    }

    /// Cancel all pending speech.
    pub fn stop(&mut self) {
        self.sink.cancel_all();
        emit_event(EVENT_STOP, "");
    }

    /// Get the speech sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get mutable access to the speech sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn speak_span<T: TextSource + ?Sized>(&mut self, text: &T, span: Span) -> Option<Span> {
        if span.is_empty() {
            return None;
        }
        let spoken = text.text_in(span);
        emit_log(
            LogLevel::Debug,
            &format!("speaking {} chars at {}", span.len, span.start),
        );
        self.sink.speak(&spoken);
        emit_event(EVENT_SPEAK, &spoken);
        Some(span)
    }
}
