//! `gabby` - word and sentence boundary engine for speaking text editors
//!
//! A host editor forwards keystrokes, selections and Ctrl+wheel gestures;
//! this crate decides which span of text to speak and which font size to
//! show next. Speech engines, text widgets and font rendering stay on the
//! host side behind small traits.

// Crate-level lint configuration
#![allow(dead_code)] // Public API functions not yet used internally
#![allow(clippy::module_name_repetitions)] // Allow text::TextSource etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::float_cmp)] // Font sizes are exact scale entries
#![allow(clippy::items_after_statements)] // Common pattern in tests

pub mod error;
pub mod event;
pub mod font;
pub mod input;
pub mod settings;
pub mod speech;
pub mod text;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{LogLevel, emit_event, emit_log, set_event_callback, set_log_callback};
pub use font::{
    DisplaySink, Direction, FontScale, StepResult, ThrottleState, Zoom, ZoomOptions, step_size,
};
pub use input::{KeyCode, KeyEvent, KeyModifiers, ScrollEvent};
pub use settings::{FontDescriptor, Settings};
pub use speech::{Narrator, SpeechSink};
pub use text::{
    Span, TextBuffer, TextSource, find_preceding_word, find_sentence, on_boundary_key,
};
