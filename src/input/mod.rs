//! Input events forwarded by the host editor.
//!
//! The engine does not read devices. Hosts translate their widget callbacks
//! into these types: boundary keys drive word-by-word dictation, and a wheel
//! gesture with Ctrl held drives the font stepper.

mod event;
mod keyboard;

pub use event::ScrollEvent;
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
