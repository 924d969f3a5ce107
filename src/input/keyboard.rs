//! Keyboard event types.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
        /// Super/Meta/Windows key.
        const SUPER = 0b0000_1000;
    }
}

/// A key code as reported by the host's text widget.
///
/// Only the keys dictation reacts to are represented; hosts drop the rest
/// before calling in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// A character key (includes space).
    Char(char),
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a character key event.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Check if this key completes a word or sentence: space, enter or tab.
    ///
    /// Shift does not matter; Ctrl, Alt and Super chords are shortcuts and
    /// never count.
    #[must_use]
    pub fn is_boundary_key(&self) -> bool {
        let chord = KeyModifiers::CTRL | KeyModifiers::ALT | KeyModifiers::SUPER;
        if self.modifiers.intersects(chord) {
            return false;
        }
        matches!(self.code, KeyCode::Enter | KeyCode::Tab | KeyCode::Char(' '))
    }
}
