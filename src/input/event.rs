//! Mouse wheel events.

use crate::font::Direction;
use crate::input::keyboard::KeyModifiers;

/// Mouse wheel movement.
///
/// `delta` follows the usual wheel convention: positive scrolls up (away from
/// the user), negative scrolls down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollEvent {
    /// Wheel delta in notches or platform units.
    pub delta: i32,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl ScrollEvent {
    /// Create a new scroll event.
    #[must_use]
    pub fn new(delta: i32, modifiers: KeyModifiers) -> Self {
        Self { delta, modifiers }
    }

    /// Map a Ctrl+wheel gesture to a font size direction.
    ///
    /// Returns `None` without Ctrl held or for a zero delta.
    #[must_use]
    pub fn zoom_direction(&self) -> Option<Direction> {
        if !self.modifiers.contains(KeyModifiers::CTRL) {
            return None;
        }
        match self.delta {
            d if d > 0 => Some(Direction::Larger),
            d if d < 0 => Some(Direction::Smaller),
            _ => None,
        }
    }
}
