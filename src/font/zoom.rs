//! Ctrl+wheel zoom: font stepping wired to a display.

use super::{DEFAULT_COOLDOWN, Direction, FontScale, StepResult, ThrottleState};
use crate::event::{EVENT_FONT_SIZE, LogLevel, emit_event, emit_log};
use crate::input::ScrollEvent;
use std::time::{Duration, Instant};

/// Receives font sizes to render with. Owned by the host.
pub trait DisplaySink {
    /// Apply a new font size in points.
    fn apply_font_size(&mut self, size: f32);
}

/// Zoom configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomOptions {
    /// Allowed sizes.
    pub scale: FontScale,
    /// Minimum time between two applied steps.
    pub cooldown: Duration,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            scale: FontScale::default(),
            cooldown: DEFAULT_COOLDOWN,
        }
    }
}

/// Tracks the current font size and pushes accepted steps to a display.
#[derive(Debug)]
pub struct Zoom<D> {
    display: D,
    options: ZoomOptions,
    size: f32,
    throttle: ThrottleState,
}

impl<D: DisplaySink> Zoom<D> {
    /// Create a zoom controller starting at `size`.
    ///
    /// The starting size is not pushed to the display; the host already
    /// renders with it.
    #[must_use]
    pub fn new(display: D, options: ZoomOptions, size: f32) -> Self {
        Self {
            display,
            options,
            size,
            throttle: ThrottleState::new(),
        }
    }

    /// Current font size.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Replace the current size without stepping, e.g. after a font dialog.
    ///
    /// Does not touch the throttle and does not notify the display.
    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// Zoom options in effect.
    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    /// Step one size in `direction`, applying the result to the display.
    pub fn step(&mut self, direction: Direction, now: Instant) -> StepResult {
        let result = self.throttle.step(
            &self.options.scale,
            self.size,
            direction,
            now,
            self.options.cooldown,
        );
        match result {
            StepResult::Applied(size) => {
                self.size = size;
                self.display.apply_font_size(size);
                emit_event(EVENT_FONT_SIZE, &size.to_string());
            }
            StepResult::Unchanged => {
                emit_log(
                    LogLevel::Debug,
                    &format!("font size {} is at the end of the scale", self.size),
                );
            }
            StepResult::Rejected => {}
        }
        result
    }

    /// Handle a wheel event. Returns `None` when the event is not a zoom
    /// gesture (no Ctrl held, or zero delta).
    pub fn on_scroll(&mut self, event: &ScrollEvent, now: Instant) -> Option<StepResult> {
        let direction = event.zoom_direction()?;
        Some(self.step(direction, now))
    }

    /// Get the display sink.
    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get mutable access to the display sink.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Consume the controller, returning the display sink.
    pub fn into_display(self) -> D {
        self.display
    }
}
