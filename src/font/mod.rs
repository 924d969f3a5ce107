//! Discrete font-size stepping over a fixed scale.
//!
//! A wheel gesture moves the editor font to the next smaller or larger size
//! on a [`FontScale`]. Steps are rate limited: a step inside the cooldown
//! window is [`StepResult::Rejected`], and the throttle timestamp only moves
//! on [`StepResult::Applied`]. Hitting an end of the scale reports
//! [`StepResult::Unchanged`] and leaves the timestamp alone, so a burst of
//! wheel events stays throttled across the boundary.
//!
//! # Examples
//!
//! ```
//! use gabby::font::{Direction, FontScale, StepResult};
//!
//! let scale = FontScale::new(vec![8.0, 9.0, 10.0, 12.0]).unwrap();
//! assert_eq!(scale.step(9.0, Direction::Smaller), StepResult::Applied(8.0));
//! assert_eq!(scale.step(12.0, Direction::Larger), StepResult::Unchanged);
//! assert_eq!(scale.step(11.0, Direction::Larger), StepResult::Applied(12.0));
//! ```

mod zoom;

pub use zoom::{DisplaySink, Zoom, ZoomOptions};

use crate::error::{Error, Result};
use std::time::{Duration, Instant};

/// Point sizes offered by the editor's zoom gesture.
pub const DEFAULT_SIZES: &[f32] = &[
    8.0, 9.0, 10.0, 11.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 36.0, 48.0, 72.0,
];

/// Minimum time between two accepted size changes.
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(100);

/// Which way to step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Next smaller size on the scale.
    Smaller,
    /// Next larger size on the scale.
    Larger,
}

/// Outcome of a step request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepResult {
    /// Inside the cooldown window; nothing changed.
    Rejected,
    /// Already at the end of the scale in the requested direction.
    Unchanged,
    /// The new size to apply.
    Applied(f32),
}

impl StepResult {
    /// The applied size, if any.
    #[must_use]
    pub fn size(self) -> Option<f32> {
        match self {
            Self::Applied(size) => Some(size),
            Self::Rejected | Self::Unchanged => None,
        }
    }

    /// Check if this result changed the size.
    #[must_use]
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Strictly ascending sequence of allowed sizes.
#[derive(Clone, Debug, PartialEq)]
pub struct FontScale {
    sizes: Vec<f32>,
}

impl FontScale {
    /// Create a scale, validating that it is non-empty, finite, positive and
    /// strictly ascending.
    pub fn new(sizes: Vec<f32>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::InvalidFontScale("scale is empty".to_string()));
        }
        if let Some(bad) = sizes.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(Error::InvalidFontScale(format!(
                "size {bad} is not a positive number"
            )));
        }
        if let Some(pair) = sizes.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::InvalidFontScale(format!(
                "sizes must ascend, found {} before {}",
                pair[0], pair[1]
            )));
        }
        Ok(Self { sizes })
    }

    /// Sizes in ascending order.
    #[must_use]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Smallest size.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.sizes[0]
    }

    /// Largest size.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.sizes[self.sizes.len() - 1]
    }

    /// Largest size strictly below `current`.
    #[must_use]
    pub fn next_smaller(&self, current: f32) -> Option<f32> {
        self.sizes
            .iter()
            .copied()
            .take_while(|&size| size < current)
            .last()
    }

    /// Smallest size strictly above `current`.
    #[must_use]
    pub fn next_larger(&self, current: f32) -> Option<f32> {
        self.sizes
            .iter()
            .rev()
            .copied()
            .take_while(|&size| size > current)
            .last()
    }

    /// Snap one step from `current`, ignoring any cooldown.
    ///
    /// `current` need not be on the scale; a size between two entries snaps
    /// to the neighbor in the requested direction.
    #[must_use]
    pub fn step(&self, current: f32, direction: Direction) -> StepResult {
        let next = match direction {
            Direction::Smaller => self.next_smaller(current),
            Direction::Larger => self.next_larger(current),
        };
        next.map_or(StepResult::Unchanged, StepResult::Applied)
    }
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
        }
    }
}

/// Step with rate limiting against the instant of the last applied change.
///
/// The caller records `now` as the new last-change instant only when the
/// result is [`StepResult::Applied`].
#[must_use]
pub fn step_size(
    scale: &FontScale,
    current: f32,
    direction: Direction,
    now: Instant,
    last_change: Instant,
    cooldown: Duration,
) -> StepResult {
    if now.saturating_duration_since(last_change) < cooldown {
        return StepResult::Rejected;
    }
    scale.step(current, direction)
}

/// Host-owned throttle timestamp.
///
/// Starts with no recorded change, so the first step is never rejected.
/// Not synchronized; callers serialize access.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThrottleState {
    last_change: Option<Instant>,
}

impl ThrottleState {
    /// Create a throttle with no recorded change.
    #[must_use]
    pub fn new() -> Self {
        Self { last_change: None }
    }

    /// Instant of the last applied change.
    #[must_use]
    pub fn last_change(&self) -> Option<Instant> {
        self.last_change
    }

    /// Step and record `now` if the step was applied.
    pub fn step(
        &mut self,
        scale: &FontScale,
        current: f32,
        direction: Direction,
        now: Instant,
        cooldown: Duration,
    ) -> StepResult {
        let result = match self.last_change {
            Some(last) => step_size(scale, current, direction, now, last, cooldown),
            None => scale.step(current, direction),
        };
        if result.is_applied() {
            self.last_change = Some(now);
        }
        result
    }

    /// Forget the last change.
    pub fn reset(&mut self) {
        self.last_change = None;
    }
}
