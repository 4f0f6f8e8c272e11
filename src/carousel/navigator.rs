//! Bounded index stepping over a dynamic-length item list.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use serde::{Deserialize, Serialize};

/// Direction of one carousel step, decided once at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Toward index 0 (wheel scrolled down).
    Forward,
    /// Toward the last index (wheel scrolled up).
    Backward,
    /// No input event occurred.
    #[default]
    None,
}

impl Direction {
    /// Map a raw wheel delta, signed like the browser's legacy `wheelDelta`
    /// (negative when scrolling down). Zero counts as `Backward`.
    #[must_use]
    pub fn from_wheel_delta(delta: Option<f64>) -> Self {
        match delta {
            None => Self::None,
            Some(d) if d.is_nan() => Self::None,
            Some(d) if d < 0.0 => Self::Forward,
            Some(_) => Self::Backward,
        }
    }
}

/// Step `current` one place in `direction`, holding at either end.
///
/// Returns `None` for "no update": the direction is `None` or the list is
/// empty. An out-of-range `current` is clamped before stepping.
#[must_use]
pub fn step(current: usize, direction: Direction, length: usize) -> Option<usize> {
    let last = length.checked_sub(1)?;
    let current = current.min(last);
    match direction {
        Direction::Forward => Some(current.saturating_sub(1)),
        Direction::Backward => Some((current + 1).min(last)),
        Direction::None => None,
    }
}

/// Carousel position: `index < length` whenever `length > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CarouselState {
    index: usize,
    length: usize,
}

impl CarouselState {
    /// Build a state, clamping `index` into range.
    #[must_use]
    pub fn new(index: usize, length: usize) -> Self {
        Self { index: clamp_index(index, length), length }
    }

    /// Active index, or `None` when there are no items.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        (self.length > 0).then_some(self.index)
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Adopt a new item count, re-clamping the index. Returns whether the index moved.
    pub fn resize(&mut self, length: usize) -> bool {
        let index = clamp_index(self.index, length);
        let moved = index != self.index;
        self.length = length;
        self.index = index;
        moved
    }

    /// Apply a wheel step. Returns the new index when an update occurred.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        let next = step(self.index, direction, self.length)?;
        self.index = next;
        Some(next)
    }

    /// Jump to an externally requested index (e.g. a button), clamped into range.
    pub fn set_index(&mut self, requested: i64) -> Option<usize> {
        if self.length == 0 {
            return None;
        }
        let requested = usize::try_from(requested.max(0)).unwrap_or(usize::MAX);
        self.index = clamp_index(requested, self.length);
        Some(self.index)
    }
}

fn clamp_index(index: usize, length: usize) -> usize {
    length.checked_sub(1).map_or(0, |last| index.min(last))
}
