//! Noise-domain offsets for grid tiles.
//!
//! Each tile samples the procedural noise at an offset made of the
//! accumulated scroll displacement plus its buffer-relative position. The
//! buffer slot of a tile never changes, so the accumulated offset is what
//! keeps the sampled terrain continuous while the grid scrolls.

use bevy::math::Vec2;

use crate::coords::{Axis, Direction, GridCoord, GridExtent};

/// Noise offset contributed by one step along I (rows map to noise Y).
pub const GAIN_I: Vec2 = Vec2::new(0.0, 1.0);

/// Noise offset contributed by one step along J (columns map to noise X).
pub const GAIN_J: Vec2 = Vec2::new(1.0, 0.0);

/// Returns the unit noise offset for one step along `axis`.
pub const fn gain(axis: Axis) -> Vec2 {
  match axis {
    Axis::I => GAIN_I,
    Axis::J => GAIN_J,
  }
}

/// Tracks the accumulated noise offset of the anchor tile.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NoiseOffsetTracker {
  accumulated: Vec2,
}

impl NoiseOffsetTracker {
  pub fn new() -> Self {
    Self::default()
  }

  /// Total scroll displacement in noise-sampling units.
  pub fn accumulated(&self) -> Vec2 {
    self.accumulated
  }

  /// Noise offset for the tile at a buffer-relative coordinate.
  pub fn offset_for_tile(&self, relative: GridCoord) -> Vec2 {
    self.accumulated + GAIN_I * relative.i as f32 + GAIN_J * relative.j as f32
  }

  /// Applies one scroll step.
  pub fn shift(&mut self, axis: Axis, direction: Direction) {
    self.accumulated += gain(axis) * direction.sign() as f32;
  }

  /// The accumulated offset in whole-grid units, for consumers that sample
  /// the full grid at once.
  pub fn fractional_offset(&self, extent: GridExtent) -> Vec2 {
    Vec2::new(
      self.accumulated.x / extent.cols() as f32,
      self.accumulated.y / extent.rows() as f32,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tile_offset_adds_relative_position() {
    let tracker = NoiseOffsetTracker::new();
    assert_eq!(tracker.offset_for_tile(GridCoord::new(3, 5)), Vec2::new(5.0, 3.0));
  }

  #[test]
  fn shift_moves_along_axis_gain() {
    let mut tracker = NoiseOffsetTracker::new();
    tracker.shift(Axis::J, Direction::Forward);
    tracker.shift(Axis::I, Direction::Backward);
    tracker.shift(Axis::I, Direction::Backward);
    assert_eq!(tracker.accumulated(), Vec2::new(1.0, -2.0));
    assert_eq!(
      tracker.offset_for_tile(GridCoord::new(1, 1)),
      Vec2::new(2.0, -1.0)
    );
  }

  #[test]
  fn opposite_shifts_cancel() {
    let mut tracker = NoiseOffsetTracker::new();
    for _ in 0..13 {
      tracker.shift(Axis::I, Direction::Forward);
    }
    for _ in 0..13 {
      tracker.shift(Axis::I, Direction::Backward);
    }
    assert_eq!(tracker.accumulated(), Vec2::ZERO);
  }

  #[test]
  fn fractional_offset_divides_by_extent() {
    let mut tracker = NoiseOffsetTracker::new();
    tracker.shift(Axis::J, Direction::Forward);
    tracker.shift(Axis::I, Direction::Forward);
    let frac = tracker.fractional_offset(GridExtent::new(10, 4));
    assert_eq!(frac, Vec2::new(0.25, 0.1));
  }
}
