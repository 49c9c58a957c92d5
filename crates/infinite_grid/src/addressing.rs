//! Toroidal addressing between absolute and buffer-relative coordinates.
//!
//! The grid stores its tiles in fixed-size buffers. The anchor is the
//! absolute tile currently stored at buffer-relative (0, 0); every other
//! tile follows it with wraparound on both axes. Scrolling moves the anchor
//! instead of moving tile data.

use crate::coords::{Axis, Direction, GridCoord, GridExtent};

/// Steps `coord` one tile along `axis`, wrapping within `extent`.
pub fn advance(extent: GridExtent, axis: Axis, direction: Direction, coord: &mut GridCoord) {
  coord[axis] = wrap(extent, axis, coord[axis] as i64 + direction.sign() as i64);
}

/// Reduces any integer into `[0, extent)` along `axis`.
fn wrap(extent: GridExtent, axis: Axis, value: i64) -> i32 {
  value.rem_euclid(extent.along(axis) as i64) as i32
}

/// Anchor tracking and coordinate conversion for a wrap-around grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridAddressing {
  extent: GridExtent,
  anchor: GridCoord,
}

impl GridAddressing {
  /// Creates addressing for `extent` with the anchor at the origin.
  pub fn new(extent: GridExtent) -> Self {
    Self {
      extent,
      anchor: GridCoord::ORIGIN,
    }
  }

  pub fn extent(&self) -> GridExtent {
    self.extent
  }

  /// Absolute tile stored at buffer-relative (0, 0).
  pub fn anchor(&self) -> GridCoord {
    self.anchor
  }

  /// Converts an absolute coordinate to its buffer-relative position.
  ///
  /// Accepts any integer; the result is always in `[0, extent)`.
  pub fn to_buffer_relative(&self, axis: Axis, absolute: i32) -> i32 {
    wrap(
      self.extent,
      axis,
      absolute as i64 - self.anchor[axis] as i64,
    )
  }

  /// Converts a buffer-relative coordinate back to the absolute tile it
  /// currently holds.
  pub fn to_absolute(&self, axis: Axis, relative: i32) -> i32 {
    wrap(
      self.extent,
      axis,
      relative as i64 + self.anchor[axis] as i64,
    )
  }

  /// Steps `coord` one tile along `axis` within this grid's extent.
  pub fn advance(&self, axis: Axis, direction: Direction, coord: &mut GridCoord) {
    advance(self.extent, axis, direction, coord);
  }

  /// Moves the anchor one tile, returning the anchor it replaced.
  pub(crate) fn move_anchor(&mut self, axis: Axis, direction: Direction) -> GridCoord {
    let previous = self.anchor;
    advance(self.extent, axis, direction, &mut self.anchor);
    previous
  }
}
