//! Coordinate types for the toroidal tile grid.
//!
//! - [`Axis`]: selects the I (row) or J (column) component
//! - [`Direction`]: one grid step backward or forward along an axis
//! - [`GridCoord`]: a tile coordinate, absolute or buffer-relative
//! - [`GridExtent`]: number of tiles along each axis
//!
//! Both absolute and buffer-relative coordinates use [`GridCoord`]. Which
//! one a value holds is decided by where it came from, see
//! [`GridAddressing`](crate::GridAddressing).

use std::ops::{Index, IndexMut};

/// Grid axis. I indexes rows (vertical), J indexes columns (horizontal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
  I,
  J,
}

impl Axis {
  /// Both axes, in I, J order.
  pub const ALL: [Axis; 2] = [Axis::I, Axis::J];

  /// Returns the other axis.
  pub const fn perpendicular(self) -> Axis {
    match self {
      Axis::I => Axis::J,
      Axis::J => Axis::I,
    }
  }

  /// Returns the index (0-1) for this axis.
  pub const fn index(self) -> usize {
    match self {
      Axis::I => 0,
      Axis::J => 1,
    }
  }
}

/// A single step along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
  /// Towards lower indices (-1).
  Backward,
  /// Towards higher indices (+1).
  Forward,
}

impl Direction {
  /// Returns -1 or +1.
  pub const fn sign(self) -> i32 {
    match self {
      Direction::Backward => -1,
      Direction::Forward => 1,
    }
  }

  /// Returns the opposite direction.
  pub const fn reversed(self) -> Direction {
    match self {
      Direction::Backward => Direction::Forward,
      Direction::Forward => Direction::Backward,
    }
  }
}

/// Tile coordinate in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridCoord {
  pub i: i32,
  pub j: i32,
}

impl GridCoord {
  /// The origin tile (0, 0).
  pub const ORIGIN: GridCoord = GridCoord::new(0, 0);

  /// Creates a new grid coordinate.
  pub const fn new(i: i32, j: i32) -> Self {
    Self { i, j }
  }

  /// Creates a coordinate from a value on `axis` and a value on the
  /// perpendicular axis.
  pub fn from_axis(axis: Axis, along: i32, across: i32) -> Self {
    let mut coord = GridCoord::ORIGIN;
    coord[axis] = along;
    coord[axis.perpendicular()] = across;
    coord
  }
}

impl Index<Axis> for GridCoord {
  type Output = i32;

  fn index(&self, axis: Axis) -> &i32 {
    match axis {
      Axis::I => &self.i,
      Axis::J => &self.j,
    }
  }
}

impl IndexMut<Axis> for GridCoord {
  fn index_mut(&mut self, axis: Axis) -> &mut i32 {
    match axis {
      Axis::I => &mut self.i,
      Axis::J => &mut self.j,
    }
  }
}

/// Number of tiles along each axis.
///
/// Both dimensions are non-zero; they are the modulus of every wraparound
/// operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridExtent {
  rows: u32,
  cols: u32,
}

impl GridExtent {
  /// Creates a new extent.
  ///
  /// # Panics
  /// Panics if either dimension is zero or does not fit in an `i32`.
  pub fn new(rows: u32, cols: u32) -> Self {
    assert!(rows > 0 && cols > 0, "grid extent must be non-zero");
    assert!(
      rows <= i32::MAX as u32 && cols <= i32::MAX as u32,
      "grid extent must fit in i32"
    );
    Self { rows, cols }
  }

  /// Number of rows (extent along I).
  pub const fn rows(&self) -> u32 {
    self.rows
  }

  /// Number of columns (extent along J).
  pub const fn cols(&self) -> u32 {
    self.cols
  }

  /// Number of tiles along `axis`.
  pub const fn along(&self, axis: Axis) -> i32 {
    match axis {
      Axis::I => self.rows as i32,
      Axis::J => self.cols as i32,
    }
  }

  /// Total number of tiles in the grid.
  pub const fn tile_count(&self) -> usize {
    self.rows as usize * self.cols as usize
  }
}

impl Default for GridExtent {
  fn default() -> Self {
    Self::new(20, 20)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn perpendicular_swaps_axes() {
    assert_eq!(Axis::I.perpendicular(), Axis::J);
    assert_eq!(Axis::J.perpendicular(), Axis::I);
  }

  #[test]
  fn direction_sign_and_reverse() {
    assert_eq!(Direction::Backward.sign(), -1);
    assert_eq!(Direction::Forward.sign(), 1);
    assert_eq!(Direction::Forward.reversed(), Direction::Backward);
  }

  #[test]
  fn coord_indexing_by_axis() {
    let mut c = GridCoord::new(3, 7);
    assert_eq!(c[Axis::I], 3);
    assert_eq!(c[Axis::J], 7);
    c[Axis::J] = 9;
    assert_eq!(c, GridCoord::new(3, 9));
  }

  #[test]
  fn from_axis_places_components() {
    assert_eq!(GridCoord::from_axis(Axis::I, 2, 5), GridCoord::new(2, 5));
    assert_eq!(GridCoord::from_axis(Axis::J, 2, 5), GridCoord::new(5, 2));
  }

  #[test]
  fn extent_along_axis() {
    let extent = GridExtent::new(4, 6);
    assert_eq!(extent.along(Axis::I), 4);
    assert_eq!(extent.along(Axis::J), 6);
    assert_eq!(extent.tile_count(), 24);
  }

  #[test]
  #[should_panic(expected = "non-zero")]
  fn zero_extent_panics() {
    GridExtent::new(0, 3);
  }
}
