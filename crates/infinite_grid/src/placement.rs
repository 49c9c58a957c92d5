//! Destination rectangles for tiles inside the output buffers.
//!
//! The output region spans [-1, 1] on both axes and is cut into a regular
//! rows x cols grid. Columns run along X, rows along Y.

use bevy::math::{Vec2, Vec3};

use crate::coords::{GridCoord, GridExtent};

/// Width and height of the logical output region.
const REGION_SIZE: f32 = 2.0;

/// Where a tile is drawn: the centre of its cell and the fraction of the
/// output it covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
  pub translation: Vec3,
  pub scale: Vec2,
}

/// Maps absolute grid coordinates to fixed destination rectangles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexturePlacement {
  scale: Vec2,
  cell_size: Vec2,
  first_cell: Vec3,
}

impl TexturePlacement {
  pub fn new(extent: GridExtent) -> Self {
    let scale = Vec2::new(1.0 / extent.cols() as f32, 1.0 / extent.rows() as f32);
    let cell_size = scale * REGION_SIZE;
    let half = REGION_SIZE / 2.0;
    let first_cell = Vec3::new(-half + cell_size.x / 2.0, -half + cell_size.y / 2.0, 0.0);
    Self {
      scale,
      cell_size,
      first_cell,
    }
  }

  /// Fraction of the output covered by one tile, `(1 / cols, 1 / rows)`.
  pub fn texture_scale(&self) -> Vec2 {
    self.scale
  }

  /// Destination of the tile with the given absolute coordinate.
  pub fn destination_for(&self, absolute: GridCoord) -> Placement {
    let translation = self.first_cell
      + Vec3::new(
        absolute.j as f32 * self.cell_size.x,
        absolute.i as f32 * self.cell_size.y,
        0.0,
      );
    Placement {
      translation,
      scale: self.scale,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EPS: f32 = 1e-5;

  #[test]
  fn corner_cells_touch_region_edges() {
    let placement = TexturePlacement::new(GridExtent::new(20, 20));
    let first = placement.destination_for(GridCoord::new(0, 0));
    assert!((first.translation - Vec3::new(-0.95, -0.95, 0.0)).length() < EPS);
    let last = placement.destination_for(GridCoord::new(19, 19));
    assert!((last.translation - Vec3::new(0.95, 0.95, 0.0)).length() < EPS);
    assert_eq!(first.scale, Vec2::splat(0.05));
  }

  #[test]
  fn columns_follow_x_rows_follow_y() {
    let placement = TexturePlacement::new(GridExtent::new(2, 4));
    let d = placement.destination_for(GridCoord::new(1, 2));
    // cells are 0.5 wide and 1.0 tall
    assert!((d.translation - Vec3::new(0.25, 0.5, 0.0)).length() < EPS);
    assert_eq!(d.scale, Vec2::new(0.25, 0.5));
  }

  #[test]
  fn destination_depends_only_on_coordinate() {
    let placement = TexturePlacement::new(GridExtent::default());
    let c = GridCoord::new(7, 3);
    assert_eq!(placement.destination_for(c), placement.destination_for(c));
  }
}
