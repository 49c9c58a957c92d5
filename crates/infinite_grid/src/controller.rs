//! Band redraw controller.
//!
//! A scroll moves the anchor by one tile. The tiles themselves stay in
//! their buffer slots, so only the band that now shows new terrain has to
//! be regenerated:
//!
//! 1. Move the anchor and shift the accumulated noise offset.
//! 2. Redraw the exposed band into the noise buffer.
//! 3. Redraw two bands into the normal buffer so normals stay continuous
//!    across the seam the scroll introduced.
//!
//! Backward scrolls expose the band at the new anchor. Forward scrolls
//! expose the band at the previous anchor, which is now the far edge.

use bevy::math::Vec2;
use log::{debug, trace, warn};

use crate::coords::{Axis, Direction, GridCoord};
use crate::state::GridViewState;
use crate::targets::{BoundTarget, DrawError, NoiseTarget, NormalTarget, RedrawTargets};

/// One of the four scroll operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scroll {
  Up,
  Down,
  Left,
  Right,
}

impl Scroll {
  pub const ALL: [Scroll; 4] = [Scroll::Up, Scroll::Down, Scroll::Left, Scroll::Right];

  /// Axis and direction the anchor moves in.
  pub const fn axis_direction(self) -> (Axis, Direction) {
    match self {
      Scroll::Up => (Axis::I, Direction::Forward),
      Scroll::Down => (Axis::I, Direction::Backward),
      Scroll::Left => (Axis::J, Direction::Backward),
      Scroll::Right => (Axis::J, Direction::Forward),
    }
  }

  /// The scroll that undoes this one.
  pub const fn opposite(self) -> Scroll {
    match self {
      Scroll::Up => Scroll::Down,
      Scroll::Down => Scroll::Up,
      Scroll::Left => Scroll::Right,
      Scroll::Right => Scroll::Left,
    }
  }
}

/// Draw calls issued during one redraw phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
  pub issued: usize,
  pub failed: usize,
}

impl DrawStats {
  fn record(&mut self, buffer: &str, tile: GridCoord, result: Result<(), DrawError>) {
    self.issued += 1;
    if let Err(e) = result {
      self.failed += 1;
      warn!("{} draw for tile {:?} failed: {}", buffer, tile, e);
    }
  }

  pub(crate) fn merge(&mut self, other: DrawStats) {
    self.issued += other.issued;
    self.failed += other.failed;
  }
}

/// What a single scroll redrew.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BandRedraw {
  pub axis: Axis,
  pub direction: Direction,
  /// Anchor after the scroll.
  pub anchor: GridCoord,
  /// Band index (along `axis`) redrawn in the noise buffer.
  pub exposed_band: i32,
  /// Band indices (along `axis`) redrawn in the normal buffer, in order.
  pub normal_bands: [i32; 2],
  pub noise: DrawStats,
  pub normal: DrawStats,
}

impl GridViewState {
  /// Draws every tile of the grid into the noise buffer.
  ///
  /// Must run once before any scroll.
  pub fn initialize_grid(&mut self, targets: &mut RedrawTargets<'_>) -> DrawStats {
    let mut stats = DrawStats::default();
    {
      let _bound = BoundTarget::bind(&mut *targets.noise_buffer);
      for band in 0..self.extent().along(Axis::J) {
        stats.merge(self.redraw_noise_band(Axis::J, band, &mut *targets.noise));
      }
    }
    self.initialized = true;
    debug!(
      "initialized {}x{} grid: {} noise draws",
      self.extent().rows(),
      self.extent().cols(),
      stats.issued
    );
    stats
  }

  /// Scrolls one tile along `axis` and redraws the stale bands.
  pub fn scroll(
    &mut self,
    axis: Axis,
    direction: Direction,
    targets: &mut RedrawTargets<'_>,
  ) -> BandRedraw {
    debug_assert!(self.initialized, "scroll before initialize_grid");

    let previous = self.addressing.move_anchor(axis, direction);
    self.noise.shift(axis, direction);
    let anchor = self.addressing.anchor();

    let exposed_band = match direction {
      Direction::Backward => anchor[axis],
      Direction::Forward => previous[axis],
    };

    let noise = {
      let _bound = BoundTarget::bind(&mut *targets.noise_buffer);
      self.redraw_noise_band(axis, exposed_band, &mut *targets.noise)
    };

    let trailing_band = match direction {
      Direction::Backward => anchor[axis],
      Direction::Forward => {
        let mut before_previous = previous;
        self
          .addressing
          .advance(axis, direction.reversed(), &mut before_previous);
        before_previous[axis]
      }
    };
    let normal_bands = [previous[axis], trailing_band];

    let mut normal = DrawStats::default();
    {
      let _bound = BoundTarget::bind(&mut *targets.normal_buffer);
      for band in normal_bands {
        normal.merge(self.redraw_normal_band(axis, band, &mut *targets.normal));
      }
    }

    debug!(
      "scroll {:?} {:?}: anchor {:?} -> {:?}, noise band {}, normal bands {:?}",
      axis, direction, previous, anchor, exposed_band, normal_bands
    );

    BandRedraw {
      axis,
      direction,
      anchor,
      exposed_band,
      normal_bands,
      noise,
      normal,
    }
  }

  /// Applies one of the four fixed scroll operations.
  pub fn apply(&mut self, scroll: Scroll, targets: &mut RedrawTargets<'_>) -> BandRedraw {
    let (axis, direction) = scroll.axis_direction();
    self.scroll(axis, direction, targets)
  }

  pub fn scroll_up(&mut self, targets: &mut RedrawTargets<'_>) -> BandRedraw {
    self.apply(Scroll::Up, targets)
  }

  pub fn scroll_down(&mut self, targets: &mut RedrawTargets<'_>) -> BandRedraw {
    self.apply(Scroll::Down, targets)
  }

  pub fn scroll_left(&mut self, targets: &mut RedrawTargets<'_>) -> BandRedraw {
    self.apply(Scroll::Left, targets)
  }

  pub fn scroll_right(&mut self, targets: &mut RedrawTargets<'_>) -> BandRedraw {
    self.apply(Scroll::Right, targets)
  }

  /// Redraws the noise of every tile in absolute band `band` along `axis`.
  fn redraw_noise_band(&self, axis: Axis, band: i32, noise: &mut dyn NoiseTarget) -> DrawStats {
    let across = axis.perpendicular();
    let scale = self.placement.texture_scale();
    let relative_band = self.addressing.to_buffer_relative(axis, band);

    let mut stats = DrawStats::default();
    for t in 0..self.extent().along(across) {
      let relative = GridCoord::from_axis(axis, relative_band, t);
      let absolute = GridCoord::from_axis(axis, band, self.addressing.to_absolute(across, t));
      let offset = self.noise.offset_for_tile(relative);
      let placement = self.placement.destination_for(absolute);
      trace!(
        "noise tile {:?}: offset {} at {}",
        absolute, offset, placement.translation
      );
      let result = noise.draw(offset, scale, placement);
      stats.record("noise", absolute, result);
    }
    stats
  }

  /// Redraws the normals of every tile in absolute band `band` along `axis`.
  fn redraw_normal_band(
    &self,
    axis: Axis,
    band: i32,
    normal: &mut dyn NormalTarget,
  ) -> DrawStats {
    let across = axis.perpendicular();
    let scale = self.placement.texture_scale();

    let mut stats = DrawStats::default();
    for t in 0..self.extent().along(across) {
      let absolute = GridCoord::from_axis(axis, band, self.addressing.to_absolute(across, t));
      let offset = Vec2::new(absolute.j as f32, absolute.i as f32);
      let placement = self.placement.destination_for(absolute);
      trace!(
        "normal tile {:?}: offset {} at {}",
        absolute, offset, placement.translation
      );
      normal.set_scale(scale);
      normal.set_offset(offset);
      let result = normal.draw(scale, placement);
      stats.record("normal", absolute, result);
    }
    stats
  }
}
