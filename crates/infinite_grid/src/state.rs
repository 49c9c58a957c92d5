//! Owned state of a scrolling grid view.

use bevy::math::Vec2;
use bevy::prelude::Resource;

use crate::addressing::GridAddressing;
use crate::coords::{GridCoord, GridExtent};
use crate::noise_offset::NoiseOffsetTracker;
use crate::placement::TexturePlacement;

/// Anchor, accumulated noise offset and placement of one grid view.
///
/// Only the band redraw operations (see `controller`) mutate it, and they
/// take `&mut self`, so there is a single writer at a time.
#[derive(Resource, Clone, Debug)]
pub struct GridViewState {
  pub(crate) addressing: GridAddressing,
  pub(crate) noise: NoiseOffsetTracker,
  pub(crate) placement: TexturePlacement,
  pub(crate) initialized: bool,
}

impl GridViewState {
  /// Creates a view with the anchor at the origin and zero offset.
  pub fn new(extent: GridExtent) -> Self {
    Self {
      addressing: GridAddressing::new(extent),
      noise: NoiseOffsetTracker::new(),
      placement: TexturePlacement::new(extent),
      initialized: false,
    }
  }

  pub fn extent(&self) -> GridExtent {
    self.addressing.extent()
  }

  pub fn anchor(&self) -> GridCoord {
    self.addressing.anchor()
  }

  pub fn accumulated_offset(&self) -> Vec2 {
    self.noise.accumulated()
  }

  /// Accumulated offset in whole-grid units.
  pub fn fractional_offset(&self) -> Vec2 {
    self.noise.fractional_offset(self.extent())
  }

  pub fn addressing(&self) -> &GridAddressing {
    &self.addressing
  }

  pub fn noise_offsets(&self) -> &NoiseOffsetTracker {
    &self.noise
  }

  pub fn placement(&self) -> &TexturePlacement {
    &self.placement
  }

  /// Whether the initial full draw has run.
  pub fn is_initialized(&self) -> bool {
    self.initialized
  }
}

impl Default for GridViewState {
  fn default() -> Self {
    Self::new(GridExtent::default())
  }
}
