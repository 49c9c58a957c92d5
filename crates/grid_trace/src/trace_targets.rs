//! Collaborators that log what the grid asks them to draw.

use bevy::math::Vec2;
use infinite_grid::{DrawError, NoiseTarget, NormalTarget, Placement, RenderTarget};
use log::debug;

pub struct TraceNoise;

impl NoiseTarget for TraceNoise {
  fn draw(&mut self, offset: Vec2, scale: Vec2, placement: Placement) -> Result<(), DrawError> {
    debug!(
      "noise: offset {} scale {} at {}",
      offset, scale, placement.translation
    );
    Ok(())
  }
}

#[derive(Default)]
pub struct TraceNormal {
  scale: Vec2,
  offset: Vec2,
}

impl NormalTarget for TraceNormal {
  fn set_scale(&mut self, scale: Vec2) {
    self.scale = scale;
  }

  fn set_offset(&mut self, offset: Vec2) {
    self.offset = offset;
  }

  fn draw(&mut self, _scale: Vec2, placement: Placement) -> Result<(), DrawError> {
    debug!(
      "normal: offset {} scale {} at {}",
      self.offset, self.scale, placement.translation
    );
    Ok(())
  }
}

pub struct TraceBuffer {
  name: &'static str,
}

impl TraceBuffer {
  pub fn new(name: &'static str) -> Self {
    Self { name }
  }
}

impl RenderTarget for TraceBuffer {
  fn bind(&mut self) {
    debug!("bind {}", self.name);
  }

  fn unbind(&mut self) {
    debug!("unbind {}", self.name);
  }
}
