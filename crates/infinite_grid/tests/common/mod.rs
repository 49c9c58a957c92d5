//! Recording collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use bevy::math::Vec2;
use infinite_grid::{
  DrawError, GridTargets, NoiseTarget, NormalTarget, Placement, RedrawTargets, RenderTarget,
};

/// Everything the collaborators saw.
#[derive(Debug, Default)]
pub struct Tally {
  pub bound: Option<&'static str>,
  pub binds: usize,
  pub unbinds: usize,
  pub noise: Vec<(Vec2, Placement)>,
  pub normal: Vec<(Vec2, Placement)>,
  normal_offset: Vec2,
}

impl Tally {
  pub fn clear_draws(&mut self) {
    self.noise.clear();
    self.normal.clear();
  }
}

pub type SharedTally = Arc<Mutex<Tally>>;

pub struct RecordingNoise(pub SharedTally);

impl NoiseTarget for RecordingNoise {
  fn draw(&mut self, offset: Vec2, _scale: Vec2, placement: Placement) -> Result<(), DrawError> {
    let mut tally = self.0.lock().unwrap();
    if tally.bound != Some("noise") {
      return Err(DrawError::TargetNotBound);
    }
    tally.noise.push((offset, placement));
    Ok(())
  }
}

pub struct RecordingNormal(pub SharedTally);

impl NormalTarget for RecordingNormal {
  fn set_scale(&mut self, _scale: Vec2) {}

  fn set_offset(&mut self, offset: Vec2) {
    self.0.lock().unwrap().normal_offset = offset;
  }

  fn draw(&mut self, _scale: Vec2, placement: Placement) -> Result<(), DrawError> {
    let mut tally = self.0.lock().unwrap();
    if tally.bound != Some("normal") {
      return Err(DrawError::TargetNotBound);
    }
    let offset = tally.normal_offset;
    tally.normal.push((offset, placement));
    Ok(())
  }
}

pub struct RecordingBuffer(pub &'static str, pub SharedTally);

impl RenderTarget for RecordingBuffer {
  fn bind(&mut self) {
    let mut tally = self.1.lock().unwrap();
    assert!(tally.bound.is_none(), "{} bound while another target is bound", self.0);
    tally.bound = Some(self.0);
    tally.binds += 1;
  }

  fn unbind(&mut self) {
    let mut tally = self.1.lock().unwrap();
    assert_eq!(tally.bound, Some(self.0), "unbind without bind");
    tally.bound = None;
    tally.unbinds += 1;
  }
}

/// Owned collaborators for driving a `GridViewState` directly.
pub struct Rig {
  pub tally: SharedTally,
  noise: RecordingNoise,
  noise_buffer: RecordingBuffer,
  normal: RecordingNormal,
  normal_buffer: RecordingBuffer,
}

impl Rig {
  pub fn new() -> Self {
    let tally = SharedTally::default();
    Self {
      noise: RecordingNoise(tally.clone()),
      noise_buffer: RecordingBuffer("noise", tally.clone()),
      normal: RecordingNormal(tally.clone()),
      normal_buffer: RecordingBuffer("normal", tally.clone()),
      tally,
    }
  }

  pub fn targets(&mut self) -> RedrawTargets<'_> {
    RedrawTargets {
      noise: &mut self.noise,
      noise_buffer: &mut self.noise_buffer,
      normal: &mut self.normal,
      normal_buffer: &mut self.normal_buffer,
    }
  }
}

/// Collaborators for the Bevy plugin, plus the tally they write to.
pub fn grid_targets() -> (GridTargets, SharedTally) {
  let tally = SharedTally::default();
  let targets = GridTargets::new(
    RecordingNoise(tally.clone()),
    RecordingBuffer("noise", tally.clone()),
    RecordingNormal(tally.clone()),
    RecordingBuffer("normal", tally.clone()),
  );
  (targets, tally)
}
