//! Collaborators that receive tile redraws.
//!
//! The grid never rasterizes anything itself. It hands each tile to a
//! [`NoiseTarget`] or [`NormalTarget`] while the matching [`RenderTarget`]
//! is bound.
//!
//! The `Send + Sync` bounds let implementations live inside a Bevy resource.

use bevy::math::Vec2;

use crate::placement::Placement;

/// Error reported by a collaborator for a single tile draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
  /// The destination buffer was not bound when the draw was issued.
  TargetNotBound,
  /// The generator rejected the draw.
  Rejected(String),
}

impl std::fmt::Display for DrawError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::TargetNotBound => write!(f, "render target not bound"),
      Self::Rejected(reason) => write!(f, "draw rejected: {}", reason),
    }
  }
}

impl std::error::Error for DrawError {}

/// Writes procedural noise for one tile into the bound noise buffer.
pub trait NoiseTarget: Send + Sync {
  /// Samples noise at `offset` with `scale` and writes it at `placement`.
  fn draw(&mut self, offset: Vec2, scale: Vec2, placement: Placement) -> Result<(), DrawError>;
}

/// Derives normals for one tile into the bound normal buffer.
///
/// Scale and offset are persistent state: they stay in effect until
/// overwritten.
pub trait NormalTarget: Send + Sync {
  fn set_scale(&mut self, scale: Vec2);

  fn set_offset(&mut self, offset: Vec2);

  /// Draws with the current scale/offset state.
  fn draw(&mut self, scale: Vec2, placement: Placement) -> Result<(), DrawError>;
}

/// An off-screen buffer that must be bound while drawing into it.
pub trait RenderTarget: Send + Sync {
  fn bind(&mut self);

  fn unbind(&mut self);
}

/// RAII guard that keeps a [`RenderTarget`] bound until dropped.
///
/// Unbinding happens on drop, so it also runs while unwinding from a
/// panicking draw.
pub struct BoundTarget<'a> {
  target: &'a mut dyn RenderTarget,
}

impl<'a> BoundTarget<'a> {
  /// Binds `target` for the lifetime of the guard.
  pub fn bind(target: &'a mut dyn RenderTarget) -> Self {
    target.bind();
    Self { target }
  }
}

impl Drop for BoundTarget<'_> {
  fn drop(&mut self) {
    self.target.unbind();
  }
}

/// Borrowed set of collaborators used by one redraw.
pub struct RedrawTargets<'a> {
  pub noise: &'a mut dyn NoiseTarget,
  pub noise_buffer: &'a mut dyn RenderTarget,
  pub normal: &'a mut dyn NormalTarget,
  pub normal_buffer: &'a mut dyn RenderTarget,
}
