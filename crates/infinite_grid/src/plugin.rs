//! Bevy integration.
//!
//! [`InfiniteGridPlugin`] owns a [`GridViewState`] resource, draws the full
//! grid at startup and applies [`ScrollGrid`] messages every frame. The app
//! provides the collaborators through the [`GridTargets`] resource.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::config::GridConfig;
use crate::controller::{BandRedraw, DrawStats, Scroll};
use crate::coords::GridExtent;
use crate::state::GridViewState;
use crate::targets::{NoiseTarget, NormalTarget, RedrawTargets, RenderTarget};

/// Request to scroll the grid by one tile.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollGrid(pub Scroll);

/// Collaborators the grid draws into.
#[derive(Resource)]
pub struct GridTargets {
  pub noise: Box<dyn NoiseTarget>,
  pub noise_buffer: Box<dyn RenderTarget>,
  pub normal: Box<dyn NormalTarget>,
  pub normal_buffer: Box<dyn RenderTarget>,
}

impl GridTargets {
  pub fn new(
    noise: impl NoiseTarget + 'static,
    noise_buffer: impl RenderTarget + 'static,
    normal: impl NormalTarget + 'static,
    normal_buffer: impl RenderTarget + 'static,
  ) -> Self {
    Self {
      noise: Box::new(noise),
      noise_buffer: Box::new(noise_buffer),
      normal: Box::new(normal),
      normal_buffer: Box::new(normal_buffer),
    }
  }

  /// Borrows all collaborators for one redraw.
  pub fn redraw_targets(&mut self) -> RedrawTargets<'_> {
    RedrawTargets {
      noise: &mut *self.noise,
      noise_buffer: &mut *self.noise_buffer,
      normal: &mut *self.normal,
      normal_buffer: &mut *self.normal_buffer,
    }
  }
}

/// Running totals of redraw work.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedrawStats {
  /// Draws issued by the initial full redraw.
  pub initial: DrawStats,
  pub scrolls: usize,
  /// Noise draws issued by scrolls.
  pub noise: DrawStats,
  /// Normal draws issued by scrolls.
  pub normal: DrawStats,
}

impl RedrawStats {
  fn record(&mut self, redraw: &BandRedraw) {
    self.scrolls += 1;
    self.noise.merge(redraw.noise);
    self.normal.merge(redraw.normal);
  }
}

/// Scroll offset of the whole grid in grid-size units.
///
/// Updated after each frame that scrolled.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct FractionalView {
  pub offset: Vec2,
}

/// Systems that redraw the grid. Order scroll producers before this set.
#[derive(SystemSet, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridRedrawSet;

/// Plugin that keeps a scrolling terrain grid up to date.
#[derive(Default)]
pub struct InfiniteGridPlugin {
  pub config: GridConfig,
}

impl InfiniteGridPlugin {
  pub fn new(config: GridConfig) -> Self {
    Self { config }
  }
}

impl Plugin for InfiniteGridPlugin {
  fn build(&self, app: &mut App) {
    let extent = match self.config.validate() {
      Ok(()) => self.config.extent(),
      Err(e) => {
        error!("{}. Using default grid extent.", e);
        GridExtent::default()
      }
    };

    app
      .insert_resource(GridViewState::new(extent))
      .init_resource::<RedrawStats>()
      .init_resource::<FractionalView>()
      .add_message::<ScrollGrid>()
      .add_systems(Startup, initialize_grid_view.in_set(GridRedrawSet))
      .add_systems(Update, apply_scroll_requests.in_set(GridRedrawSet));
  }
}

fn initialize_grid_view(
  mut state: ResMut<GridViewState>,
  targets: Option<ResMut<GridTargets>>,
  mut stats: ResMut<RedrawStats>,
) {
  let Some(mut targets) = targets else {
    warn!("No GridTargets resource at startup. Grid left uninitialized.");
    return;
  };

  stats.initial = state.initialize_grid(&mut targets.redraw_targets());
  info!(
    "Initialized {}x{} terrain grid ({} tiles)",
    state.extent().rows(),
    state.extent().cols(),
    stats.initial.issued
  );
}

fn apply_scroll_requests(
  mut requests: MessageReader<ScrollGrid>,
  mut state: ResMut<GridViewState>,
  targets: Option<ResMut<GridTargets>>,
  mut stats: ResMut<RedrawStats>,
  mut view: ResMut<FractionalView>,
) {
  let pending: Vec<Scroll> = requests.read().map(|request| request.0).collect();
  if pending.is_empty() {
    return;
  }

  let Some(mut targets) = targets else {
    warn!("Dropping {} scroll requests: no GridTargets", pending.len());
    return;
  };
  if !state.is_initialized() {
    warn!(
      "Dropping {} scroll requests: grid not initialized",
      pending.len()
    );
    return;
  }

  for scroll in pending {
    let redraw = state.apply(scroll, &mut targets.redraw_targets());
    stats.record(&redraw);
  }
  view.offset = state.fractional_offset();
}
