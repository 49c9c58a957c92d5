//! Infinite Grid - a wrap-around tile grid scrolling over procedural terrain.
//!
//! The grid keeps a fixed number of tiles in fixed buffer slots. Scrolling
//! moves an anchor tile instead of moving data, so each scroll only redraws
//! the single band of tiles that now shows new terrain (plus two bands of
//! normals around the seam).
//!
//! Noise and normal generation are provided by the application through the
//! [`NoiseTarget`], [`NormalTarget`] and [`RenderTarget`] traits.
//!
//! # Example
//! ```ignore
//! let mut state = GridViewState::new(GridExtent::new(20, 20));
//! state.initialize_grid(&mut targets);
//! state.scroll_right(&mut targets);
//! ```

pub mod addressing;
pub mod config;
pub mod controller;
pub mod coords;
pub mod noise_offset;
pub mod placement;
pub mod plugin;
pub mod state;
pub mod targets;

pub use addressing::GridAddressing;
pub use config::{ConfigError, GridConfig};
pub use controller::{BandRedraw, DrawStats, Scroll};
pub use coords::{Axis, Direction, GridCoord, GridExtent};
pub use noise_offset::NoiseOffsetTracker;
pub use placement::{Placement, TexturePlacement};
pub use plugin::{
  FractionalView, GridRedrawSet, GridTargets, InfiniteGridPlugin, RedrawStats, ScrollGrid,
};
pub use state::GridViewState;
pub use targets::{
  BoundTarget, DrawError, NoiseTarget, NormalTarget, RedrawTargets, RenderTarget,
};
