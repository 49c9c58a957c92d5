//! Runs a scripted scroll sequence through `InfiniteGridPlugin` with logging
//! collaborators and reports what was redrawn.
//!
//! Run: cargo run -p grid_trace -- --script RRUL --verbose

mod script;
mod trace_targets;

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use bevy::ecs::message::MessageWriter;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;
use infinite_grid::{
  ConfigError, GridConfig, GridRedrawSet, GridTargets, GridViewState, InfiniteGridPlugin, RedrawStats, Scroll,
  ScrollGrid,
};

use crate::trace_targets::{TraceBuffer, TraceNoise, TraceNormal};

#[derive(Parser, Debug)]
#[command(about = "Trace infinite grid redraws for a scroll script")]
struct Args {
  /// Grid config file. Defaults to the config bundled with this crate.
  #[arg(long)]
  config: Option<PathBuf>,

  /// Scroll steps: U(p), D(own), L(eft), R(ight).
  #[arg(long, default_value = "RRUULLDD")]
  script: String,

  /// Log every tile draw.
  #[arg(long)]
  verbose: bool,
}

/// Scroll steps still to send, one per frame.
#[derive(Resource)]
struct ScrollScript(VecDeque<Scroll>);

fn feed_script(mut script: ResMut<ScrollScript>, mut scrolls: MessageWriter<ScrollGrid>) {
  if let Some(scroll) = script.0.pop_front() {
    info!("Scrolling {:?}", scroll);
    scrolls.write(ScrollGrid(scroll));
  }
}

/// Bundled config, independent of the working directory.
fn bundled_config_path() -> PathBuf {
  Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/config/grid.config.toml")
}

/// Loads an explicit config, or the bundled one if it is still on disk.
fn load_config(explicit: Option<&Path>) -> Result<GridConfig, ConfigError> {
  match explicit {
    Some(path) => GridConfig::load(path),
    None => {
      let bundled = bundled_config_path();
      if bundled.is_file() {
        GridConfig::load(bundled)
      } else {
        Ok(GridConfig::default())
      }
    }
  }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
  let args = Args::parse();

  let steps = script::parse(&args.script)?;
  let config = load_config(args.config.as_deref())?;

  let mut app = App::new();
  app
    .add_plugins(MinimalPlugins)
    .add_plugins(LogPlugin {
      level: if args.verbose {
        Level::DEBUG
      } else {
        Level::INFO
      },
      ..default()
    })
    .add_plugins(InfiniteGridPlugin::new(config))
    .insert_resource(GridTargets::new(
      TraceNoise,
      TraceBuffer::new("noise"),
      TraceNormal::default(),
      TraceBuffer::new("normal"),
    ))
    .insert_resource(ScrollScript(steps.iter().copied().collect()))
    .add_systems(Update, feed_script.before(GridRedrawSet));

  // Startup frame plus one frame per step.
  for _ in 0..=steps.len() {
    app.update();
  }

  let state = app.world().resource::<GridViewState>();
  let stats = app.world().resource::<RedrawStats>();
  info!(
    "Anchor {:?}, noise offset {}, fractional view {}",
    state.anchor(),
    state.accumulated_offset(),
    state.fractional_offset()
  );
  info!(
    "{} scrolls: initial {} noise draws, then {} noise and {} normal draws ({} failed)",
    stats.scrolls,
    stats.initial.issued,
    stats.noise.issued,
    stats.normal.issued,
    stats.noise.failed + stats.normal.failed
  );

  Ok(())
}
