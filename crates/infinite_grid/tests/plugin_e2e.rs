//! End-to-end tests for `InfiniteGridPlugin` in a headless Bevy app.

mod common;

use bevy::ecs::message::Messages;
use bevy::prelude::*;
use common::{SharedTally, grid_targets};
use infinite_grid::{
  FractionalView, GridConfig, GridCoord, GridViewState, InfiniteGridPlugin, RedrawStats, Scroll,
  ScrollGrid,
};

fn harness(rows: u32, cols: u32) -> (App, SharedTally) {
  let mut app = App::new();
  app.add_plugins(MinimalPlugins);
  app.add_plugins(InfiniteGridPlugin::new(GridConfig { rows, cols }));
  let (targets, tally) = grid_targets();
  app.insert_resource(targets);
  (app, tally)
}

fn send(app: &mut App, scroll: Scroll) {
  app
    .world_mut()
    .resource_mut::<Messages<ScrollGrid>>()
    .write(ScrollGrid(scroll));
}

#[test]
fn startup_draws_full_grid() {
  let (mut app, tally) = harness(6, 9);
  app.update();

  let state = app.world().resource::<GridViewState>();
  assert!(state.is_initialized());
  let stats = app.world().resource::<RedrawStats>();
  assert_eq!(stats.initial.issued, 54);
  assert_eq!(stats.initial.failed, 0);
  assert_eq!(stats.scrolls, 0);

  let tally = tally.lock().unwrap();
  assert_eq!(tally.noise.len(), 54);
  assert!(tally.normal.is_empty());
}

#[test]
fn scroll_messages_apply_in_order() {
  let (mut app, tally) = harness(20, 20);
  app.update();
  tally.lock().unwrap().clear_draws();

  send(&mut app, Scroll::Right);
  send(&mut app, Scroll::Right);
  send(&mut app, Scroll::Up);
  app.update();

  let state = app.world().resource::<GridViewState>();
  assert_eq!(state.anchor(), GridCoord::new(1, 2));
  assert_eq!(state.accumulated_offset(), Vec2::new(2.0, 1.0));

  let stats = app.world().resource::<RedrawStats>();
  assert_eq!(stats.scrolls, 3);
  assert_eq!(stats.noise.issued, 60);
  assert_eq!(stats.normal.issued, 120);
  assert_eq!(stats.noise.failed + stats.normal.failed, 0);

  let tally = tally.lock().unwrap();
  assert_eq!(tally.noise.len(), 60);
  assert_eq!(tally.binds, tally.unbinds);
}

#[test]
fn fractional_view_follows_scrolls() {
  let (mut app, _tally) = harness(10, 4);
  app.update();

  send(&mut app, Scroll::Right);
  send(&mut app, Scroll::Down);
  app.update();

  let view = app.world().resource::<FractionalView>();
  assert_eq!(view.offset, Vec2::new(0.25, -0.1));

  send(&mut app, Scroll::Left);
  send(&mut app, Scroll::Up);
  app.update();

  let view = app.world().resource::<FractionalView>();
  assert_eq!(view.offset, Vec2::ZERO);
}

#[test]
fn frames_without_messages_do_nothing() {
  let (mut app, tally) = harness(5, 5);
  app.update();
  tally.lock().unwrap().clear_draws();

  for _ in 0..10 {
    app.update();
  }

  assert_eq!(app.world().resource::<RedrawStats>().scrolls, 0);
  assert!(tally.lock().unwrap().noise.is_empty());
}
