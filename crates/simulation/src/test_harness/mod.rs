//! # TestCityscape - headless integration test harness
//!
//! Wraps `bevy::app::App` + `SimulationPlugin` for running integration tests
//! without a window or renderer. Time advances by a fixed step per frame via
//! `TimeUpdateStrategy::ManualDuration`, so wave delays and animation
//! durations translate into predictable frame counts.

mod assertions;
mod queries;

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::city_rng::CityRng;
use crate::config::CityscapeConfig;
use crate::regeneration::RegenerateCity;
use crate::SimulationPlugin;

/// Default frame step: 60 frames per second.
pub const FRAME: Duration = Duration::from_nanos(16_666_667);

/// A headless Bevy App wrapping `SimulationPlugin` for integration testing.
///
/// Construct it with a config, call `tick()` to advance frames, then query
/// and assert on the resulting ECS state.
pub struct TestCityscape {
    app: App,
}

impl TestCityscape {
    /// Create a cityscape with the given config at 60 frames per second.
    /// The first frame has already run, so the initial wave has started and
    /// placed its first cell.
    pub fn new(config: CityscapeConfig) -> Self {
        Self::with_frame_time(config, FRAME)
    }

    /// Create a cityscape whose frames advance time by `frame`.
    pub fn with_frame_time(config: CityscapeConfig, frame: Duration) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(frame));
        app.insert_resource(CityRng::from_seed_u64(config.seed));
        app.insert_resource(config);
        app.add_plugins(SimulationPlugin);

        // Run one update so Startup systems execute.
        app.update();

        Self { app }
    }

    /// A `width` x `depth` grid with no delay between cells.
    pub fn instant(width: u32, depth: u32) -> Self {
        Self::new(CityscapeConfig {
            grid_width: width,
            grid_depth: depth,
            wave_speed: 0.0,
            ..Default::default()
        })
    }

    /// Run N frames.
    pub fn tick(&mut self, n: u32) {
        for _ in 0..n {
            self.app.update();
        }
    }

    /// Run frames until the active wave has placed every cell, up to
    /// `max_frames`. Returns the number of frames run.
    pub fn tick_until_generated(&mut self, max_frames: u32) -> u32 {
        for frame in 0..max_frames {
            if !self.generation_state().in_progress {
                return frame;
            }
            self.app.update();
        }
        panic!("generation still in progress after {max_frames} frames");
    }

    /// Run frames until every height animator has finished, up to
    /// `max_frames`. Returns the number of frames run.
    pub fn tick_until_settled(&mut self, max_frames: u32) -> u32 {
        for frame in 0..max_frames {
            if !self.generation_state().in_progress && self.animator_count() == 0 {
                return frame;
            }
            self.app.update();
        }
        panic!("animations still running after {max_frames} frames");
    }

    /// Queue a regeneration request for the next frame.
    pub fn request_regenerate(&mut self) {
        self.app.world_mut().send_event(RegenerateCity);
    }

    /// Despawn an entity and its descendants immediately, detaching it from
    /// its parent (simulates external removal).
    pub fn despawn(&mut self, entity: Entity) {
        self.app.world_mut().entity_mut(entity).despawn_recursive();
    }

    /// Access the ECS world mutably (needed for queries in Bevy).
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
