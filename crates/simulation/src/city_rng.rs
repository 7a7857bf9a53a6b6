//! Deterministic RNG resource for building heights.
//!
//! Wraps `ChaCha8Rng` so that identical seeds produce identical skylines on
//! every platform. Systems take `ResMut<CityRng>` instead of reaching for
//! `rand::thread_rng()`.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{CityscapeConfig, DEFAULT_SEED, MAX_TARGET_HEIGHT, MIN_TARGET_HEIGHT};

/// Deterministic RNG resource; `rng.0` implements `rand::Rng`.
#[derive(Resource)]
pub struct CityRng(pub ChaCha8Rng);

impl Default for CityRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl CityRng {
    /// Create a new `CityRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Draw a building target height, uniform in `[1.0, 10.0)`.
    pub fn target_height(&mut self) -> f32 {
        self.0.gen_range(MIN_TARGET_HEIGHT..MAX_TARGET_HEIGHT)
    }
}

/// Seed the RNG from the configured seed, unless a test already inserted one.
pub fn seed_city_rng(
    mut commands: Commands,
    config: Res<CityscapeConfig>,
    existing: Option<Res<CityRng>>,
) {
    if existing.is_none() {
        commands.insert_resource(CityRng::from_seed_u64(config.seed));
    }
}
