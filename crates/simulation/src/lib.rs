use bevy::prelude::*;

pub mod city_rng;
pub mod config;
pub mod config_error;
pub mod generation;
pub mod height_anim;
pub mod layout;
pub mod regeneration;
pub mod simulation_sets;
pub mod world_init;

#[cfg(test)]
pub mod test_harness;

use config::CityscapeConfig;
use generation::GenerationState;
use regeneration::RegenerateCity;
use simulation_sets::CityscapeSet;

/// Headless cityscape logic: layout wave, height animation and regeneration.
///
/// Insert a [`CityscapeConfig`] before adding the plugin to override the
/// defaults. Nothing here depends on rendering; buildings and roads are plain
/// entities with a `Transform` under the [`world_init::CityRoot`].
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CityscapeConfig>()
            .init_resource::<GenerationState>()
            .add_event::<RegenerateCity>()
            .configure_sets(
                Update,
                (
                    CityscapeSet::Input,
                    CityscapeSet::Generation,
                    CityscapeSet::Animation,
                )
                    .chain(),
            )
            .add_systems(
                Startup,
                (
                    city_rng::seed_city_rng,
                    world_init::spawn_city_root,
                    regeneration::start_initial_generation,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    regeneration::handle_regenerate_requests,
                    generation::advance_generation,
                )
                    .chain()
                    .in_set(CityscapeSet::Generation),
            )
            .add_systems(
                Update,
                height_anim::animate_building_heights.in_set(CityscapeSet::Animation),
            );
    }
}
