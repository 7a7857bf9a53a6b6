//! Regeneration controller: tear the city down and grow a new one.
//!
//! A [`RegenerateCity`] request is ignored while a wave is still placing
//! cells. Otherwise the previous wave handle is cancelled, every child of the
//! [`CityRoot`] is despawned, and a fresh wave starts from the current
//! [`CityscapeConfig`]. Animators of the despawned buildings are not touched
//! here; they find their building gone on the next frame and stop.

use bevy::prelude::*;

use crate::config::CityscapeConfig;
use crate::generation::GenerationState;
use crate::world_init::CityRoot;

/// Request a new layout (e.g. from a key press). Several requests within
/// one frame count as one.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RegenerateCity;

/// Startup: the first wave runs without waiting for a request.
pub fn start_initial_generation(
    mut state: ResMut<GenerationState>,
    config: Res<CityscapeConfig>,
) {
    state.start(&config);
}

pub fn handle_regenerate_requests(
    mut commands: Commands,
    mut requests: EventReader<RegenerateCity>,
    mut state: ResMut<GenerationState>,
    config: Res<CityscapeConfig>,
    roots: Query<Entity, With<CityRoot>>,
) {
    if requests.is_empty() {
        return;
    }
    requests.clear();

    if state.in_progress {
        debug!("Regenerate request ignored: generation still in progress");
        return;
    }
    let Ok(root) = roots.get_single() else {
        return;
    };

    if state.cancel() {
        debug!("Cancelled previous generation run");
    }
    commands.entity(root).despawn_descendants();
    state.start(&config);
}
