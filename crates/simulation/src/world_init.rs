// =============================================================================
// World setup: the managed root every building and road is parented to.
// =============================================================================

use bevy::prelude::*;

/// Marker for the single entity that owns all generated buildings and roads.
/// Clearing the city means despawning its descendants.
#[derive(Component, Debug, Default)]
pub struct CityRoot;

pub fn spawn_city_root(mut commands: Commands, existing: Query<(), With<CityRoot>>) {
    if !existing.is_empty() {
        return;
    }
    commands.spawn((CityRoot, Name::new("Cityscape"), Transform::default()));
}
