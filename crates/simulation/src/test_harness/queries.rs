//! Query methods for `TestCityscape`.

use bevy::prelude::*;

use crate::generation::{Building, GenerationState, Road};
use crate::height_anim::HeightAnimator;
use crate::layout::RoadAxis;
use crate::world_init::CityRoot;

use super::TestCityscape;

/// Snapshot of one building for assertions.
#[derive(Debug, Clone)]
pub struct BuildingInfo {
    pub entity: Entity,
    pub grid: (u32, u32),
    pub position: Vec3,
    pub scale: Vec3,
    pub target_height: f32,
}

impl TestCityscape {
    pub fn generation_state(&self) -> &GenerationState {
        self.app.world().resource::<GenerationState>()
    }

    pub fn building_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<Building>>()
            .iter(world)
            .count()
    }

    pub fn road_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<Road>>()
            .iter(world)
            .count()
    }

    pub fn animator_count(&mut self) -> usize {
        let world = self.app.world_mut();
        world.query::<&HeightAnimator>().iter(world).count()
    }

    /// All buildings, sorted row-major by grid cell.
    pub fn buildings(&mut self) -> Vec<BuildingInfo> {
        let world = self.app.world_mut();
        let mut out: Vec<BuildingInfo> = world
            .query::<(Entity, &Building, &Transform)>()
            .iter(world)
            .map(|(entity, b, t)| BuildingInfo {
                entity,
                grid: (b.grid_x, b.grid_z),
                position: t.translation,
                scale: t.scale,
                target_height: b.target_height,
            })
            .collect();
        out.sort_by_key(|b| b.grid);
        out
    }

    /// Look up a building by grid cell.
    pub fn building_at(&mut self, x: u32, z: u32) -> Option<BuildingInfo> {
        self.buildings().into_iter().find(|b| b.grid == (x, z))
    }

    /// Road positions and axes, in no particular order.
    pub fn roads(&mut self) -> Vec<(Vec3, RoadAxis, Quat)> {
        let world = self.app.world_mut();
        world
            .query::<(&Road, &Transform)>()
            .iter(world)
            .map(|(r, t)| (t.translation, r.axis, t.rotation))
            .collect()
    }

    pub fn city_root(&mut self) -> Entity {
        let world = self.app.world_mut();
        world
            .query_filtered::<Entity, With<CityRoot>>()
            .single(world)
    }

    /// Number of direct children of the city root.
    pub fn root_child_count(&mut self) -> usize {
        let root = self.city_root();
        self.app
            .world()
            .get::<Children>(root)
            .map_or(0, |children| children.len())
    }
}
