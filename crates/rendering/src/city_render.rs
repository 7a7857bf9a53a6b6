//! Meshes and materials for generated buildings and roads.
//!
//! The simulation only spawns entities with a `Transform`; this module
//! attaches `Mesh3d`/`MeshMaterial3d` to new `Building` and `Road` entities.
//! The building mesh has its base at y = 0, so the simulation's Y scale
//! grows buildings upward from the ground.
//!
//! Spacing-dependent assets (road mesh, ground plane) follow the layout a run
//! started from, not the live config, so every road of one run shares a mesh.

use bevy::prelude::*;

use simulation::config::{CityscapeConfig, MAX_TARGET_HEIGHT, MIN_TARGET_HEIGHT};
use simulation::generation::{Building, GenerationState, Road};
use simulation::world_init::CityRoot;

/// Building footprint edge length in world units.
const BUILDING_FOOTPRINT: f32 = 1.0;
const ROAD_WIDTH: f32 = 0.6;
const ROAD_THICKNESS: f32 = 0.02;
/// Number of building tints, from short to tall.
const BUILDING_SHADES: usize = 5;

/// Shared mesh and material handles, created once at startup.
#[derive(Resource, Clone)]
pub struct CityAssets {
    pub building_mesh: Handle<Mesh>,
    pub building_materials: Vec<Handle<StandardMaterial>>,
    pub road_mesh: Handle<Mesh>,
    pub road_material: Handle<StandardMaterial>,
    /// Spacing the road mesh was built for.
    pub road_spacing: f32,
}

/// Unit cuboid with its base on the ground plane.
pub(crate) fn build_building_mesh() -> Mesh {
    Mesh::from(Cuboid::new(BUILDING_FOOTPRINT, 1.0, BUILDING_FOOTPRINT))
        .translated_by(Vec3::new(0.0, 0.5, 0.0))
}

/// Flat strip spanning `spacing` along X. Roads along Z reuse it rotated.
pub(crate) fn build_road_mesh(spacing: f32) -> Mesh {
    Mesh::from(Cuboid::new(spacing, ROAD_THICKNESS, ROAD_WIDTH))
        .translated_by(Vec3::new(0.0, ROAD_THICKNESS * 0.5, 0.0))
}

/// Which tint a building of `target_height` gets.
pub(crate) fn shade_index(target_height: f32) -> usize {
    let t = ((target_height - MIN_TARGET_HEIGHT) / (MAX_TARGET_HEIGHT - MIN_TARGET_HEIGHT))
        .clamp(0.0, 1.0);
    ((t * BUILDING_SHADES as f32) as usize).min(BUILDING_SHADES - 1)
}

pub fn setup_city_assets(
    mut commands: Commands,
    config: Res<CityscapeConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let building_materials = (0..BUILDING_SHADES)
        .map(|i| {
            // Cool grey for low blocks, warmer and lighter for towers
            let t = i as f32 / (BUILDING_SHADES - 1) as f32;
            materials.add(StandardMaterial {
                base_color: Color::srgb(0.55 + 0.35 * t, 0.6 + 0.25 * t, 0.7 + 0.05 * t),
                perceptual_roughness: 0.7,
                ..default()
            })
        })
        .collect();

    let road_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.18, 0.18, 0.2),
        perceptual_roughness: 0.95,
        ..default()
    });

    commands.insert_resource(CityAssets {
        building_mesh: meshes.add(build_building_mesh()),
        building_materials,
        road_mesh: meshes.add(build_road_mesh(config.spacing)),
        road_material,
        road_spacing: config.spacing,
    });
}

/// Ground plane under the grid. Not parented to the city root, so it
/// survives regeneration.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub half_size: Vec2,
}

impl Ground {
    /// Plane covering `layout`'s grid plus a two-cell margin.
    pub fn covering(layout: &CityscapeConfig) -> Self {
        let center = layout.grid_center();
        let margin = layout.spacing * 2.0;
        Self {
            half_size: Vec2::new(center.x + margin, center.z + margin),
        }
    }

    fn transform(layout: &CityscapeConfig) -> Transform {
        Transform::from_translation(layout.grid_center() - Vec3::Y * 0.01)
    }
}

pub fn spawn_ground(
    mut commands: Commands,
    config: Res<CityscapeConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground = Ground::covering(&config);
    commands.spawn((
        ground,
        Mesh3d(meshes.add(Plane3d::new(Vec3::Y, ground.half_size))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.32, 0.42, 0.3),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Ground::transform(&config),
    ));
}

/// The root needs visibility components so its children render.
pub fn attach_root_visibility(
    mut commands: Commands,
    roots: Query<Entity, (With<CityRoot>, Without<Visibility>)>,
) {
    for entity in &roots {
        commands.entity(entity).insert(Visibility::default());
    }
}

/// When a run starts, resize the road mesh and the ground to the layout that
/// run snapshotted. Config edits made mid-run are not seen here.
pub fn refresh_run_assets(
    state: Res<GenerationState>,
    mut seen_runs: Local<u32>,
    mut assets: ResMut<CityAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut grounds: Query<(&mut Ground, &mut Mesh3d, &mut Transform)>,
) {
    if state.runs_started == *seen_runs {
        return;
    }
    *seen_runs = state.runs_started;
    let layout = &state.layout;

    if assets.road_spacing != layout.spacing {
        assets.road_mesh = meshes.add(build_road_mesh(layout.spacing));
        assets.road_spacing = layout.spacing;
    }

    let covering = Ground::covering(layout);
    for (mut ground, mut mesh, mut transform) in &mut grounds {
        if *ground == covering {
            continue;
        }
        *ground = covering;
        mesh.0 = meshes.add(Plane3d::new(Vec3::Y, covering.half_size));
        *transform = Ground::transform(layout);
    }
}

pub fn attach_building_meshes(
    mut commands: Commands,
    assets: Res<CityAssets>,
    buildings: Query<(Entity, &Building), Added<Building>>,
) {
    for (entity, building) in &buildings {
        let material = assets.building_materials[shade_index(building.target_height)].clone();
        commands.entity(entity).insert((
            Mesh3d(assets.building_mesh.clone()),
            MeshMaterial3d(material),
        ));
    }
}

pub fn attach_road_meshes(
    mut commands: Commands,
    assets: Res<CityAssets>,
    roads: Query<Entity, Added<Road>>,
) {
    for entity in &roads {
        commands.entity(entity).insert((
            Mesh3d(assets.road_mesh.clone()),
            MeshMaterial3d(assets.road_material.clone()),
        ));
    }
}
