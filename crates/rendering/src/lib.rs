use bevy::prelude::*;

pub mod camera;
pub mod city_render;
pub mod hud;
pub mod input;

use simulation::simulation_sets::CityscapeSet;

/// Visuals and input for the cityscape: camera, lighting, meshes for the
/// simulation's buildings and roads, the regenerate key and a status line.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                camera::setup_camera,
                setup_lighting,
                city_render::setup_city_assets,
                city_render::spawn_ground,
                hud::spawn_hud,
            ),
        )
        // Camera controls
        .add_systems(
            Update,
            (
                camera::camera_orbit_drag,
                camera::camera_rotate_keyboard,
                camera::camera_zoom,
            )
                .chain(),
        )
        .add_systems(
            Update,
            input::keyboard_regenerate.in_set(CityscapeSet::Input),
        )
        .add_systems(
            Update,
            (camera::reframe_on_new_run, camera::apply_orbit_camera)
                .chain()
                .after(CityscapeSet::Generation)
                .after(camera::camera_zoom),
        )
        .add_systems(
            Update,
            (
                city_render::attach_root_visibility,
                city_render::refresh_run_assets,
                city_render::attach_building_meshes,
                city_render::attach_road_meshes,
                hud::update_hud,
            )
                .chain()
                .after(CityscapeSet::Generation),
        );
    }
}

fn setup_lighting(mut commands: Commands) {
    // Ambient light for baseline illumination
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.9, 0.9, 1.0),
        brightness: 300.0,
    });

    // Directional light (sun) angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3, // 60 degrees down
            std::f32::consts::FRAC_PI_6,  // slight rotation
            0.0,
        )),
    ));
}
