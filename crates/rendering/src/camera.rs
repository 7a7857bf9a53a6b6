//! Orbit camera that frames the generated grid.
//!
//! The camera looks at the centre of the most recent run's grid. When a
//! regeneration changes the grid extent the focus and zoom range follow the
//! new layout; yaw and pitch chosen by the user are kept.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use simulation::config::{CityscapeConfig, MAX_TARGET_HEIGHT};
use simulation::generation::GenerationState;

const ZOOM_SPEED: f32 = 0.15;
const MIN_DISTANCE: f32 = 5.0;
/// How far past the framing distance the user may zoom out.
const ZOOM_OUT_FACTOR: f32 = 3.0;
const MIN_PITCH: f32 = 5.0 * std::f32::consts::PI / 180.0; // near street level
const MAX_PITCH: f32 = 80.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Radians per second for Q/E rotation.
const ROTATE_SPEED: f32 = 1.2;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Grid centre the camera looks at
    pub focus: Vec3,
    pub yaw: f32,
    /// Elevation angle, kept within `[MIN_PITCH, MAX_PITCH]`
    pub pitch: f32,
    pub distance: f32,
    /// Zoom-out limit for the current grid.
    pub max_distance: f32,
}

impl OrbitCamera {
    /// Frame the whole grid: look at its centre from far enough back that
    /// the tallest popped building still fits.
    pub fn framing(config: &CityscapeConfig) -> Self {
        let distance = framing_distance(config);
        Self {
            focus: config.grid_center(),
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 40.0_f32.to_radians(),
            distance,
            max_distance: distance * ZOOM_OUT_FACTOR,
        }
    }

    /// Camera position for the current orbit.
    pub fn eye(&self) -> Vec3 {
        let horizontal = self.distance * self.pitch.cos();
        self.focus
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.distance * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.eye()).looking_at(self.focus, Vec3::Y)
    }

    pub fn orbit_by(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Zoom by scroll `steps`; positive steps move closer.
    pub fn zoom_by(&mut self, steps: f32) {
        let factor = (1.0 - steps * ZOOM_SPEED).max(0.1);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, self.max_distance);
    }

    /// Move the focus and zoom range to `layout`'s grid. Returns false when
    /// the grid extent is unchanged and nothing was touched.
    pub fn reframe(&mut self, layout: &CityscapeConfig) -> bool {
        let framed = Self::framing(layout);
        if framed.focus == self.focus && framed.max_distance == self.max_distance {
            return false;
        }
        self.focus = framed.focus;
        self.distance = framed.distance;
        self.max_distance = framed.max_distance;
        true
    }
}

fn framing_distance(config: &CityscapeConfig) -> f32 {
    let span_x = config.grid_width as f32 * config.spacing;
    let span_z = config.grid_depth as f32 * config.spacing;
    let extent = span_x.max(span_z).max(MAX_TARGET_HEIGHT);
    (extent * 1.6).max(MIN_DISTANCE)
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands, config: Res<CityscapeConfig>) {
    let orbit = OrbitCamera::framing(&config);
    commands.spawn((Camera3d::default(), orbit.transform()));
    commands.insert_resource(orbit);
    commands.init_resource::<CameraOrbitDrag>();
}

/// Follow the grid of each new run.
pub fn reframe_on_new_run(
    state: Res<GenerationState>,
    mut seen_runs: Local<u32>,
    mut orbit: ResMut<OrbitCamera>,
) {
    if state.runs_started == *seen_runs {
        return;
    }
    *seen_runs = state.runs_started;
    // Only write through when something moved, so change detection stays
    // quiet on regenerations of the same grid.
    if orbit.bypass_change_detection().reframe(&state.layout) {
        orbit.set_changed();
    }
}

pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let Ok(mut transform) = cameras.get_single_mut() else {
        return;
    };
    *transform = orbit.transform();
}

/// Right-mouse drag orbits: horizontal moves yaw, vertical moves pitch.
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let cursor = window.cursor_position();

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }
    match (buttons.just_pressed(MouseButton::Right), cursor) {
        (true, Some(pos)) => {
            drag.dragging = true;
            drag.last_pos = pos;
        }
        (false, Some(pos)) if drag.dragging => {
            let delta = pos - drag.last_pos;
            if delta != Vec2::ZERO {
                orbit.orbit_by(delta.x * ORBIT_SENSITIVITY, -delta.y * ORBIT_SENSITIVITY);
            }
            drag.last_pos = pos;
        }
        _ => {}
    }
}

/// Q/E: rotate around the grid centre.
pub fn camera_rotate_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let dir = keys.pressed(KeyCode::KeyE) as i8 - keys.pressed(KeyCode::KeyQ) as i8;
    if dir != 0 {
        orbit.orbit_by(f32::from(dir) * ROTATE_SPEED * time.delta_secs(), 0.0);
    }
}

pub fn camera_zoom(mut scroll: EventReader<MouseWheel>, mut orbit: ResMut<OrbitCamera>) {
    for evt in scroll.read() {
        let steps = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        orbit.zoom_by(steps);
    }
}
