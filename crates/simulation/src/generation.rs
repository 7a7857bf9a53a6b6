//! Layout wave: places one grid cell per step with a fixed delay between
//! cells, so the city fills in column by column.
//!
//! The running sequence is a [`WaveRun`] stored in [`GenerationState`].
//! Removing it from the state cancels the wave at its current suspension
//! point; animators already spawned keep running.

use bevy::prelude::*;

use crate::city_rng::CityRng;
use crate::config::{CityscapeConfig, INITIAL_BUILDING_HEIGHT};
use crate::height_anim::HeightAnimator;
use crate::layout::{layout_cells, CellPlacement, LayoutCells, RoadAxis};
use crate::world_init::CityRoot;

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// A placed building. Its current height lives in `Transform::scale.y`.
#[derive(Component, Debug, Clone)]
pub struct Building {
    pub grid_x: u32,
    pub grid_z: u32,
    /// Height the building settles at once its animation completes.
    pub target_height: f32,
}

/// A placed road segment. Never mutated after spawning.
#[derive(Component, Debug, Clone, Copy)]
pub struct Road {
    pub axis: RoadAxis,
}

// ---------------------------------------------------------------------------
// WaveRun
// ---------------------------------------------------------------------------

/// One generation sequence, advanced once per frame.
///
/// The first cell is emitted on the first step. After each cell the run
/// waits `wave_speed` seconds before resuming; at most one cell is emitted
/// per step. After the last cell it waits once more and then finishes.
#[derive(Debug, Clone)]
pub struct WaveRun {
    cells: LayoutCells,
    wave_speed: f32,
    /// Seconds left before the run resumes.
    cooldown: f32,
    emitted: usize,
    total: usize,
    finished: bool,
}

impl WaveRun {
    pub fn new(config: &CityscapeConfig) -> Self {
        let cells = layout_cells(config);
        let total = cells.len();
        Self {
            cells,
            wave_speed: config.wave_speed,
            cooldown: 0.0,
            emitted: 0,
            total,
            finished: false,
        }
    }

    /// Step the run by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Option<CellPlacement> {
        if self.finished {
            return None;
        }
        self.cooldown -= dt;
        if self.cooldown > 0.0 {
            return None;
        }
        match self.cells.next() {
            Some(cell) => {
                self.cooldown = self.wave_speed;
                self.emitted += 1;
                Some(cell)
            }
            None => {
                self.finished = true;
                None
            }
        }
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

// ---------------------------------------------------------------------------
// GenerationState
// ---------------------------------------------------------------------------

/// In-progress flag plus the handle to the running wave.
#[derive(Resource, Debug, Default)]
pub struct GenerationState {
    /// True from the moment a run starts until its last cell has been
    /// processed. Animations may still be running after it clears.
    pub in_progress: bool,
    pub active: Option<WaveRun>,
    pub runs_started: u32,
    /// Config the most recent run started from. Stays valid after the run
    /// finishes and until the next one starts.
    pub layout: CityscapeConfig,
}

impl GenerationState {
    /// Begin a new run from a snapshot of `config`.
    pub fn start(&mut self, config: &CityscapeConfig) {
        self.active = Some(WaveRun::new(config));
        self.layout = config.clone();
        self.in_progress = true;
        self.runs_started += 1;
        info!(
            "Cityscape generation #{} started: {}x{} grid, {} cells",
            self.runs_started,
            config.grid_width,
            config.grid_depth,
            config.cell_count()
        );
    }

    /// Drop the running wave, if any. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        self.in_progress = false;
        self.active.take().is_some()
    }

    /// `(emitted, total)` for the running wave.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.active.as_ref().map(|run| (run.emitted(), run.total()))
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

/// Advance the active wave and spawn whatever cell comes due this frame.
pub fn advance_generation(
    mut commands: Commands,
    time: Res<Time>,
    mut state: ResMut<GenerationState>,
    mut rng: ResMut<CityRng>,
    roots: Query<Entity, With<CityRoot>>,
) {
    let Ok(root) = roots.get_single() else {
        return;
    };
    let dt = time.delta_secs();

    let finished = {
        let Some(run) = state.active.as_mut() else {
            return;
        };
        if let Some(cell) = run.advance(dt) {
            let target_height = rng.target_height();
            spawn_cell(&mut commands, root, &cell, target_height);
        }
        run.is_finished().then(|| run.emitted())
    };

    if let Some(cells) = finished {
        state.active = None;
        state.in_progress = false;
        info!("Cityscape generation #{} finished: {cells} cells", state.runs_started);
    }
}

/// Spawn the building, its animator and the roads for one cell.
pub fn spawn_cell(
    commands: &mut Commands,
    root: Entity,
    cell: &CellPlacement,
    target_height: f32,
) -> Entity {
    let building = commands
        .spawn((
            Building {
                grid_x: cell.x,
                grid_z: cell.z,
                target_height,
            },
            Name::new(format!("Building ({}, {})", cell.x, cell.z)),
            Transform::from_translation(cell.building).with_scale(Vec3::new(
                1.0,
                INITIAL_BUILDING_HEIGHT,
                1.0,
            )),
        ))
        .set_parent(root)
        .id();

    commands.spawn(HeightAnimator::new(
        building,
        INITIAL_BUILDING_HEIGHT,
        target_height,
    ));

    for road in &cell.roads {
        commands
            .spawn((
                Road { axis: road.axis },
                Name::new("Road"),
                Transform::from_translation(road.position).with_rotation(road.axis.rotation()),
            ))
            .set_parent(root);
    }

    debug!(
        "Placed cell ({}, {}): target height {:.2}, {} roads",
        cell.x,
        cell.z,
        target_height,
        cell.roads.len()
    );
    building
}
