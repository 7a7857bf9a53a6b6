//! Pop-and-settle height animation for freshly placed buildings.
//!
//! Each building gets its own animator entity holding a [`PopSettle`] tween
//! and a plain `Entity` reference to the building. The animator does not own
//! the building: if the building is despawned (e.g. by a regeneration) the
//! animator notices on its next tick and despawns itself without touching
//! anything else.

use bevy::prelude::*;

use crate::generation::Building;

/// Overshoot factor applied to the target height during the pop phase.
pub const POP_FACTOR: f32 = 1.2;
/// Seconds spent growing to the pop height.
pub const POP_DURATION: f32 = 0.1;
/// Seconds spent settling from the pop height back to the target.
pub const SETTLE_DURATION: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenPhase {
    Pop,
    Settle,
    Done,
}

/// Two-phase height tween: initial → target * 1.2 → target.
///
/// Every call to [`PopSettle::step`] is one frame. The height for a frame is
/// sampled at the elapsed time *before* the frame delta is added, so the
/// first sample of each phase is exactly the phase start value.
#[derive(Debug, Clone, PartialEq)]
pub struct PopSettle {
    initial: f32,
    target: f32,
    phase: TweenPhase,
    elapsed: f32,
}

impl PopSettle {
    pub fn new(initial: f32, target: f32) -> Self {
        Self {
            initial,
            target,
            phase: TweenPhase::Pop,
            elapsed: 0.0,
        }
    }

    pub fn pop_height(&self) -> f32 {
        self.target * POP_FACTOR
    }

    pub fn phase(&self) -> TweenPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == TweenPhase::Done
    }

    /// Advance by one frame of `dt` seconds and return the height to apply.
    pub fn step(&mut self, dt: f32) -> f32 {
        loop {
            match self.phase {
                TweenPhase::Pop => {
                    if self.elapsed < POP_DURATION {
                        let t = (self.elapsed / POP_DURATION).clamp(0.0, 1.0);
                        self.elapsed += dt;
                        return lerp(self.initial, self.pop_height(), t);
                    }
                    self.phase = TweenPhase::Settle;
                    self.elapsed = 0.0;
                }
                TweenPhase::Settle => {
                    if self.elapsed < SETTLE_DURATION {
                        let t = (self.elapsed / SETTLE_DURATION).clamp(0.0, 1.0);
                        self.elapsed += dt;
                        return lerp(self.pop_height(), self.target, t);
                    }
                    self.phase = TweenPhase::Done;
                }
                // Exact target, no interpolation drift.
                TweenPhase::Done => return self.target,
            }
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Animator task for one building.
#[derive(Component, Debug, Clone)]
pub struct HeightAnimator {
    /// The building this animator drives. May already be despawned.
    pub target: Entity,
    pub tween: PopSettle,
}

impl HeightAnimator {
    pub fn new(target: Entity, initial_height: f32, target_height: f32) -> Self {
        Self {
            target,
            tween: PopSettle::new(initial_height, target_height),
        }
    }
}

/// Step every animator one frame and write the height into the building's
/// Y scale. X and Z scale stay at 1.
pub fn animate_building_heights(
    mut commands: Commands,
    time: Res<Time>,
    mut animators: Query<(Entity, &mut HeightAnimator)>,
    mut buildings: Query<&mut Transform, With<Building>>,
) {
    let dt = time.delta_secs();
    for (anim_entity, mut anim) in &mut animators {
        let Ok(mut transform) = buildings.get_mut(anim.target) else {
            // Building is gone: stop quietly.
            commands.entity(anim_entity).despawn();
            continue;
        };

        let height = anim.tween.step(dt);
        transform.scale = Vec3::new(1.0, height, 1.0);

        if anim.tween.is_finished() {
            commands.entity(anim_entity).despawn();
        }
    }
}
