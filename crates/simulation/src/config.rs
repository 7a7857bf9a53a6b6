//! Grid configuration for a cityscape generation run.
//!
//! [`CityscapeConfig`] is a Bevy resource holding the tunables for the layout
//! wave. A generation run snapshots the resource when it starts, so edits made
//! while a wave is in flight only apply to the next run.

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config_error::ConfigError;

pub const DEFAULT_GRID_WIDTH: u32 = 10;
pub const DEFAULT_GRID_DEPTH: u32 = 10;
pub const DEFAULT_SPACING: f32 = 3.0;
/// Seconds between two consecutive grid cells.
pub const DEFAULT_WAVE_SPEED: f32 = 0.5;
pub const DEFAULT_SEED: u64 = 42;

/// Y scale every building starts from before its pop animation.
pub const INITIAL_BUILDING_HEIGHT: f32 = 0.1;
/// Target heights are drawn from `[MIN_TARGET_HEIGHT, MAX_TARGET_HEIGHT)`.
pub const MIN_TARGET_HEIGHT: f32 = 1.0;
pub const MAX_TARGET_HEIGHT: f32 = 10.0;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "CITYSCAPE_CONFIG";

/// Tunables for the layout wave.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityscapeConfig {
    /// Number of columns (outer loop, along X).
    pub grid_width: u32,
    /// Number of rows (inner loop, along Z).
    pub grid_depth: u32,
    /// Distance between neighbouring building centres in world units.
    pub spacing: f32,
    /// Delay between cells in seconds.
    pub wave_speed: f32,
    /// Seed for the building height RNG.
    pub seed: u64,
}

impl Default for CityscapeConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_depth: DEFAULT_GRID_DEPTH,
            spacing: DEFAULT_SPACING,
            wave_speed: DEFAULT_WAVE_SPEED,
            seed: DEFAULT_SEED,
        }
    }
}

impl CityscapeConfig {
    /// Check the invariants the layout generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 {
            return Err(ConfigError::Invalid("grid_width must be at least 1".into()));
        }
        if self.grid_depth == 0 {
            return Err(ConfigError::Invalid("grid_depth must be at least 1".into()));
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "spacing must be a positive finite number, got {}",
                self.spacing
            )));
        }
        if !self.wave_speed.is_finite() || self.wave_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "wave_speed must be a non-negative finite number, got {}",
                self.wave_speed
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from a JSON string. Missing fields take
    /// their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by `CITYSCAPE_CONFIG`, falling back to defaults
    /// when the variable is unset or the file cannot be used.
    pub fn from_env_or_default() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded cityscape config from {path}");
                config
            }
            Err(e) => {
                warn!("Cityscape config {path}: {e}, falling back to defaults");
                Self::default()
            }
        }
    }

    /// Total number of cells a run will visit.
    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_depth as usize
    }

    /// Number of road segments a full run places.
    pub fn road_count(&self) -> usize {
        let w = self.grid_width as usize;
        let d = self.grid_depth as usize;
        w.saturating_sub(1) * d + w * d.saturating_sub(1)
    }

    /// World-space centre of the grid footprint, used to aim the camera.
    pub fn grid_center(&self) -> Vec3 {
        let span_x = self.grid_width.saturating_sub(1) as f32 * self.spacing;
        let span_z = self.grid_depth.saturating_sub(1) as f32 * self.spacing;
        Vec3::new(span_x * 0.5, 0.0, span_z * 0.5)
    }
}
