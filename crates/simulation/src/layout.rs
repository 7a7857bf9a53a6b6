//! Grid layout: where buildings and roads go.
//!
//! [`LayoutCells`] walks the grid lazily in row-major order (outer loop over
//! columns along X, inner loop over rows along Z) and yields one
//! [`CellPlacement`] per cell. It has no ECS dependencies so the ordering and
//! positions can be checked in isolation.

use bevy::math::{Quat, Vec3};

use crate::config::CityscapeConfig;

/// Which grid axis a road segment runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadAxis {
    /// Connects a cell to its +X neighbour. Identity rotation.
    AlongX,
    /// Connects a cell to its +Z neighbour. Rotated 90 degrees about Y.
    AlongZ,
}

impl RoadAxis {
    pub fn rotation(self) -> Quat {
        match self {
            RoadAxis::AlongX => Quat::IDENTITY,
            RoadAxis::AlongZ => Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        }
    }
}

/// A road segment to place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadPlacement {
    pub position: Vec3,
    pub axis: RoadAxis,
}

/// Everything placed for one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPlacement {
    /// Column index (X).
    pub x: u32,
    /// Row index (Z).
    pub z: u32,
    /// Building footprint centre on the ground plane.
    pub building: Vec3,
    /// Zero, one or two roads towards the +X and +Z neighbours.
    pub roads: Vec<RoadPlacement>,
}

/// Lazy row-major iterator over the grid cells of a config.
#[derive(Debug, Clone)]
pub struct LayoutCells {
    width: u32,
    depth: u32,
    spacing: f32,
    next: u32,
}

/// Start a layout walk for the given config.
pub fn layout_cells(config: &CityscapeConfig) -> LayoutCells {
    LayoutCells {
        width: config.grid_width,
        depth: config.grid_depth,
        spacing: config.spacing,
        next: 0,
    }
}

impl LayoutCells {
    fn total(&self) -> u32 {
        self.width.saturating_mul(self.depth)
    }

    /// Build the placement for cell (x, z).
    pub fn placement(&self, x: u32, z: u32) -> CellPlacement {
        let s = self.spacing;
        let building = Vec3::new(x as f32 * s, 0.0, z as f32 * s);

        let mut roads = Vec::with_capacity(2);
        if x + 1 < self.width {
            roads.push(RoadPlacement {
                position: Vec3::new(building.x + s / 2.0, 0.0, building.z),
                axis: RoadAxis::AlongX,
            });
        }
        if z + 1 < self.depth {
            roads.push(RoadPlacement {
                position: Vec3::new(building.x, 0.0, building.z + s / 2.0),
                axis: RoadAxis::AlongZ,
            });
        }

        CellPlacement {
            x,
            z,
            building,
            roads,
        }
    }
}

impl Iterator for LayoutCells {
    type Item = CellPlacement;

    fn next(&mut self) -> Option<CellPlacement> {
        if self.next >= self.total() {
            return None;
        }
        let x = self.next / self.depth;
        let z = self.next % self.depth;
        self.next += 1;
        Some(self.placement(x, z))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LayoutCells {}
