//! Grid geometry
//!
//! Rotation-aware footprint and cell-occupancy math. Every collision and
//! bounds decision in the crate is built from these functions.

use serde::{Deserialize, Serialize};

/// A single cell coordinate in a container grid.
///
/// Signed so that off-grid proposals (negative origins) are representable
/// and rejected by bounds checking rather than by integer conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned item rotation in 90° steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Normalize an arbitrary degree value to a 90° step.
    /// Negative inputs wrap (e.g. -90 becomes 270); values that are not
    /// a right-angle multiple collapse to the unrotated orientation.
    pub fn from_degrees(degrees: i32) -> Self {
        match ((degrees % 360) + 360) % 360 {
            90 => Rotation::Deg90,
            180 => Rotation::Deg180,
            270 => Rotation::Deg270,
            _ => Rotation::Deg0,
        }
    }

    pub fn degrees(&self) -> i32 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Next step clockwise
    pub fn cw(&self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg180,
            Rotation::Deg180 => Rotation::Deg270,
            Rotation::Deg270 => Rotation::Deg0,
        }
    }

    /// Next step counter-clockwise
    pub fn ccw(&self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg270,
            Rotation::Deg90 => Rotation::Deg0,
            Rotation::Deg180 => Rotation::Deg90,
            Rotation::Deg270 => Rotation::Deg180,
        }
    }

    /// True for the two orientations that swap width and height
    pub fn swaps_axes(&self) -> bool {
        matches!(self, Rotation::Deg90 | Rotation::Deg270)
    }
}

/// Get the effective footprint of an item after rotation
pub fn rotated_footprint(width: u8, height: u8, rotation: Rotation) -> (u8, u8) {
    if rotation.swaps_axes() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Get every grid cell an item occupies at an origin and rotation.
/// Produces exactly `width * height` distinct cells in row-major order.
pub fn occupied_cells(origin: GridCell, width: u8, height: u8, rotation: Rotation) -> Vec<GridCell> {
    let (w, h) = rotated_footprint(width, height, rotation);
    let mut cells = Vec::with_capacity(w as usize * h as usize);
    for dy in 0..h as i32 {
        for dx in 0..w as i32 {
            cells.push(GridCell::new(origin.x + dx, origin.y + dy));
        }
    }
    cells
}

/// Check that an item's rotated footprint lies fully inside the grid.
/// Negative origins always fail, independent of collision state.
pub fn within_bounds(
    origin: GridCell,
    width: u8,
    height: u8,
    grid_width: u8,
    grid_height: u8,
    rotation: Rotation,
) -> bool {
    let (w, h) = rotated_footprint(width, height, rotation);
    origin.x >= 0
        && origin.y >= 0
        && origin.x + w as i32 <= grid_width as i32
        && origin.y + h as i32 <= grid_height as i32
}
