//! Placement validation
//!
//! Decides whether a proposed item placement is legal and reports which
//! items it would collide with. Pure computation: committing a placement
//! is the mutation layer's job.

use std::collections::HashSet;
use serde::{Deserialize, Serialize};

use crate::items::{InstanceId, ItemCatalog, ItemInstance};
use super::grid::{occupied_cells, within_bounds, GridCell, Rotation};

/// The full placement region of an item: origin, native footprint, rotation.
/// Conflicts are reported as whole regions so a caller can highlight the
/// entire blocking item, not just the overlapping cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedRegion {
    pub x: i32,
    pub y: i32,
    pub width: u8,
    pub height: u8,
    pub rotation: Rotation,
}

/// Result of a placement check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementCheck {
    pub can_place: bool,
    /// Regions of every existing item the candidate would overlap,
    /// in container iteration order
    pub conflicts: Vec<PlacedRegion>,
}

impl PlacementCheck {
    fn rejected() -> Self {
        Self {
            can_place: false,
            conflicts: Vec::new(),
        }
    }
}

/// Check whether `candidate` can be placed at `target` with `rotation`
/// inside a `grid_width` x `grid_height` container holding `existing`.
///
/// An unresolvable candidate definition fails closed. Bounds violations
/// reject immediately with no conflicts. `exclude` lets an item being
/// repositioned ignore its own current placement.
pub fn check_placement(
    catalog: &ItemCatalog,
    existing: &[ItemInstance],
    candidate: &ItemInstance,
    target: GridCell,
    rotation: Rotation,
    grid_width: u8,
    grid_height: u8,
    exclude: Option<InstanceId>,
) -> PlacementCheck {
    let Some(definition) = catalog.get(&candidate.definition_id) else {
        return PlacementCheck::rejected();
    };

    let (width, height) = definition.footprint();

    if !within_bounds(target, width, height, grid_width, grid_height, rotation) {
        return PlacementCheck::rejected();
    }

    let candidate_cells: HashSet<GridCell> =
        occupied_cells(target, width, height, rotation).into_iter().collect();

    let mut conflicts = Vec::new();

    for item in existing {
        if Some(item.id) == exclude {
            continue;
        }
        let Some(origin) = item.origin else {
            continue;
        };
        let Some(def) = catalog.get(&item.definition_id) else {
            continue;
        };

        let (w, h) = def.footprint();
        let overlaps = occupied_cells(origin, w, h, item.rotation)
            .iter()
            .any(|cell| candidate_cells.contains(cell));

        if overlaps {
            conflicts.push(PlacedRegion {
                x: origin.x,
                y: origin.y,
                width: w,
                height: h,
                rotation: item.rotation,
            });
        }
    }

    PlacementCheck {
        can_place: conflicts.is_empty(),
        conflicts,
    }
}

/// Convenience wrapper: just the yes/no answer
pub fn can_place(
    catalog: &ItemCatalog,
    existing: &[ItemInstance],
    candidate: &ItemInstance,
    target: GridCell,
    rotation: Rotation,
    grid_width: u8,
    grid_height: u8,
    exclude: Option<InstanceId>,
) -> bool {
    check_placement(
        catalog, existing, candidate, target, rotation, grid_width, grid_height, exclude,
    )
    .can_place
}
