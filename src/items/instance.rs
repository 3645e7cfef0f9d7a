//! Item instances
//!
//! A concrete piece of gear: references its catalog definition and carries
//! runtime state (stack count, grid placement, rotation, equip tags, and
//! any nested items when the instance acts as a sub-container).

use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Deserialize, Serialize};

use crate::inventory::grid::{GridCell, Rotation};
use super::catalog::ItemCatalog;
use super::definition::{DefinitionId, HitLocation};

/// Unique instance ID for tracking
pub type InstanceId = u64;

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

/// Get the next unique instance ID
pub fn next_instance_id() -> InstanceId {
    NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed)
}

/// A placed or carried item.
///
/// An instance always lives in exactly one container's item list.
/// `equipped_location` and `hotbar_slot` are annotations layered on top
/// of that placement, not alternative homes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: InstanceId,
    pub definition_id: DefinitionId,
    /// Stack count
    pub quantity: u32,
    /// Grid origin, present only while placed in a container grid
    pub origin: Option<GridCell>,
    pub rotation: Rotation,
    /// Body location this item is equipped at, if any
    pub equipped_location: Option<HitLocation>,
    /// Quick-access slot (0-9), if assigned
    pub hotbar_slot: Option<u8>,
    /// Nested items, when this instance acts as a sub-container
    pub contained: Vec<ItemInstance>,
}

impl ItemInstance {
    /// Create an unplaced instance of a definition with a fresh id
    pub fn new(definition_id: impl Into<DefinitionId>) -> Self {
        Self {
            id: next_instance_id(),
            definition_id: definition_id.into(),
            quantity: 1,
            origin: None,
            rotation: Rotation::Deg0,
            equipped_location: None,
            hotbar_slot: None,
            contained: Vec::new(),
        }
    }

    /// Set the grid origin (builder style, for fixtures and tests)
    pub fn placed_at(mut self, x: i32, y: i32) -> Self {
        self.origin = Some(GridCell::new(x, y));
        self
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Whether this instance currently occupies grid cells
    pub fn has_grid_placement(&self) -> bool {
        self.origin.is_some()
    }

    /// Total weight in lbs: own definition weight times stack count, plus
    /// everything nested inside. An unresolvable definition weighs nothing.
    pub fn total_weight(&self, catalog: &ItemCatalog) -> f32 {
        let own = catalog
            .get(&self.definition_id)
            .map(|def| def.weight * self.quantity as f32)
            .unwrap_or(0.0);

        let nested: f32 = self
            .contained
            .iter()
            .map(|item| item.total_weight(catalog))
            .sum();

        own + nested
    }
}
