//! Containers
//!
//! Grid-addressable storage regions (vests, backpacks, vehicle trunks)
//! plus the weight-capacity and size-fit rules for nested containers.

use serde::{Deserialize, Serialize};

use crate::items::{InstanceId, ItemCatalog, ItemDefinition, ItemInstance};
use super::grid::{occupied_cells, within_bounds, GridCell, Rotation};
use super::placement::{check_placement, PlacementCheck};

/// What kind of storage a container represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ContainerType {
    /// Worn on the body (vest, rig)
    #[default]
    Person,
    Backpack,
    Vehicle,
    Locker,
    Other,
}

impl ContainerType {
    pub fn name(&self) -> &'static str {
        match self {
            ContainerType::Person => "Person",
            ContainerType::Backpack => "Backpack",
            ContainerType::Vehicle => "Vehicle",
            ContainerType::Locker => "Locker",
            ContainerType::Other => "Other",
        }
    }
}

/// A grid-based storage region owned by a character.
///
/// Invariant: the occupied-cell sets of all placed items are pairwise
/// disjoint and lie inside the grid. Every successful mutation preserves
/// this; `occupancy_is_valid` checks it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub grid_width: u8,
    pub grid_height: u8,
    pub kind: ContainerType,
    /// Contained items, in insertion order
    pub items: Vec<ItemInstance>,
    /// Maximum carried weight in lbs; None means unlimited
    pub max_weight: Option<f32>,
}

impl Container {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        grid_width: u8,
        grid_height: u8,
        kind: ContainerType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grid_width,
            grid_height,
            kind,
            items: Vec::new(),
            max_weight: None,
        }
    }

    pub fn with_max_weight(mut self, max_weight: f32) -> Self {
        self.max_weight = Some(max_weight);
        self
    }

    /// Total weight of everything inside, nested items included
    pub fn occupied_weight(&self, catalog: &ItemCatalog) -> f32 {
        self.items.iter().map(|item| item.total_weight(catalog)).sum()
    }

    /// Whether `incoming` lbs would still fit under `max_weight`
    pub fn has_weight_capacity(&self, catalog: &ItemCatalog, incoming: f32) -> bool {
        match self.max_weight {
            None => true,
            Some(max) => self.occupied_weight(catalog) + incoming <= max,
        }
    }

    pub fn find_item(&self, id: InstanceId) -> Option<&ItemInstance> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn find_item_mut(&mut self, id: InstanceId) -> Option<&mut ItemInstance> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn contains_item(&self, id: InstanceId) -> bool {
        self.find_item(id).is_some()
    }

    /// Remove an item from this container, returning it
    pub fn remove_item(&mut self, id: InstanceId) -> Option<ItemInstance> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Validate a placement against this container's current contents
    pub fn validate_placement(
        &self,
        catalog: &ItemCatalog,
        candidate: &ItemInstance,
        target: GridCell,
        rotation: Rotation,
        exclude: Option<InstanceId>,
    ) -> PlacementCheck {
        check_placement(
            catalog,
            &self.items,
            candidate,
            target,
            rotation,
            self.grid_width,
            self.grid_height,
            exclude,
        )
    }

    /// Find the first free slot for a definition, scanning row by row.
    /// Tries the native orientation first, then rotated for non-square items.
    pub fn first_fit(
        &self,
        catalog: &ItemCatalog,
        definition: &ItemDefinition,
    ) -> Option<(GridCell, Rotation)> {
        let probe = ItemInstance::new(definition.id.clone());
        let rotations: &[Rotation] = if definition.grid_width != definition.grid_height {
            &[Rotation::Deg0, Rotation::Deg90]
        } else {
            &[Rotation::Deg0]
        };

        for &rotation in rotations {
            for y in 0..self.grid_height as i32 {
                for x in 0..self.grid_width as i32 {
                    let target = GridCell::new(x, y);
                    if self
                        .validate_placement(catalog, &probe, target, rotation, None)
                        .can_place
                    {
                        return Some((target, rotation));
                    }
                }
            }
        }
        None
    }

    /// Check the occupancy invariant: every placed item in bounds, no two
    /// items sharing a cell
    pub fn occupancy_is_valid(&self, catalog: &ItemCatalog) -> bool {
        let mut seen = std::collections::HashSet::new();

        for item in &self.items {
            let Some(origin) = item.origin else {
                continue;
            };
            let Some(def) = catalog.get(&item.definition_id) else {
                continue;
            };
            let (w, h) = def.footprint();

            if !within_bounds(origin, w, h, self.grid_width, self.grid_height, item.rotation) {
                return false;
            }
            for cell in occupied_cells(origin, w, h, item.rotation) {
                if !seen.insert(cell) {
                    return false;
                }
            }
        }
        true
    }
}

/// Check if an item's native footprint fits inside another item's declared
/// interior, in either the unrotated or the 90°-rotated orientation.
/// (180° matches 0° and 270° matches 90° for bounding purposes.)
pub fn fits_in_container(item: &ItemDefinition, container: &ItemDefinition) -> bool {
    let Some((interior_w, interior_h)) = container.interior() else {
        return false;
    };
    let (w, h) = item.footprint();

    (w <= interior_w && h <= interior_h) || (h <= interior_w && w <= interior_h)
}

/// Weight-capacity check for an item-level container definition.
/// A definition without `container_max_weight` is unlimited.
pub fn has_weight_capacity(container: &ItemDefinition, current: f32, incoming: f32) -> bool {
    match container.container_max_weight {
        None => true,
        Some(max) => current + incoming <= max,
    }
}
