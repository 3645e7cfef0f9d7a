//! Paper doll
//!
//! Tracks which item instance is equipped at each body location. Stores
//! instance ids rather than owned items: the items themselves stay in
//! their container grids, and equipping is an annotation on top.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::items::{HitLocation, InstanceId};

/// Body-location to equipped-item mapping, at most one item per location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperDoll {
    slots: HashMap<HitLocation, InstanceId>,
}

impl PaperDoll {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Equip an item at a location, returning the previously equipped id if any
    pub fn equip(&mut self, location: HitLocation, item: InstanceId) -> Option<InstanceId> {
        self.slots.insert(location, item)
    }

    /// Remove the mapping for a location; None if nothing was equipped there
    pub fn unequip(&mut self, location: HitLocation) -> Option<InstanceId> {
        self.slots.remove(&location)
    }

    /// Item equipped at a location
    pub fn get(&self, location: HitLocation) -> Option<InstanceId> {
        self.slots.get(&location).copied()
    }

    pub fn is_empty(&self, location: HitLocation) -> bool {
        !self.slots.contains_key(&location)
    }

    /// Where a given item is equipped, if anywhere
    pub fn location_of(&self, item: InstanceId) -> Option<HitLocation> {
        self.slots
            .iter()
            .find(|(_, &id)| id == item)
            .map(|(&location, _)| location)
    }

    /// All (location, item) pairs, in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (HitLocation, InstanceId)> + '_ {
        self.slots.iter().map(|(&location, &id)| (location, id))
    }

    /// Number of occupied locations
    pub fn count(&self) -> usize {
        self.slots.len()
    }
}
