//! Mutation protocol
//!
//! Every change to a character's gear goes through these operations.
//! Each one validates first and commits second: on `Err` the data model
//! is untouched, and a successful move is a single atomic replace with
//! no intermediate state where the item is in neither (or both)
//! containers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::character::Character;
use crate::inventory::{GridCell, PlacedRegion, Rotation};
use crate::items::{HitLocation, InstanceId, ItemCatalog};

/// Number of hotbar slots (indices 0-9)
pub const HOTBAR_SLOTS: u8 = 10;

/// Whether rotating an item in place re-runs placement validation.
///
/// `Revalidate` rejects rotations that would overlap a neighbor or leave
/// the grid. `Permissive` commits unconditionally, matching rule sets
/// where the referee sorts out the mess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationPolicy {
    #[default]
    Revalidate,
    Permissive,
}

/// Whether equipping checks the item's protectable-location set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EquipPolicy {
    #[default]
    Strict,
    Permissive,
}

/// Policy knobs for the mutation protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ruleset {
    pub rotation: RotationPolicy,
    pub equip: EquipPolicy,
}

/// Why a mutation was refused. All variants are recoverable: the caller
/// presents the failure and the data model stays as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("no item with id {0}")]
    UnknownItem(InstanceId),
    #[error("no container with id {0:?}")]
    UnknownContainer(String),
    #[error("item references unknown definition {0:?}")]
    UnknownDefinition(String),
    #[error("placement footprint leaves the container grid")]
    OutOfBounds,
    #[error("placement overlaps {} existing item(s)", .0.len())]
    Collision(Vec<PlacedRegion>),
    #[error("container weight capacity exceeded")]
    CapacityExceeded,
    #[error("item cannot be equipped at {}", .0.name())]
    InvalidEquipTarget(HitLocation),
    #[error("hotbar slot {0} is out of range")]
    InvalidHotbarSlot(u8),
}

impl Character {
    /// Move an item to a cell in a target container (possibly the one it
    /// is already in), validating capacity and placement first.
    pub fn move_item(
        &mut self,
        catalog: &ItemCatalog,
        target_container_id: &str,
        item_id: InstanceId,
        cell: GridCell,
        rotation: Rotation,
    ) -> Result<(), ActionError> {
        let item = self
            .find_item(item_id)
            .cloned()
            .ok_or(ActionError::UnknownItem(item_id))?;
        let target = self
            .container(target_container_id)
            .ok_or_else(|| ActionError::UnknownContainer(target_container_id.to_string()))?;

        if catalog.get(&item.definition_id).is_none() {
            return Err(ActionError::UnknownDefinition(item.definition_id.clone()));
        }

        // Weight capacity of the target, not counting the item itself
        // when it is being repositioned within the same container
        let incoming = item.total_weight(catalog);
        let current = if target.contains_item(item_id) {
            target.occupied_weight(catalog) - incoming
        } else {
            target.occupied_weight(catalog)
        };
        if let Some(max) = target.max_weight {
            if current + incoming > max {
                return Err(ActionError::CapacityExceeded);
            }
        }

        let check = target.validate_placement(catalog, &item, cell, rotation, Some(item_id));
        if !check.can_place {
            return Err(if check.conflicts.is_empty() {
                ActionError::OutOfBounds
            } else {
                ActionError::Collision(check.conflicts)
            });
        }

        // Commit: one atomic remove-and-insert
        let source_index = self
            .containers
            .iter()
            .position(|c| c.contains_item(item_id))
            .ok_or(ActionError::UnknownItem(item_id))?;
        let Some(mut moved) = self.containers[source_index].remove_item(item_id) else {
            return Err(ActionError::UnknownItem(item_id));
        };
        moved.origin = Some(cell);
        moved.rotation = rotation;

        let target = self
            .container_mut(target_container_id)
            .ok_or_else(|| ActionError::UnknownContainer(target_container_id.to_string()))?;
        target.items.push(moved);

        log::info!(
            "Moved item {} to {:?} ({},{}) rot {}",
            item_id,
            target_container_id,
            cell.x,
            cell.y,
            rotation.degrees()
        );
        Ok(())
    }

    /// Rotate an item in place. Under `RotationPolicy::Revalidate` the new
    /// orientation must still fit at the item's current origin; items
    /// without a grid placement always rotate freely.
    pub fn rotate_item(
        &mut self,
        catalog: &ItemCatalog,
        rules: &Ruleset,
        item_id: InstanceId,
        rotation: Rotation,
    ) -> Result<(), ActionError> {
        let item = self
            .find_item(item_id)
            .cloned()
            .ok_or(ActionError::UnknownItem(item_id))?;

        if rules.rotation == RotationPolicy::Revalidate {
            if let Some(origin) = item.origin {
                if catalog.get(&item.definition_id).is_none() {
                    return Err(ActionError::UnknownDefinition(item.definition_id.clone()));
                }
                let container = self
                    .container_of_item(item_id)
                    .ok_or(ActionError::UnknownItem(item_id))?;
                let check =
                    container.validate_placement(catalog, &item, origin, rotation, Some(item_id));
                if !check.can_place {
                    return Err(if check.conflicts.is_empty() {
                        ActionError::OutOfBounds
                    } else {
                        ActionError::Collision(check.conflicts)
                    });
                }
            }
        }

        if let Some(item) = self.find_item_mut(item_id) {
            item.rotation = rotation;
        }
        log::debug!("Rotated item {} to {}", item_id, rotation.degrees());
        Ok(())
    }

    /// Equip an item at a body location, replacing any previous occupant.
    /// Under `EquipPolicy::Strict` the location must be in the item
    /// definition's protectable set.
    pub fn equip_item(
        &mut self,
        catalog: &ItemCatalog,
        rules: &Ruleset,
        item_id: InstanceId,
        location: HitLocation,
    ) -> Result<(), ActionError> {
        let item = self
            .find_item(item_id)
            .ok_or(ActionError::UnknownItem(item_id))?;
        let definition_id = item.definition_id.clone();
        let old_location = item.equipped_location;

        if rules.equip == EquipPolicy::Strict {
            let definition = catalog
                .get(&definition_id)
                .ok_or_else(|| ActionError::UnknownDefinition(definition_id.clone()))?;
            if !definition.protects(location) {
                return Err(ActionError::InvalidEquipTarget(location));
            }
        }

        // Keep the paper doll and the instance tags consistent: clear the
        // item's previous location and un-tag whoever held the new one
        if let Some(old) = old_location {
            if old != location && self.equipped.get(old) == Some(item_id) {
                self.equipped.unequip(old);
            }
        }
        if let Some(previous) = self.equipped.equip(location, item_id) {
            if previous != item_id {
                if let Some(prev_item) = self.find_item_mut(previous) {
                    prev_item.equipped_location = None;
                }
            }
        }
        if let Some(item) = self.find_item_mut(item_id) {
            item.equipped_location = Some(location);
        }

        log::info!("Equipped item {} at {}", item_id, location.name());
        Ok(())
    }

    /// Remove whatever is equipped at a location. No-op when empty.
    pub fn unequip(&mut self, location: HitLocation) -> Option<InstanceId> {
        let removed = self.equipped.unequip(location)?;
        if let Some(item) = self.find_item_mut(removed) {
            item.equipped_location = None;
        }
        log::info!("Unequipped item {} from {}", removed, location.name());
        Some(removed)
    }

    /// Assign an item to a hotbar slot (0-9), evicting any previous holder
    pub fn assign_hotbar(&mut self, item_id: InstanceId, slot: u8) -> Result<(), ActionError> {
        if slot >= HOTBAR_SLOTS {
            return Err(ActionError::InvalidHotbarSlot(slot));
        }
        if self.find_item(item_id).is_none() {
            return Err(ActionError::UnknownItem(item_id));
        }

        self.clear_hotbar(slot);
        if let Some(item) = self.find_item_mut(item_id) {
            item.hotbar_slot = Some(slot);
        }
        Ok(())
    }

    /// Clear a hotbar slot, returning the item that held it
    pub fn clear_hotbar(&mut self, slot: u8) -> Option<InstanceId> {
        for container in &mut self.containers {
            for item in &mut container.items {
                if item.hotbar_slot == Some(slot) {
                    item.hotbar_slot = None;
                    return Some(item.id);
                }
            }
        }
        None
    }

    /// Item currently assigned to a hotbar slot
    pub fn hotbar_item(&self, slot: u8) -> Option<InstanceId> {
        self.containers
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.hotbar_slot == Some(slot))
            .map(|item| item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Attributes;
    use crate::inventory::{Container, ContainerType};
    use crate::items::definition::{ItemCategory, ItemDefinition};
    use crate::items::ItemInstance;

    fn catalog() -> ItemCatalog {
        let mut catalog = ItemCatalog::new();

        let mut mag = ItemDefinition::new("mag", "Magazine", ItemCategory::Ammunition);
        mag.weight = 0.7;
        catalog.insert(mag);

        let mut rifle = ItemDefinition::new("rifle", "Carbine", ItemCategory::Weapon);
        rifle.weight = 7.5;
        rifle.grid_width = 3;
        rifle.grid_height = 1;
        catalog.insert(rifle);

        let mut armor = ItemDefinition::new("pc", "Plate Carrier", ItemCategory::Armor);
        armor.weight = 8.0;
        armor.is_armor = true;
        armor.dr = Some(25);
        armor.locations = vec![HitLocation::Torso];
        catalog.insert(armor);

        catalog
    }

    /// An 8x6 vest holding a 1x1 magazine at (0,0) and a 3x1 rifle at (2,2)
    fn operator_with_vest() -> (Character, InstanceId, InstanceId) {
        let mut character =
            Character::new("op", "Operator", Attributes::new(12, 14, 13, 12));
        let mut vest = Container::new("vest", "Tactical Vest", 8, 6, ContainerType::Person)
            .with_max_weight(20.0);

        let mag = ItemInstance::new("mag").placed_at(0, 0);
        let rifle = ItemInstance::new("rifle").placed_at(2, 2);
        let mag_id = mag.id;
        let rifle_id = rifle.id;
        vest.items.push(mag);
        vest.items.push(rifle);
        character.containers.push(vest);

        (character, mag_id, rifle_id)
    }

    #[test]
    fn test_move_onto_rifle_fails_with_one_conflict() {
        let catalog = catalog();
        let (mut character, mag_id, _) = operator_with_vest();

        let err = character
            .move_item(&catalog, "vest", mag_id, GridCell::new(2, 2), Rotation::Deg0)
            .unwrap_err();
        match err {
            ActionError::Collision(conflicts) => {
                assert_eq!(conflicts.len(), 1);
                assert_eq!(conflicts[0].x, 2);
                assert_eq!(conflicts[0].y, 2);
                assert_eq!(conflicts[0].width, 3);
                assert_eq!(conflicts[0].height, 1);
            }
            other => panic!("expected Collision, got {:?}", other),
        }

        // Rejection left the model untouched
        let mag = character.find_item(mag_id).unwrap();
        assert_eq!(mag.origin, Some(GridCell::new(0, 0)));
        assert!(character.container("vest").unwrap().occupancy_is_valid(&catalog));
    }

    #[test]
    fn test_move_to_free_corner_succeeds() {
        let catalog = catalog();
        let (mut character, mag_id, _) = operator_with_vest();

        character
            .move_item(&catalog, "vest", mag_id, GridCell::new(7, 5), Rotation::Deg0)
            .unwrap();

        let mag = character.find_item(mag_id).unwrap();
        assert_eq!(mag.origin, Some(GridCell::new(7, 5)));
        assert!(character.container("vest").unwrap().occupancy_is_valid(&catalog));
    }

    #[test]
    fn test_move_out_of_bounds() {
        let catalog = catalog();
        let (mut character, _, rifle_id) = operator_with_vest();

        // 3x1 rifle cannot start at x=6 in an 8-wide grid
        let err = character
            .move_item(&catalog, "vest", rifle_id, GridCell::new(6, 0), Rotation::Deg0)
            .unwrap_err();
        assert_eq!(err, ActionError::OutOfBounds);

        let err = character
            .move_item(&catalog, "vest", rifle_id, GridCell::new(-1, 0), Rotation::Deg0)
            .unwrap_err();
        assert_eq!(err, ActionError::OutOfBounds);
    }

    #[test]
    fn test_move_between_containers_is_atomic() {
        let catalog = catalog();
        let (mut character, mag_id, _) = operator_with_vest();
        character
            .containers
            .push(Container::new("pack", "Backpack", 4, 4, ContainerType::Backpack));

        character
            .move_item(&catalog, "pack", mag_id, GridCell::new(1, 1), Rotation::Deg0)
            .unwrap();

        assert!(!character.container("vest").unwrap().contains_item(mag_id));
        assert!(character.container("pack").unwrap().contains_item(mag_id));

        // A rejected move back changes nothing on either side
        let err = character
            .move_item(&catalog, "vest", mag_id, GridCell::new(2, 2), Rotation::Deg0)
            .unwrap_err();
        assert!(matches!(err, ActionError::Collision(_)));
        assert!(character.container("pack").unwrap().contains_item(mag_id));
        assert!(!character.container("vest").unwrap().contains_item(mag_id));
    }

    #[test]
    fn test_move_rejects_over_capacity() {
        let catalog = catalog();
        let (mut character, _, rifle_id) = operator_with_vest();
        character.containers.push(
            Container::new("pouch", "Pouch", 4, 4, ContainerType::Other).with_max_weight(5.0),
        );

        let err = character
            .move_item(&catalog, "pouch", rifle_id, GridCell::new(0, 0), Rotation::Deg0)
            .unwrap_err();
        assert_eq!(err, ActionError::CapacityExceeded);
        assert!(character.container("vest").unwrap().contains_item(rifle_id));
    }

    #[test]
    fn test_reposition_within_full_container() {
        // Repositioning must not double-count the item's own weight
        let catalog = catalog();
        let mut character =
            Character::new("op", "Operator", Attributes::new(12, 14, 13, 12));
        let mut pouch = Container::new("pouch", "Pouch", 4, 4, ContainerType::Other)
            .with_max_weight(8.0);
        let rifle = ItemInstance::new("rifle").placed_at(0, 0);
        let rifle_id = rifle.id;
        pouch.items.push(rifle);
        character.containers.push(pouch);

        character
            .move_item(&catalog, "pouch", rifle_id, GridCell::new(0, 1), Rotation::Deg0)
            .unwrap();
        assert_eq!(
            character.find_item(rifle_id).unwrap().origin,
            Some(GridCell::new(0, 1))
        );
    }

    #[test]
    fn test_unknown_ids() {
        let catalog = catalog();
        let (mut character, mag_id, _) = operator_with_vest();

        assert_eq!(
            character
                .move_item(&catalog, "vest", 9999, GridCell::new(0, 0), Rotation::Deg0)
                .unwrap_err(),
            ActionError::UnknownItem(9999)
        );
        assert_eq!(
            character
                .move_item(&catalog, "trunk", mag_id, GridCell::new(0, 0), Rotation::Deg0)
                .unwrap_err(),
            ActionError::UnknownContainer("trunk".to_string())
        );

        // An item whose definition is missing fails closed
        let mut ghost_container = Container::new("misc", "Misc", 4, 4, ContainerType::Other);
        let ghost = ItemInstance::new("no-such-def");
        let ghost_id = ghost.id;
        ghost_container.items.push(ghost);
        character.containers.push(ghost_container);
        assert_eq!(
            character
                .move_item(&catalog, "misc", ghost_id, GridCell::new(0, 0), Rotation::Deg0)
                .unwrap_err(),
            ActionError::UnknownDefinition("no-such-def".to_string())
        );
    }

    #[test]
    fn test_rotate_revalidates_by_default() {
        let catalog = catalog();
        let (mut character, _, rifle_id) = operator_with_vest();
        let rules = Ruleset::default();

        // Rotating the rifle at (2,2) to vertical is fine: rows 2-4 of column 2 are free
        character
            .rotate_item(&catalog, &rules, rifle_id, Rotation::Deg90)
            .unwrap();
        assert_eq!(character.find_item(rifle_id).unwrap().rotation, Rotation::Deg90);
        assert!(character.container("vest").unwrap().occupancy_is_valid(&catalog));
    }

    #[test]
    fn test_rotate_rejects_overlap_under_revalidate() {
        let catalog = catalog();
        let (mut character, mag_id, rifle_id) = operator_with_vest();
        let rules = Ruleset::default();

        // Park the magazine directly under the rifle's origin column
        character
            .move_item(&catalog, "vest", mag_id, GridCell::new(2, 3), Rotation::Deg0)
            .unwrap();

        let err = character
            .rotate_item(&catalog, &rules, rifle_id, Rotation::Deg90)
            .unwrap_err();
        assert!(matches!(err, ActionError::Collision(ref c) if c.len() == 1));
        // Unchanged on rejection
        assert_eq!(character.find_item(rifle_id).unwrap().rotation, Rotation::Deg0);
    }

    #[test]
    fn test_rotate_out_of_bounds_under_revalidate() {
        let catalog = catalog();
        let (mut character, _, rifle_id) = operator_with_vest();
        let rules = Ruleset::default();

        character
            .move_item(&catalog, "vest", rifle_id, GridCell::new(5, 4), Rotation::Deg0)
            .unwrap();
        // Vertical at y=4 would reach y=6, off a 6-tall grid
        let err = character
            .rotate_item(&catalog, &rules, rifle_id, Rotation::Deg90)
            .unwrap_err();
        assert_eq!(err, ActionError::OutOfBounds);
    }

    #[test]
    fn test_rotate_permissive_skips_validation() {
        let catalog = catalog();
        let (mut character, mag_id, rifle_id) = operator_with_vest();
        let rules = Ruleset {
            rotation: RotationPolicy::Permissive,
            ..Ruleset::default()
        };

        character
            .move_item(&catalog, "vest", mag_id, GridCell::new(2, 3), Rotation::Deg0)
            .unwrap();

        // Permissive mode allows the overlapping rotation through
        character
            .rotate_item(&catalog, &rules, rifle_id, Rotation::Deg90)
            .unwrap();
        assert_eq!(character.find_item(rifle_id).unwrap().rotation, Rotation::Deg90);
        assert!(!character.container("vest").unwrap().occupancy_is_valid(&catalog));
    }

    #[test]
    fn test_equip_strict_checks_locations() {
        let catalog = catalog();
        let (mut character, mag_id, _) = operator_with_vest();
        let rules = Ruleset::default();

        let mut vest = Container::new("rig", "Rig", 4, 4, ContainerType::Person);
        let armor = ItemInstance::new("pc").placed_at(0, 0);
        let armor_id = armor.id;
        vest.items.push(armor);
        character.containers.push(vest);

        character
            .equip_item(&catalog, &rules, armor_id, HitLocation::Torso)
            .unwrap();
        assert_eq!(character.equipped.get(HitLocation::Torso), Some(armor_id));
        assert_eq!(
            character.find_item(armor_id).unwrap().equipped_location,
            Some(HitLocation::Torso)
        );

        // Plate carrier does not protect the skull
        assert_eq!(
            character
                .equip_item(&catalog, &rules, armor_id, HitLocation::Skull)
                .unwrap_err(),
            ActionError::InvalidEquipTarget(HitLocation::Skull)
        );
        // A magazine is not armor at all
        assert_eq!(
            character
                .equip_item(&catalog, &rules, mag_id, HitLocation::Torso)
                .unwrap_err(),
            ActionError::InvalidEquipTarget(HitLocation::Torso)
        );
    }

    #[test]
    fn test_equip_permissive_accepts_anything() {
        let catalog = catalog();
        let (mut character, mag_id, _) = operator_with_vest();
        let rules = Ruleset {
            equip: EquipPolicy::Permissive,
            ..Ruleset::default()
        };

        character
            .equip_item(&catalog, &rules, mag_id, HitLocation::Skull)
            .unwrap();
        assert_eq!(character.equipped.get(HitLocation::Skull), Some(mag_id));
    }

    #[test]
    fn test_unequip() {
        let catalog = catalog();
        let (mut character, mag_id, _) = operator_with_vest();
        let rules = Ruleset {
            equip: EquipPolicy::Permissive,
            ..Ruleset::default()
        };

        character
            .equip_item(&catalog, &rules, mag_id, HitLocation::Hands)
            .unwrap();
        assert_eq!(character.unequip(HitLocation::Hands), Some(mag_id));
        assert_eq!(character.find_item(mag_id).unwrap().equipped_location, None);
        // No-op on an empty location
        assert_eq!(character.unequip(HitLocation::Hands), None);
    }

    #[test]
    fn test_hotbar_assignment_and_eviction() {
        let (mut character, mag_id, rifle_id) = operator_with_vest();

        character.assign_hotbar(mag_id, 3).unwrap();
        assert_eq!(character.hotbar_item(3), Some(mag_id));

        // Assigning another item to the same slot evicts the first
        character.assign_hotbar(rifle_id, 3).unwrap();
        assert_eq!(character.hotbar_item(3), Some(rifle_id));
        assert_eq!(character.find_item(mag_id).unwrap().hotbar_slot, None);

        assert_eq!(character.clear_hotbar(3), Some(rifle_id));
        assert_eq!(character.hotbar_item(3), None);

        assert_eq!(
            character.assign_hotbar(mag_id, 10).unwrap_err(),
            ActionError::InvalidHotbarSlot(10)
        );
    }

    #[test]
    fn test_derived_stats_track_mutations() {
        let catalog = catalog();
        let (mut character, _, _) = operator_with_vest();

        // 0.7 + 7.5 carried against BL 28.8: unencumbered
        let before = character.encumbrance(&catalog);
        assert_eq!(before.level, crate::character::EncumbranceLevel::None);

        // Fill the vest with plate carriers until the tier shifts
        for i in 0..4 {
            let armor = ItemInstance::new("pc").placed_at(4 + i, 4);
            character.container_mut("vest").unwrap().items.push(armor);
        }
        let after = character.encumbrance(&catalog);
        assert_eq!(after.level, crate::character::EncumbranceLevel::Light);
        assert_eq!(character.effective_move(&catalog), 12);
        assert_eq!(character.effective_dodge(&catalog), 8);
    }
}
