//! Item definitions
//!
//! Immutable catalog entries describing GURPS 4e gear: weight, cost,
//! grid footprint, and container/armor/weapon properties.

use serde::{Deserialize, Serialize};

/// Catalog key for item definitions
pub type DefinitionId = String;

/// GURPS hit locations (Basic Set p.398)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitLocation {
    Skull,
    Eyes,
    Face,
    Neck,
    Torso,
    Vitals,
    Groin,
    Arms,
    Hands,
    Legs,
    Feet,
}

impl HitLocation {
    pub fn name(&self) -> &'static str {
        match self {
            HitLocation::Skull => "Skull",
            HitLocation::Eyes => "Eyes",
            HitLocation::Face => "Face",
            HitLocation::Neck => "Neck",
            HitLocation::Torso => "Torso",
            HitLocation::Vitals => "Vitals",
            HitLocation::Groin => "Groin",
            HitLocation::Arms => "Arms",
            HitLocation::Hands => "Hands",
            HitLocation::Legs => "Legs",
            HitLocation::Feet => "Feet",
        }
    }

    /// Get all locations in paper-doll display order
    pub fn all() -> &'static [HitLocation] {
        &[
            HitLocation::Skull,
            HitLocation::Eyes,
            HitLocation::Face,
            HitLocation::Neck,
            HitLocation::Torso,
            HitLocation::Vitals,
            HitLocation::Groin,
            HitLocation::Arms,
            HitLocation::Hands,
            HitLocation::Legs,
            HitLocation::Feet,
        ]
    }
}

/// Main item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Tool,
    Container,
    Ammunition,
    Medical,
    Food,
    Electronics,
    Other,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
            ItemCategory::Tool => "Tool",
            ItemCategory::Container => "Container",
            ItemCategory::Ammunition => "Ammunition",
            ItemCategory::Medical => "Medical",
            ItemCategory::Food => "Food",
            ItemCategory::Electronics => "Electronics",
            ItemCategory::Other => "Other",
        }
    }
}

/// Equipment quality levels (GURPS 4e)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Cheap,
    Good,
    Fine,
    VeryFine,
}

impl Quality {
    pub fn name(&self) -> &'static str {
        match self {
            Quality::Cheap => "Cheap",
            Quality::Good => "Good",
            Quality::Fine => "Fine",
            Quality::VeryFine => "Very Fine",
        }
    }
}

/// Weapon stat block, only present on weapon definitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Damage expression, e.g. "2d+2 cut"
    pub damage: String,
    /// Reach, e.g. "1,2"
    pub reach: Option<String>,
    /// Parry modifier, e.g. "0F"
    pub parry: Option<String>,
    /// Bulk rating, e.g. "-4"
    pub bulk: Option<String>,
}

/// A catalog entry: the immutable template every placed item references.
///
/// Authored once at load time and shared read-only; runtime state
/// (position, rotation, stack count) lives on `ItemInstance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: DefinitionId,
    pub name: String,
    pub description: Option<String>,
    /// Weight in lbs
    pub weight: f32,
    /// Cost in $ (GURPS currency)
    pub cost: Option<u32>,
    /// Tech Level (0-12)
    pub tech_level: Option<u8>,
    /// Legality Class (0-4)
    pub legality: Option<u8>,
    pub quality: Option<Quality>,
    pub category: ItemCategory,

    /// Native grid footprint in cells
    pub grid_width: u8,
    pub grid_height: u8,

    /// Container properties
    pub is_container: bool,
    pub container_width: Option<u8>,
    pub container_height: Option<u8>,
    pub container_max_weight: Option<f32>,

    /// Armor properties
    pub is_armor: bool,
    /// Damage Resistance
    pub dr: Option<i32>,
    /// Body locations this armor protects
    pub locations: Vec<HitLocation>,

    /// Weapon properties (if applicable)
    pub weapon: Option<WeaponProfile>,

    pub notes: Option<String>,
}

impl ItemDefinition {
    /// Create a minimal definition; optional blocks default to empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: ItemCategory) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            weight: 0.0,
            cost: None,
            tech_level: None,
            legality: None,
            quality: None,
            category,
            grid_width: 1,
            grid_height: 1,
            is_container: false,
            container_width: None,
            container_height: None,
            container_max_weight: None,
            is_armor: false,
            dr: None,
            locations: Vec::new(),
            weapon: None,
            notes: None,
        }
    }

    /// Native footprint as (width, height)
    pub fn footprint(&self) -> (u8, u8) {
        (self.grid_width, self.grid_height)
    }

    /// Check if this armor protects a body location
    pub fn protects(&self, location: HitLocation) -> bool {
        self.is_armor && self.locations.contains(&location)
    }

    /// Interior grid extents, if this item is a container
    pub fn interior(&self) -> Option<(u8, u8)> {
        if self.is_container {
            Some((self.container_width?, self.container_height?))
        } else {
            None
        }
    }
}
