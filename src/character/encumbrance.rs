//! Encumbrance calculations (GURPS 4e Basic Set, p. 17)
//!
//! Classifies carried weight against Basic Lift multiples and derives the
//! movement and dodge penalties for each tier. Pure functions throughout:
//! same inputs, same answer, no hidden state.

use serde::{Deserialize, Serialize};

/// Calculate Basic Lift (BL) from Strength: BL = ST² / 5 lbs
pub fn basic_lift(strength: i32) -> f32 {
    (strength * strength) as f32 / 5.0
}

/// Encumbrance tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncumbranceLevel {
    None,
    Light,
    Medium,
    Heavy,
    ExtraHeavy,
}

impl EncumbranceLevel {
    pub fn name(&self) -> &'static str {
        match self {
            EncumbranceLevel::None => "None",
            EncumbranceLevel::Light => "Light",
            EncumbranceLevel::Medium => "Medium",
            EncumbranceLevel::Heavy => "Heavy",
            EncumbranceLevel::ExtraHeavy => "Extra-Heavy",
        }
    }

    /// Basic Lift multiplier that caps this tier (Extra-Heavy caps at 10x)
    pub fn multiplier(&self) -> f32 {
        match self {
            EncumbranceLevel::None => 1.0,
            EncumbranceLevel::Light => 2.0,
            EncumbranceLevel::Medium => 3.0,
            EncumbranceLevel::Heavy => 6.0,
            EncumbranceLevel::ExtraHeavy => 10.0,
        }
    }

    pub fn move_modifier(&self) -> i32 {
        match self {
            EncumbranceLevel::None => 0,
            EncumbranceLevel::Light => 0,
            EncumbranceLevel::Medium => -1,
            EncumbranceLevel::Heavy => -2,
            EncumbranceLevel::ExtraHeavy => -3,
        }
    }

    pub fn dodge_modifier(&self) -> i32 {
        match self {
            EncumbranceLevel::None => 0,
            EncumbranceLevel::Light => -1,
            EncumbranceLevel::Medium => -2,
            EncumbranceLevel::Heavy => -3,
            EncumbranceLevel::ExtraHeavy => -4,
        }
    }

    /// Display color RGB for encumbrance meters
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            EncumbranceLevel::None => (16, 185, 129),       // Green
            EncumbranceLevel::Light => (132, 204, 22),      // Lime
            EncumbranceLevel::Medium => (234, 179, 8),      // Yellow
            EncumbranceLevel::Heavy => (249, 115, 22),      // Orange
            EncumbranceLevel::ExtraHeavy => (220, 38, 38),  // Red
        }
    }
}

/// Derived encumbrance state, recomputed on demand and never stored
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncumbranceInfo {
    pub level: EncumbranceLevel,
    pub multiplier: f32,
    pub move_modifier: i32,
    pub dodge_modifier: i32,
}

impl EncumbranceInfo {
    fn from_level(level: EncumbranceLevel) -> Self {
        Self {
            level,
            multiplier: level.multiplier(),
            move_modifier: level.move_modifier(),
            dodge_modifier: level.dodge_modifier(),
        }
    }
}

/// Classify carried weight against the character's Basic Lift.
/// Each tier's upper bound is inclusive: carrying exactly BL is still None.
pub fn classify(carried_weight: f32, strength: i32) -> EncumbranceInfo {
    let bl = basic_lift(strength);

    let level = if carried_weight <= bl {
        EncumbranceLevel::None
    } else if carried_weight <= bl * 2.0 {
        EncumbranceLevel::Light
    } else if carried_weight <= bl * 3.0 {
        EncumbranceLevel::Medium
    } else if carried_weight <= bl * 6.0 {
        EncumbranceLevel::Heavy
    } else {
        EncumbranceLevel::ExtraHeavy
    };

    EncumbranceInfo::from_level(level)
}

/// Effective Move after encumbrance, floored at 1
pub fn effective_move(base_move: i32, encumbrance: &EncumbranceInfo) -> i32 {
    (base_move + encumbrance.move_modifier).max(1)
}

/// Effective Dodge after encumbrance: (DX + HT) / 4 + 3, floored at 1
pub fn effective_dodge(dexterity: i32, health: i32, encumbrance: &EncumbranceInfo) -> i32 {
    ((dexterity + health) / 4 + 3 + encumbrance.dodge_modifier).max(1)
}

/// Fraction of the Extra-Heavy ceiling (10x BL) in use, 0-100 for meters
pub fn encumbrance_percentage(carried_weight: f32, strength: i32) -> f32 {
    let max_weight = basic_lift(strength) * 10.0;
    (carried_weight / max_weight * 100.0).min(100.0)
}
