//! Built-in item definitions
//!
//! The default catalog used when no external data file is present.

use crate::items::{HitLocation, ItemCategory, ItemDefinition, Quality, WeaponProfile};

/// The default gear catalog
pub fn default_item_definitions() -> Vec<ItemDefinition> {
    vec![
        tactical_vest(),
        rifle_m4(),
        magazine_30(),
        medkit(),
        plate_carrier(),
    ]
}

fn tactical_vest() -> ItemDefinition {
    let mut def = ItemDefinition::new("tactical-vest", "Tactical Vest", ItemCategory::Container);
    def.description = Some("8x6 grid tactical vest with MOLLE webbing".to_string());
    def.weight = 3.5;
    def.cost = Some(150);
    def.tech_level = Some(8);
    def.legality = Some(3);
    def.quality = Some(Quality::Good);
    def.is_container = true;
    def.container_width = Some(8);
    def.container_height = Some(6);
    def.container_max_weight = Some(20.0);
    def
}

fn rifle_m4() -> ItemDefinition {
    let mut def = ItemDefinition::new("rifle-m4", "M4 Carbine", ItemCategory::Weapon);
    def.description = Some("5.56mm assault rifle".to_string());
    def.weight = 7.5;
    def.cost = Some(900);
    def.tech_level = Some(8);
    def.legality = Some(2);
    def.quality = Some(Quality::Good);
    def.grid_width = 3;
    def.grid_height = 1;
    def.weapon = Some(WeaponProfile {
        damage: "5d pi".to_string(),
        reach: None,
        parry: None,
        bulk: Some("-4".to_string()),
    });
    def
}

fn magazine_30() -> ItemDefinition {
    let mut def = ItemDefinition::new("magazine-30", "30-Round Magazine", ItemCategory::Ammunition);
    def.description = Some("5.56mm STANAG magazine".to_string());
    def.weight = 0.7;
    def.cost = Some(30);
    def.tech_level = Some(8);
    def.legality = Some(3);
    def.quality = Some(Quality::Good);
    def
}

fn medkit() -> ItemDefinition {
    let mut def = ItemDefinition::new("medkit", "First Aid Kit", ItemCategory::Medical);
    def.description = Some("Comprehensive medical supplies".to_string());
    def.weight = 2.0;
    def.cost = Some(50);
    def.tech_level = Some(8);
    def.legality = Some(4);
    def.quality = Some(Quality::Good);
    def.grid_width = 2;
    def.grid_height = 1;
    def
}

fn plate_carrier() -> ItemDefinition {
    let mut def = ItemDefinition::new("plate-carrier", "Plate Carrier", ItemCategory::Armor);
    def.description = Some("Body armor with ceramic plates".to_string());
    def.weight = 8.0;
    def.cost = Some(400);
    def.tech_level = Some(8);
    def.legality = Some(2);
    def.quality = Some(Quality::Good);
    def.is_armor = true;
    def.dr = Some(25);
    def.locations = vec![HitLocation::Torso];
    def
}
