//! Molle - Demo Entry Point
//!
//! Loads the gear catalog and the sample operator, then walks through a
//! scripted set of inventory mutations, printing the derived stats after
//! each step.

use anyhow::{Context, Result};

use molle::actions::Ruleset;
use molle::data::{sample_character, DataManager};
use molle::inventory::{Container, ContainerType, GridCell, Rotation};
use molle::items::{HitLocation, ItemCatalog, ItemInstance};
use molle::Character;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting molle v{}", env!("CARGO_PKG_VERSION"));

    let data = DataManager::new();
    let rules = Ruleset::default();
    let mut operator = sample_character();

    println!("== {} ==", operator.name);
    print_stats(&operator, &data.catalog);

    let vest_id = "container-tactical-vest";
    let mag_id = first_of(&operator, "magazine-30").context("sample vest has no magazine")?;
    let rifle_id = first_of(&operator, "rifle-m4").context("sample vest has no rifle")?;

    // Dropping a magazine onto the rifle must be refused
    println!("\nMoving a magazine onto the rifle at (2,2)...");
    match operator.move_item(&data.catalog, vest_id, mag_id, GridCell::new(2, 2), Rotation::Deg0) {
        Ok(()) => println!("  unexpectedly succeeded"),
        Err(e) => println!("  rejected: {}", e),
    }

    // The far corner is free
    println!("Moving the magazine to (7,5)...");
    operator.move_item(&data.catalog, vest_id, mag_id, GridCell::new(7, 5), Rotation::Deg0)?;
    println!("  ok");

    // Stand the rifle upright
    println!("Rotating the rifle to 90 degrees...");
    operator.rotate_item(&data.catalog, &rules, rifle_id, Rotation::Deg90)?;
    println!("  ok");

    // A plate carrier will not fit the vest's weight budget...
    let mut locker = Container::new("locker", "Gear Locker", 10, 10, ContainerType::Locker);
    let armor = ItemInstance::new("plate-carrier").placed_at(0, 0);
    let armor_id = armor.id;
    locker.items.push(armor);
    operator.containers.push(locker);

    println!("Stuffing the plate carrier into the vest...");
    match operator.move_item(&data.catalog, vest_id, armor_id, GridCell::new(4, 4), Rotation::Deg0)
    {
        Ok(()) => println!("  unexpectedly succeeded"),
        Err(e) => println!("  rejected: {}", e),
    }

    // ...but wearing it works fine
    println!("Equipping the plate carrier on the torso...");
    operator.equip_item(&data.catalog, &rules, armor_id, HitLocation::Torso)?;
    println!(
        "  ok, torso DR is now {}",
        operator.damage_resistance(&data.catalog, HitLocation::Torso)
    );

    println!();
    print_stats(&operator, &data.catalog);

    log::info!("Molle demo finished");
    Ok(())
}

/// Print carried weight, encumbrance tier, and effective stats
fn print_stats(character: &Character, catalog: &ItemCatalog) {
    let weight = character.total_carried_weight(catalog);
    let encumbrance = character.encumbrance(catalog);

    println!(
        "Carried: {:.1} lbs (BL {:.1})  Encumbrance: {}  Move: {}  Dodge: {}",
        weight,
        character.basic_lift(),
        encumbrance.level.name(),
        character.effective_move(catalog),
        character.effective_dodge(catalog),
    );
}

/// First item instance of a given definition, searching all containers
fn first_of(character: &Character, definition_id: &str) -> Option<molle::InstanceId> {
    character
        .containers
        .iter()
        .flat_map(|c| c.items.iter())
        .find(|item| item.definition_id == definition_id)
        .map(|item| item.id)
}
