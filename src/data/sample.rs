//! Sample character fixture
//!
//! An ST 12 operator with a pre-packed tactical vest, used by the demo
//! binary and integration-style tests.

use crate::character::{Attributes, Character};
use crate::inventory::{Container, ContainerType};
use crate::items::ItemInstance;

/// Build the sample operator: ST 12 / DX 14 / IQ 13 / HT 12 with an 8x6
/// tactical vest holding four magazines, a medkit, and a carbine.
pub fn sample_character() -> Character {
    let mut character = Character::new(
        "char-drow-operator",
        "Drow Operator",
        Attributes::new(12, 14, 13, 12),
    );

    let mut vest = Container::new(
        "container-tactical-vest",
        "Tactical Vest",
        8,
        6,
        ContainerType::Person,
    )
    .with_max_weight(20.0);

    vest.items.push(ItemInstance::new("magazine-30").placed_at(0, 0));
    vest.items.push(ItemInstance::new("magazine-30").placed_at(1, 0));
    vest.items.push(ItemInstance::new("magazine-30").placed_at(2, 0));
    vest.items.push(ItemInstance::new("medkit").placed_at(0, 1));
    vest.items.push(ItemInstance::new("rifle-m4").placed_at(2, 2));
    vest.items.push(ItemInstance::new("magazine-30").placed_at(5, 0));

    character.containers.push(vest);
    character
}
