//! Item system

pub mod definition;
pub mod instance;
pub mod catalog;

pub use definition::{DefinitionId, HitLocation, ItemCategory, ItemDefinition, Quality, WeaponProfile};
pub use instance::{next_instance_id, InstanceId, ItemInstance};
pub use catalog::ItemCatalog;
