//! External game data
//!
//! Catalog loading, built-in defaults, and sample fixtures.

pub mod loader;
pub mod items;
pub mod sample;

pub use loader::{export_default_data, DataManager};
pub use items::default_item_definitions;
pub use sample::sample_character;
