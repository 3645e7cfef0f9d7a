//! RON data loader
//!
//! Loads the item catalog from an external RON file, with fallback to the
//! hardcoded defaults.

use std::fs;
use std::path::Path;

use crate::items::{ItemCatalog, ItemDefinition};
use super::items::default_item_definitions;

/// Manages the external gear data
#[derive(Debug, Clone)]
pub struct DataManager {
    /// Item definition catalog
    pub catalog: ItemCatalog,
}

impl DataManager {
    /// Create a new DataManager, loading from files or using defaults
    pub fn new() -> Self {
        Self::load_from_assets(Path::new("assets/data"))
    }

    /// Load data from a directory, falling back to defaults per file
    pub fn load_from_assets(base_path: &Path) -> Self {
        Self {
            catalog: Self::load_items(base_path),
        }
    }

    /// Load item definitions from a RON file
    fn load_items(base_path: &Path) -> ItemCatalog {
        let path = base_path.join("items.ron");
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match ron::from_str::<Vec<ItemDefinition>>(&content) {
                    Ok(definitions) => return ItemCatalog::from_definitions(definitions),
                    Err(e) => log::warn!("Failed to parse items.ron: {}. Using defaults.", e),
                },
                Err(e) => log::warn!("Failed to read items.ron: {}. Using defaults.", e),
            }
        }
        ItemCatalog::from_definitions(default_item_definitions())
    }
}

impl Default for DataManager {
    fn default() -> Self {
        Self {
            catalog: ItemCatalog::from_definitions(default_item_definitions()),
        }
    }
}

/// Export the default definitions to RON, as a starting point for modding
pub fn export_default_data(base_path: &Path) -> Result<(), String> {
    fs::create_dir_all(base_path)
        .map_err(|e| format!("Failed to create data directory: {}", e))?;

    let items = default_item_definitions();
    let items_ron = ron::ser::to_string_pretty(&items, ron::ser::PrettyConfig::default())
        .map_err(|e| format!("Failed to serialize items: {}", e))?;
    fs::write(base_path.join("items.ron"), items_ron)
        .map_err(|e| format!("Failed to write items.ron: {}", e))?;

    Ok(())
}
