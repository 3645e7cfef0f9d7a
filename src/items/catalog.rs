//! Item catalog
//!
//! Process-wide, read-only lookup from definition id to `ItemDefinition`.
//! Built once at load time; never mutated afterwards, so it needs no
//! synchronization when shared across threads.

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use super::definition::{DefinitionId, ItemDefinition};

/// Shared collection of item definitions
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemCatalog {
    definitions: HashMap<DefinitionId, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Build a catalog from a list of definitions.
    /// Later duplicates of an id replace earlier ones.
    pub fn from_definitions(definitions: Vec<ItemDefinition>) -> Self {
        let mut catalog = Self::new();
        for def in definitions {
            catalog.insert(def);
        }
        catalog
    }

    /// Add a definition, keyed by its id
    pub fn insert(&mut self, definition: ItemDefinition) {
        self.definitions.insert(definition.id.clone(), definition);
    }

    /// Look up a definition by id
    pub fn get(&self, id: &str) -> Option<&ItemDefinition> {
        self.definitions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over all definitions (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.definitions.values()
    }
}
