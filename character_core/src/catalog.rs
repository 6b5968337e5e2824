//! RulesCatalog - Resolves race, class and equipment keys into descriptors

use crate::config::ContentConfig;
use crate::descriptor::{Class, Race};
use crate::equipment::Equipment;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown race: {0}")]
    UnknownRace(String),
    #[error("Unknown class: {0}")]
    UnknownClass(String),
    #[error("Unknown equipment: {0}")]
    UnknownEquipment(String),
}

/// Source of rules content the aggregate consumes
pub trait RulesCatalog: Send + Sync {
    fn race(&self, key: &str) -> Result<Race, CatalogError>;

    fn class(&self, key: &str) -> Result<Class, CatalogError>;

    fn equipment(&self, key: &str) -> Result<Equipment, CatalogError>;

    fn races(&self) -> Vec<Race>;

    fn classes(&self) -> Vec<Class>;

    /// Resolve every starting equipment key of a class
    fn starting_equipment(&self, class: &Class) -> Result<Vec<Equipment>, CatalogError> {
        class
            .starting_equipment
            .iter()
            .map(|key| self.equipment(key))
            .collect()
    }
}

/// Catalog backed by parsed content, indexed by key
#[derive(Debug, Clone, Default)]
pub struct ContentCatalog {
    races: Vec<Race>,
    classes: Vec<Class>,
    equipment: HashMap<String, Equipment>,
}

impl ContentCatalog {
    pub fn new(content: ContentConfig) -> Self {
        let ContentConfig {
            races,
            classes,
            weapons,
            armor,
            gear,
        } = content;

        let mut equipment = HashMap::new();
        for weapon in weapons {
            equipment.insert(weapon.key.clone(), Equipment::Weapon(weapon));
        }
        for piece in armor {
            equipment.insert(piece.key.clone(), Equipment::Armor(piece));
        }
        for item in gear {
            equipment.insert(item.key.clone(), Equipment::Gear(item));
        }

        ContentCatalog {
            races,
            classes,
            equipment,
        }
    }
}

impl RulesCatalog for ContentCatalog {
    fn race(&self, key: &str) -> Result<Race, CatalogError> {
        self.races
            .iter()
            .find(|r| r.key == key)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownRace(key.to_string()))
    }

    fn class(&self, key: &str) -> Result<Class, CatalogError> {
        self.classes
            .iter()
            .find(|c| c.key == key)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownClass(key.to_string()))
    }

    fn equipment(&self, key: &str) -> Result<Equipment, CatalogError> {
        self.equipment
            .get(key)
            .cloned()
            .ok_or_else(|| CatalogError::UnknownEquipment(key.to_string()))
    }

    fn races(&self) -> Vec<Race> {
        self.races.clone()
    }

    fn classes(&self) -> Vec<Class> {
        self.classes.clone()
    }
}
