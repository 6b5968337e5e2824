//! Gear - Adventuring gear, tools and packs

use super::{Equippable, CATEGORY_GEAR};
use crate::types::Slot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    pub key: String,
    pub name: String,
    #[serde(default = "default_gear_slot")]
    pub slot: Slot,
    #[serde(default)]
    pub gear_category: String,
}

fn default_gear_slot() -> Slot {
    Slot::None
}

impl Gear {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Gear {
            key: key.into(),
            name: name.into(),
            slot: Slot::None,
            gear_category: String::new(),
        }
    }
}

impl Equippable for Gear {
    fn key(&self) -> &str {
        &self.key
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn slot(&self) -> Slot {
        self.slot
    }

    fn category(&self) -> &str {
        CATEGORY_GEAR
    }
}
