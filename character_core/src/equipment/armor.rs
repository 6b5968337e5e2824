//! Armor - Body armor and shields

use super::{Equippable, CATEGORY_ARMOR};
use crate::types::Slot;
use serde::{Deserialize, Serialize};

/// How a piece of armor contributes to armor class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClass {
    /// Base value. Body armor replaces the unarmored base with this, other
    /// pieces add it.
    pub base: i32,
    /// Whether the dexterity modifier is added on top
    #[serde(default)]
    pub dex_bonus: bool,
}

impl ArmorClass {
    pub fn new(base: i32, dex_bonus: bool) -> Self {
        ArmorClass { base, dex_bonus }
    }
}

/// A wearable piece of armor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Armor {
    pub key: String,
    pub name: String,
    #[serde(default = "default_armor_slot")]
    pub slot: Slot,
    /// "Light", "Medium", "Heavy", "Shield"
    #[serde(default)]
    pub armor_category: String,
    #[serde(default)]
    pub armor_class: Option<ArmorClass>,
    #[serde(default)]
    pub stealth_disadvantage: bool,
}

fn default_armor_slot() -> Slot {
    Slot::Body
}

impl Armor {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        slot: Slot,
        armor_class: ArmorClass,
    ) -> Self {
        Armor {
            key: key.into(),
            name: name.into(),
            slot,
            armor_category: String::new(),
            armor_class: Some(armor_class),
            stealth_disadvantage: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.armor_category = category.into();
        self
    }
}

impl Equippable for Armor {
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
        CATEGORY_ARMOR
    }
}
