//! Weapon - Melee and ranged weapons

use super::{Equippable, CATEGORY_WEAPON};
use crate::types::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Damage dice rolled on a hit, e.g. 1d8 slashing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponDamage {
    pub dice_count: u32,
    pub dice_sides: u32,
    pub damage_type: String,
}

impl fmt::Display for WeaponDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{} {}", self.dice_count, self.dice_sides, self.damage_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub key: String,
    pub name: String,
    #[serde(default = "default_weapon_slot")]
    pub slot: Slot,
    /// "Simple" or "Martial"
    #[serde(default)]
    pub weapon_category: String,
    #[serde(default)]
    pub damage: Option<WeaponDamage>,
    #[serde(default)]
    pub properties: Vec<String>,
}

fn default_weapon_slot() -> Slot {
    Slot::MainHand
}

impl Weapon {
    pub fn new(key: impl Into<String>, name: impl Into<String>, slot: Slot) -> Self {
        Weapon {
            key: key.into(),
            name: name.into(),
            slot,
            weapon_category: String::new(),
            damage: None,
            properties: Vec::new(),
        }
    }

    pub fn with_damage(mut self, dice_count: u32, dice_sides: u32, damage_type: &str) -> Self {
        self.damage = Some(WeaponDamage {
            dice_count,
            dice_sides,
            damage_type: damage_type.to_string(),
        });
        self
    }
}

impl Equippable for Weapon {
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
        CATEGORY_WEAPON
    }
}
