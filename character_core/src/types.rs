//! Core enums shared across the character model

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six ability dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    /// Get all attributes in sheet order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Dexterity,
            Attribute::Constitution,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Charisma,
        ]
    }

    /// Three-letter abbreviation used on character sheets
    pub fn short_name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Dexterity => "Dex",
            Attribute::Constitution => "Con",
            Attribute::Intelligence => "Int",
            Attribute::Wisdom => "Wis",
            Attribute::Charisma => "Cha",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Body location an item occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Slot {
    MainHand,
    OffHand,
    TwoHanded,
    Body,
    None,
}

impl Slot {
    /// Get all equipment slots
    pub fn all() -> &'static [Slot] {
        &[
            Slot::MainHand,
            Slot::OffHand,
            Slot::TwoHanded,
            Slot::Body,
            Slot::None,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::MainHand => "main-hand",
            Slot::OffHand => "off-hand",
            Slot::TwoHanded => "two-handed",
            Slot::Body => "body",
            Slot::None => "none",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grouping used for proficiencies on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProficiencyType {
    Armor,
    Weapon,
    Tool,
    SavingThrow,
    Skill,
    Instrument,
    Other,
}

impl ProficiencyType {
    /// Get all proficiency types in display order
    pub fn all() -> &'static [ProficiencyType] {
        &[
            ProficiencyType::Armor,
            ProficiencyType::Weapon,
            ProficiencyType::Tool,
            ProficiencyType::SavingThrow,
            ProficiencyType::Skill,
            ProficiencyType::Instrument,
            ProficiencyType::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProficiencyType::Armor => "Armor",
            ProficiencyType::Weapon => "Weapons",
            ProficiencyType::Tool => "Tools",
            ProficiencyType::SavingThrow => "Saving Throws",
            ProficiencyType::Skill => "Skills",
            ProficiencyType::Instrument => "Instruments",
            ProficiencyType::Other => "Other",
        }
    }
}

impl fmt::Display for ProficiencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single proficiency granted by race, class or background
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proficiency {
    pub key: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProficiencyType,
}

impl Proficiency {
    pub fn new(key: impl Into<String>, name: impl Into<String>, kind: ProficiencyType) -> Self {
        Proficiency {
            key: key.into(),
            name: name.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_serde_names() {
        #[derive(Deserialize)]
        struct Holder {
            slot: Slot,
        }
        let holder: Holder = toml::from_str(r#"slot = "two-handed""#).unwrap();
        assert_eq!(holder.slot, Slot::TwoHanded);
        assert_eq!(Slot::MainHand.to_string(), "main-hand");
    }

    #[test]
    fn test_attribute_order() {
        let all = Attribute::all();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Attribute::Strength);
        assert_eq!(all[5], Attribute::Charisma);
        assert_eq!(Attribute::Dexterity.to_string(), "Dex");
    }
}
