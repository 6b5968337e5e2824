//! Race and class descriptors resolved by a rules catalog

use crate::ability::AbilityBonus;
use crate::choice::Choice;
use crate::types::Proficiency;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    pub key: String,
    pub name: String,
    /// Walking speed in feet
    #[serde(default = "default_speed")]
    pub speed: u32,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonus>,
    #[serde(default)]
    pub starting_proficiencies: Vec<Proficiency>,
    #[serde(default)]
    pub proficiency_choices: Vec<Choice>,
}

fn default_speed() -> u32 {
    30
}

impl Race {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Race {
            key: key.into(),
            name: name.into(),
            speed: default_speed(),
            ability_bonuses: Vec::new(),
            starting_proficiencies: Vec::new(),
            proficiency_choices: Vec::new(),
        }
    }

    pub fn with_bonus(mut self, bonus: AbilityBonus) -> Self {
        self.ability_bonuses.push(bonus);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub key: String,
    pub name: String,
    /// Sides on the hit die (d8 = 8)
    pub hit_die: u32,
    #[serde(default)]
    pub proficiencies: Vec<Proficiency>,
    #[serde(default)]
    pub proficiency_choices: Vec<Choice>,
    /// Catalog keys of equipment granted at creation
    #[serde(default)]
    pub starting_equipment: Vec<String>,
}

impl Class {
    pub fn new(key: impl Into<String>, name: impl Into<String>, hit_die: u32) -> Self {
        Class {
            key: key.into(),
            name: name.into(),
            hit_die,
            proficiencies: Vec::new(),
            proficiency_choices: Vec::new(),
            starting_equipment: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Attribute;

    #[test]
    fn test_race_with_bonus() {
        let dwarf = Race::new("dwarf", "Dwarf")
            .with_bonus(AbilityBonus::new(Attribute::Constitution, 2))
            .with_bonus(AbilityBonus::new(Attribute::Strength, 1));
        assert_eq!(dwarf.speed, 30);
        assert_eq!(dwarf.ability_bonuses.len(), 2);
        assert_eq!(dwarf.ability_bonuses[0].attribute, Attribute::Constitution);
        assert_eq!(dwarf.ability_bonuses[1].bonus, 1);
    }

    #[test]
    fn test_parse_class_defaults() {
        let wizard: Class = toml::from_str(
            r#"
key = "wizard"
name = "Wizard"
hit_die = 6
"#,
        )
        .unwrap();
        assert_eq!(wizard, Class::new("wizard", "Wizard", 6));
    }
}
