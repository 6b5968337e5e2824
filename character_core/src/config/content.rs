//! Rules content (races, classes, equipment) loading

use super::ConfigError;
use crate::descriptor::{Class, Race};
use crate::equipment::{Armor, Gear, Weapon};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Everything a catalog can resolve, as read from a content file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub races: Vec<Race>,
    #[serde(default)]
    pub classes: Vec<Class>,
    #[serde(default)]
    pub weapons: Vec<Weapon>,
    #[serde(default)]
    pub armor: Vec<Armor>,
    #[serde(default)]
    pub gear: Vec<Gear>,
}

impl ContentConfig {
    /// Reject duplicate keys, zero hit dice and dangling equipment references
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut races = HashSet::new();
        for race in &self.races {
            if !races.insert(race.key.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate race key '{}'",
                    race.key
                )));
            }
        }

        let mut equipment = HashSet::new();
        let keys = self
            .weapons
            .iter()
            .map(|w| w.key.as_str())
            .chain(self.armor.iter().map(|a| a.key.as_str()))
            .chain(self.gear.iter().map(|g| g.key.as_str()));
        for key in keys {
            if !equipment.insert(key) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate equipment key '{}'",
                    key
                )));
            }
        }

        let mut classes = HashSet::new();
        for class in &self.classes {
            if !classes.insert(class.key.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate class key '{}'",
                    class.key
                )));
            }
            if class.hit_die == 0 {
                return Err(ConfigError::ValidationError(format!(
                    "class '{}' has a zero hit die",
                    class.key
                )));
            }
            if let Some(missing) = class
                .starting_equipment
                .iter()
                .find(|key| !equipment.contains(key.as_str()))
            {
                return Err(ConfigError::ValidationError(format!(
                    "class '{}' starts with unknown equipment '{}'",
                    class.key, missing
                )));
            }
        }

        Ok(())
    }
}

/// Load and validate rules content from a TOML file
pub fn load_content(path: &Path) -> Result<ContentConfig, ConfigError> {
    let content: ContentConfig = super::load_toml(path)?;
    content.validate()?;
    Ok(content)
}

/// Parse and validate rules content from a TOML string
pub fn parse_content(content: &str) -> Result<ContentConfig, ConfigError> {
    let content: ContentConfig = super::parse_toml(content)?;
    content.validate()?;
    Ok(content)
}

/// Get the bundled rules content
pub fn default_content() -> ContentConfig {
    let toml = include_str!("../../config/content.toml");
    parse_content(toml).unwrap_or_else(|e| {
        tracing::warn!("Bundled content failed to load: {}", e);
        ContentConfig::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_loads() {
        let content = default_content();
        assert!(content.races.iter().any(|r| r.key == "dwarf"));
        assert!(content.classes.iter().any(|c| c.key == "fighter"));
        assert!(content.armor.iter().any(|a| a.key == "shield"));
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_parse_content() {
        let toml = r#"
[[races]]
key = "elf"
name = "Elf"
ability_bonuses = [{ attribute = "dexterity", bonus = 2 }]

[[classes]]
key = "rogue"
name = "Rogue"
hit_die = 8
starting_equipment = ["dagger"]

[[weapons]]
key = "dagger"
name = "Dagger"
"#;
        let content = parse_content(toml).unwrap();
        assert_eq!(content.races[0].speed, 30);
        assert_eq!(content.races[0].ability_bonuses[0].bonus, 2);
        assert_eq!(content.classes[0].hit_die, 8);
    }

    #[test]
    fn test_rejects_dangling_equipment() {
        let toml = r#"
[[classes]]
key = "rogue"
name = "Rogue"
hit_die = 8
starting_equipment = ["rapier"]
"#;
        let err = parse_content(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("rapier"));
    }

    #[test]
    fn test_rejects_duplicate_equipment_keys() {
        let toml = r#"
[[weapons]]
key = "club"
name = "Club"

[[gear]]
key = "club"
name = "Club (prop)"
"#;
        assert!(parse_content(toml).is_err());
    }
}
