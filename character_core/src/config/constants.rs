//! Rules constants configuration

use super::ConfigError;
use crate::defense::UNARMORED_BASE;
use serde::{Deserialize, Serialize};

/// Tunable rules constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RulesConstants {
    #[serde(default)]
    pub armor: ArmorConstants,
    #[serde(default)]
    pub progression: ProgressionConstants,
}

impl RulesConstants {
    /// Check values that would make derived stats meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = &self.progression.level_thresholds;
        if thresholds.is_empty() {
            return Err(ConfigError::ValidationError(
                "progression.level_thresholds must not be empty".to_string(),
            ));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::ValidationError(
                "progression.level_thresholds must be strictly increasing".to_string(),
            ));
        }
        if self.progression.starting_level == 0 {
            return Err(ConfigError::ValidationError(
                "progression.starting_level must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorConstants {
    /// Armor class with no body armor worn
    #[serde(default = "default_base_class")]
    pub base_class: i32,
}

impl Default for ArmorConstants {
    fn default() -> Self {
        ArmorConstants {
            base_class: UNARMORED_BASE,
        }
    }
}

fn default_base_class() -> i32 {
    UNARMORED_BASE
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConstants {
    /// Level a freshly built character starts at
    #[serde(default = "default_starting_level")]
    pub starting_level: u32,
    /// Experience needed to reach level N+2, indexed from level 2
    #[serde(default = "default_level_thresholds")]
    pub level_thresholds: Vec<u32>,
}

impl ProgressionConstants {
    /// Experience needed to advance past `level`, or None at the cap
    pub fn next_level_threshold(&self, level: u32) -> Option<u32> {
        let index = usize::try_from(level.checked_sub(1)?).ok()?;
        self.level_thresholds.get(index).copied()
    }

    /// Level reached with `experience` points
    pub fn level_for_experience(&self, experience: u32) -> u32 {
        let reached = self
            .level_thresholds
            .iter()
            .take_while(|&&threshold| experience >= threshold)
            .count() as u32;
        (reached + 1).max(self.starting_level)
    }
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            starting_level: default_starting_level(),
            level_thresholds: default_level_thresholds(),
        }
    }
}

fn default_starting_level() -> u32 {
    1
}

fn default_level_thresholds() -> Vec<u32> {
    vec![
        300, 900, 2_700, 6_500, 14_000, 23_000, 34_000, 48_000, 64_000, 85_000, 100_000,
        120_000, 140_000, 165_000, 195_000, 225_000, 265_000, 305_000, 355_000,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_toml;

    #[test]
    fn test_default_constants() {
        let constants = RulesConstants::default();
        assert_eq!(constants.armor.base_class, 10);
        assert_eq!(constants.progression.starting_level, 1);
        assert_eq!(constants.progression.next_level_threshold(1), Some(300));
        assert!(constants.validate().is_ok());
    }

    #[test]
    fn test_parse_constants() {
        let toml = r#"
[armor]
base_class = 11

[progression]
starting_level = 1
level_thresholds = [100, 400]
"#;

        let constants: RulesConstants = parse_toml(toml).unwrap();
        assert_eq!(constants.armor.base_class, 11);
        assert_eq!(constants.progression.next_level_threshold(2), Some(400));
        assert_eq!(constants.progression.next_level_threshold(3), None);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let constants: RulesConstants = parse_toml("").unwrap();
        assert_eq!(constants, RulesConstants::default());
    }

    #[test]
    fn test_level_for_experience() {
        let progression = ProgressionConstants::default();
        assert_eq!(progression.level_for_experience(0), 1);
        assert_eq!(progression.level_for_experience(299), 1);
        assert_eq!(progression.level_for_experience(300), 2);
        assert_eq!(progression.level_for_experience(1_000), 3);
        assert_eq!(progression.level_for_experience(1_000_000), 20);
    }

    #[test]
    fn test_validate_rejects_unordered_thresholds() {
        let mut constants = RulesConstants::default();
        constants.progression.level_thresholds = vec![900, 300];
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
