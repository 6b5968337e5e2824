//! character_core - Character aggregate and rules engine for tabletop RPGs
//!
//! This library provides:
//! - Character: one lock-guarded aggregate per player character
//! - AbilityScore: raw scores, table modifiers and stacked bonuses
//! - Equipment: weapons, armor and gear behind one `Equippable` capability
//! - Armor class derivation from worn armor and dexterity
//! - Collaborator contracts for rules content and persistence

pub mod ability;
pub mod builder;
pub mod catalog;
pub mod character;
pub mod choice;
pub mod config;
pub mod defense;
pub mod descriptor;
pub mod dice;
pub mod equipment;
pub mod prelude;
pub mod repository;
pub mod types;

// Re-export core types for convenience
pub use ability::{AbilityBonus, AbilityScore};
pub use builder::CharacterBuilder;
pub use catalog::{CatalogError, ContentCatalog, RulesCatalog};
pub use character::{Character, CharacterSheet, Phase};
pub use choice::{Choice, ChoiceOption, ChoiceStatus, ChoiceType, ReferenceItem};
pub use config::{default_content, ConfigError, ContentConfig, RulesConstants};
pub use defense::calculate_armor_class;
pub use descriptor::{Class, Race};
pub use dice::RollResult;
pub use equipment::{Armor, ArmorClass, Equipment, Equippable, Gear, Weapon};
pub use repository::{CharacterRepository, InMemoryRepository, RepositoryError};
pub use types::{Attribute, Proficiency, ProficiencyType, Slot};
