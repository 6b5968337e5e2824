//! Prelude module for convenient imports
//!
//! ```rust
//! use character_core::prelude::*;
//! ```

// Aggregate
pub use crate::character::{Character, CharacterSheet, Phase};
pub use crate::ability::{AbilityBonus, AbilityScore};
pub use crate::types::{Attribute, Proficiency, ProficiencyType, Slot};
pub use crate::descriptor::{Class, Race};

// Equipment
pub use crate::equipment::{Armor, ArmorClass, Equipment, Equippable, Gear, Weapon};

// Collaborators
pub use crate::builder::CharacterBuilder;
pub use crate::catalog::{ContentCatalog, RulesCatalog};
pub use crate::repository::{CharacterRepository, InMemoryRepository};

// Config
pub use crate::config::{default_content, RulesConstants};
