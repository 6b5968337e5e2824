//! Character - The aggregate root guarding a CharacterSheet behind one lock

mod describe;
mod sheet;
mod slots;

pub use sheet::CharacterSheet;

use crate::ability::{AbilityBonus, AbilityScore};
use crate::choice::{Choice, ReferenceItem};
use crate::config::RulesConstants;
use crate::descriptor::{Class, Race};
use crate::dice::RollResult;
use crate::equipment::{Equipment, Equippable};
use crate::types::{Attribute, Proficiency, Slot};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lifecycle a character moves through, inferred from its state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No attributes recorded yet
    Uninitialized,
    /// Attributes recorded, not yet handed off for play
    Built,
    /// Handed off for play
    InPlay,
}

/// A player character
///
/// Every mutation takes the single write lock for its whole duration, so
/// concurrent request handlers can share one `Arc<Character>`. Reads take the
/// shared side of the same lock and never see a half-applied mutation.
///
/// No operation fails: missing preconditions are silent no-ops and slot
/// conflicts resolve by overwriting.
#[derive(Debug)]
pub struct Character {
    id: String,
    owner_id: String,
    rules: RulesConstants,
    state: RwLock<CharacterSheet>,
}

impl Character {
    /// Create an empty character using the default rules constants
    pub fn new(id: impl Into<String>, owner_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_rules(id, owner_id, name, RulesConstants::default())
    }

    /// Create an empty character with explicit rules constants
    pub fn with_rules(
        id: impl Into<String>,
        owner_id: impl Into<String>,
        name: impl Into<String>,
        rules: RulesConstants,
    ) -> Self {
        let sheet = CharacterSheet::new(name.into(), rules.armor.base_class);
        Character {
            id: id.into(),
            owner_id: owner_id.into(),
            rules,
            state: RwLock::new(sheet),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn rules(&self) -> &RulesConstants {
        &self.rules
    }

    // A poisoned lock still holds a structurally valid sheet: every mutation
    // finishes its map writes before anything that could panic.
    fn read(&self) -> RwLockReadGuard<'_, CharacterSheet> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CharacterSheet> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // === Reads ===

    /// Run `f` against a consistent view of the sheet
    pub fn with_sheet<T>(&self, f: impl FnOnce(&CharacterSheet) -> T) -> T {
        f(&self.read())
    }

    /// Clone the current sheet
    pub fn snapshot(&self) -> CharacterSheet {
        self.read().clone()
    }

    pub fn name(&self) -> String {
        self.read().name.clone()
    }

    pub fn armor_class(&self) -> i32 {
        self.read().armor_class
    }

    pub fn max_hit_points(&self) -> i32 {
        self.read().max_hit_points
    }

    pub fn current_hit_points(&self) -> i32 {
        self.read().current_hit_points
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<AbilityScore> {
        self.read().attribute(attribute).copied()
    }

    pub fn equipped(&self, slot: Slot) -> Option<Equipment> {
        self.read().equipped(slot).cloned()
    }

    pub fn phase(&self) -> Phase {
        let sheet = self.read();
        if sheet.in_play {
            Phase::InPlay
        } else if sheet.attributes.is_empty() {
            Phase::Uninitialized
        } else {
            Phase::Built
        }
    }

    /// Multi-line summary for display
    pub fn describe(&self) -> String {
        self.read().to_string()
    }

    // === Descriptors ===

    /// Set the race once; later calls are ignored. Also sets speed.
    pub fn set_race(&self, race: Race) -> bool {
        let mut sheet = self.write();
        let race_name = race.name.clone();
        let applied = sheet.set_race(race);
        if applied {
            tracing::debug!("{}: race set to {}", self.id, race_name);
        }
        applied
    }

    /// Set the class once; later calls are ignored. Also sets the hit die.
    pub fn set_class(&self, class: Class) -> bool {
        let mut sheet = self.write();
        let class_name = class.name.clone();
        let applied = sheet.set_class(class);
        if applied {
            tracing::debug!("{}: class set to {}", self.id, class_name);
        }
        applied
    }

    // === Attributes ===

    pub fn set_attribute(&self, attribute: Attribute, score: i32) {
        self.write().set_attribute(attribute, score);
        tracing::debug!("{}: {} set to {}", self.id, attribute, score);
    }

    pub fn add_ability_bonus(&self, bonus: AbilityBonus) {
        self.write().add_ability_bonus(bonus);
        tracing::debug!("{}: {} bonus {:+}", self.id, bonus.attribute, bonus.bonus);
    }

    /// Same effect as `add_ability_bonus`
    pub fn add_ability_score_bonus(&self, attribute: Attribute, amount: i32) {
        self.add_ability_bonus(AbilityBonus::new(attribute, amount));
    }

    // === Equipment ===

    /// Equip `item` into its slot and recompute armor class
    pub fn equip(&self, item: Equipment) {
        let mut sheet = self.write();
        tracing::debug!("{}: equipping {} to {}", self.id, item.name(), item.slot());
        sheet.equip(item);
        tracing::trace!("{}: armor class now {}", self.id, sheet.armor_class);
    }

    /// Empty the slot `item` declares, returning what was there
    ///
    /// Armor class is not recomputed; see `recalculate_armor_class`.
    pub fn unequip(&self, item: &Equipment) -> Option<Equipment> {
        let removed = self.write().unequip(item);
        if let Some(ref removed) = removed {
            tracing::debug!("{}: unequipped {} from {}", self.id, removed.name(), item.slot());
        }
        removed
    }

    pub fn recalculate_armor_class(&self) -> i32 {
        let mut sheet = self.write();
        sheet.recalculate_armor_class();
        sheet.armor_class
    }

    // === Registries ===

    pub fn add_proficiency(&self, proficiency: Proficiency) {
        tracing::debug!("{}: proficiency {}", self.id, proficiency.name);
        self.write().add_proficiency(proficiency);
    }

    pub fn add_inventory(&self, item: Equipment) {
        tracing::debug!("{}: adding {} to inventory", self.id, item.name());
        self.write().add_inventory(item);
    }

    pub fn add_proficiency_choice(&self, choice: Choice) {
        self.write().add_proficiency_choice(choice);
    }

    /// Pick `option_key` on the pending choice `choice_key`
    ///
    /// Returns the picked reference so the caller can resolve and grant it.
    pub fn select_proficiency_choice(
        &self,
        choice_key: &str,
        option_key: &str,
    ) -> Option<ReferenceItem> {
        let mut sheet = self.write();
        let choice = sheet
            .proficiency_choices
            .iter_mut()
            .find(|c| c.key == choice_key)?;
        let reference = choice.select(option_key)?.reference().cloned();
        tracing::debug!("{}: selected {} for {}", self.id, option_key, choice_key);
        reference
    }

    pub fn add_roll(&self, roll: RollResult) {
        self.write().add_roll(roll);
    }

    // === Derived stats ===

    /// Recompute hit points from hit die and constitution
    ///
    /// Returns false, changing nothing, until both are available.
    pub fn set_hit_points(&self) -> bool {
        let mut sheet = self.write();
        let applied = sheet.set_hit_points();
        if applied {
            tracing::debug!("{}: max hit points {}", self.id, sheet.max_hit_points);
        }
        applied
    }

    /// Put the character at the configured starting level
    pub fn start_level(&self) {
        self.write().start_level(&self.rules.progression);
    }

    /// Add experience; returns true on level-up
    pub fn add_experience(&self, amount: u32) -> bool {
        let mut sheet = self.write();
        let levelled = sheet.add_experience(amount, &self.rules.progression);
        if levelled {
            tracing::info!("{} reached level {}", sheet.name, sheet.level);
        }
        levelled
    }

    pub fn mark_in_play(&self) {
        self.write().in_play = true;
    }
}
