//! CharacterSheet - The unlocked state owned by a Character

use crate::ability::{AbilityBonus, AbilityScore};
use crate::choice::Choice;
use crate::config::ProgressionConstants;
use crate::defense::calculate_armor_class;
use crate::descriptor::{Class, Race};
use crate::dice::RollResult;
use crate::equipment::{Equipment, Equippable};
use crate::types::{Attribute, Proficiency, ProficiencyType, Slot};
use std::collections::{BTreeMap, HashMap};

/// Everything a character tracks, without any locking
///
/// `armor_class`, `max_hit_points` and `current_hit_points` are derived and
/// only change through `recalculate_armor_class` / `set_hit_points`.
#[derive(Debug, Clone)]
pub struct CharacterSheet {
    pub(crate) name: String,
    pub(crate) race: Option<Race>,
    pub(crate) class: Option<Class>,

    // === Combat stats ===
    pub(crate) speed: u32,
    pub(crate) hit_die: u32,
    pub(crate) armor_class: i32,
    pub(crate) max_hit_points: i32,
    pub(crate) current_hit_points: i32,
    pub(crate) level: u32,
    pub(crate) experience: u32,
    pub(crate) next_level: u32,

    pub(crate) attributes: BTreeMap<Attribute, AbilityScore>,
    pub(crate) equipped_slots: HashMap<Slot, Equipment>,
    pub(crate) proficiencies: BTreeMap<ProficiencyType, Vec<Proficiency>>,
    pub(crate) proficiency_choices: Vec<Choice>,
    pub(crate) inventory: BTreeMap<String, Vec<Equipment>>,
    pub(crate) rolls: Vec<RollResult>,

    /// Armor class with no body armor worn
    pub(crate) armor_base: i32,
    pub(crate) in_play: bool,
}

impl CharacterSheet {
    pub(crate) fn new(name: String, armor_base: i32) -> Self {
        CharacterSheet {
            name,
            race: None,
            class: None,
            speed: 0,
            hit_die: 0,
            armor_class: armor_base,
            max_hit_points: 0,
            current_hit_points: 0,
            level: 0,
            experience: 0,
            next_level: 0,
            attributes: BTreeMap::new(),
            equipped_slots: HashMap::new(),
            proficiencies: BTreeMap::new(),
            proficiency_choices: Vec::new(),
            inventory: BTreeMap::new(),
            rolls: Vec::new(),
            armor_base,
            in_play: false,
        }
    }

    // === Accessors ===

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn race(&self) -> Option<&Race> {
        self.race.as_ref()
    }

    pub fn class(&self) -> Option<&Class> {
        self.class.as_ref()
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn hit_die(&self) -> u32 {
        self.hit_die
    }

    pub fn armor_class(&self) -> i32 {
        self.armor_class
    }

    pub fn max_hit_points(&self) -> i32 {
        self.max_hit_points
    }

    pub fn current_hit_points(&self) -> i32 {
        self.current_hit_points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    /// Experience needed for the next level, 0 once capped
    pub fn next_level(&self) -> u32 {
        self.next_level
    }

    pub fn attribute(&self, attribute: Attribute) -> Option<&AbilityScore> {
        self.attributes.get(&attribute)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&Attribute, &AbilityScore)> {
        self.attributes.iter()
    }

    /// Modifier for an attribute, 0 when unset
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.attributes
            .get(&attribute)
            .map(AbilityScore::modifier)
            .unwrap_or(0)
    }

    pub fn equipped(&self, slot: Slot) -> Option<&Equipment> {
        self.equipped_slots.get(&slot)
    }

    pub fn all_equipped(&self) -> impl Iterator<Item = (&Slot, &Equipment)> {
        self.equipped_slots.iter()
    }

    pub fn proficiencies(&self, kind: ProficiencyType) -> &[Proficiency] {
        self.proficiencies
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn proficiency_choices(&self) -> &[Choice] {
        &self.proficiency_choices
    }

    pub fn inventory(&self, category: &str) -> &[Equipment] {
        self.inventory
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Total number of owned items across all categories
    pub fn inventory_len(&self) -> usize {
        self.inventory.values().map(Vec::len).sum()
    }

    pub fn rolls(&self) -> &[RollResult] {
        &self.rolls
    }

    // === Descriptors ===

    pub(crate) fn set_race(&mut self, race: Race) -> bool {
        if self.race.is_some() {
            return false;
        }
        self.speed = race.speed;
        self.race = Some(race);
        true
    }

    pub(crate) fn set_class(&mut self, class: Class) -> bool {
        if self.class.is_some() {
            return false;
        }
        self.hit_die = class.hit_die;
        self.class = Some(class);
        true
    }

    // === Attributes ===

    /// Record a raw score, keeping any bonus already stacked on the attribute
    pub(crate) fn set_attribute(&mut self, attribute: Attribute, score: i32) {
        self.attributes
            .entry(attribute)
            .and_modify(|existing| existing.set_score(score))
            .or_insert_with(|| AbilityScore::new(score));
    }

    pub(crate) fn add_ability_bonus(&mut self, bonus: AbilityBonus) {
        self.add_ability_score_bonus(bonus.attribute, bonus.bonus);
    }

    pub(crate) fn add_ability_score_bonus(&mut self, attribute: Attribute, amount: i32) {
        self.attributes
            .entry(attribute)
            .or_default()
            .add_bonus(amount);
    }

    // === Registries ===

    pub(crate) fn add_proficiency(&mut self, proficiency: Proficiency) {
        self.proficiencies
            .entry(proficiency.kind)
            .or_default()
            .push(proficiency);
    }

    pub(crate) fn add_inventory(&mut self, item: Equipment) {
        self.inventory
            .entry(item.category().to_string())
            .or_default()
            .push(item);
    }

    pub(crate) fn add_proficiency_choice(&mut self, choice: Choice) {
        self.proficiency_choices.push(choice);
    }

    pub(crate) fn add_roll(&mut self, roll: RollResult) {
        self.rolls.push(roll);
    }

    // === Derived stats ===

    /// Recompute max and current hit points from hit die and constitution
    ///
    /// Leaves everything untouched when attributes are empty, constitution is
    /// missing or no hit die is set.
    pub(crate) fn set_hit_points(&mut self) -> bool {
        if self.attributes.is_empty() || self.hit_die == 0 {
            return false;
        }
        let Some(constitution) = self.attributes.get(&Attribute::Constitution) else {
            return false;
        };

        self.max_hit_points = (self.hit_die as i32).saturating_add(constitution.modifier());
        self.current_hit_points = self.max_hit_points;
        true
    }

    pub(crate) fn recalculate_armor_class(&mut self) {
        let dex = self.modifier(Attribute::Dexterity);
        self.armor_class = calculate_armor_class(
            self.armor_base,
            self.equipped_slots.iter().map(|(slot, item)| (*slot, item)),
            dex,
        );
    }

    /// Add experience, levelling up as thresholds are crossed
    ///
    /// Returns true if the level changed.
    pub(crate) fn add_experience(&mut self, amount: u32, progression: &ProgressionConstants) -> bool {
        self.experience = self.experience.saturating_add(amount);
        let reached = progression.level_for_experience(self.experience);
        let levelled = reached > self.level;
        if levelled {
            self.level = reached;
        }
        self.next_level = progression.next_level_threshold(self.level).unwrap_or(0);
        levelled
    }

    pub(crate) fn start_level(&mut self, progression: &ProgressionConstants) {
        self.level = progression.starting_level;
        self.next_level = progression.next_level_threshold(self.level).unwrap_or(0);
    }
}
