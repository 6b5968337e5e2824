//! CharacterBuilder - Walks an empty character through creation

use crate::catalog::{CatalogError, RulesCatalog};
use crate::character::Character;
use crate::dice::roll_ability_score;
use crate::equipment::Equippable;
use crate::types::{Attribute, Slot};
use rand::Rng;

/// Builds a character from a race key, a class key and six ability scores
///
/// Scores are given in `Attribute::all()` order, or rolled (4d6, drop the
/// lowest) when none are given. Every key is resolved before the character is
/// touched, so a lookup failure leaves it unchanged.
pub struct CharacterBuilder<'a> {
    catalog: &'a dyn RulesCatalog,
    race: String,
    class: String,
    scores: Option<[i32; 6]>,
}

impl<'a> CharacterBuilder<'a> {
    pub fn new(catalog: &'a dyn RulesCatalog, race: &str, class: &str) -> Self {
        CharacterBuilder {
            catalog,
            race: race.to_string(),
            class: class.to_string(),
            scores: None,
        }
    }

    /// Use fixed scores instead of rolling
    pub fn with_scores(mut self, scores: [i32; 6]) -> Self {
        self.scores = Some(scores);
        self
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        character: &Character,
        rng: &mut R,
    ) -> Result<(), CatalogError> {
        let race = self.catalog.race(&self.race)?;
        let class = self.catalog.class(&self.class)?;
        let equipment = self.catalog.starting_equipment(&class)?;

        let scores = match self.scores {
            Some(scores) => scores,
            None => {
                let mut rolled = [0; 6];
                for score in rolled.iter_mut() {
                    let roll = roll_ability_score(rng);
                    *score = roll.total as i32;
                    character.add_roll(roll);
                }
                rolled
            }
        };

        tracing::info!(
            "Building {} the {} {}",
            character.name(),
            race.name,
            class.name
        );

        for (attribute, score) in Attribute::all().iter().zip(scores) {
            character.set_attribute(*attribute, score);
        }
        for bonus in &race.ability_bonuses {
            character.add_ability_bonus(*bonus);
        }

        for proficiency in race
            .starting_proficiencies
            .iter()
            .chain(&class.proficiencies)
        {
            character.add_proficiency(proficiency.clone());
        }
        for choice in race
            .proficiency_choices
            .iter()
            .chain(&class.proficiency_choices)
        {
            character.add_proficiency_choice(choice.clone());
        }

        character.set_race(race);
        character.set_class(class);
        character.start_level();

        for item in equipment {
            if item.slot() != Slot::None {
                character.equip(item.clone());
            }
            character.add_inventory(item);
        }

        character.set_hit_points();
        Ok(())
    }
}
