//! Human-readable character summary

use super::sheet::CharacterSheet;
use crate::equipment::Equippable;
use crate::types::{Attribute, ProficiencyType, Slot};
use std::fmt;

pub(crate) const NOT_FULLY_CREATED: &str = "Character not fully created";

impl fmt::Display for CharacterSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (Some(race), Some(class)) = (&self.race, &self.class) else {
            return f.write_str(NOT_FULLY_CREATED);
        };

        writeln!(f, "{} the {} {}", self.name, race.name, class.name)?;

        writeln!(f, "**Rolls**:")?;
        let rolls: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        writeln!(f, "{}", rolls.join(", "))?;

        writeln!(f)?;
        writeln!(f, "**Stats**:")?;
        writeln!(f, "  -  Speed: {}", self.speed)?;
        writeln!(f, "  -  Hit Die: {}", self.hit_die)?;
        writeln!(f, "  -  AC: {}", self.armor_class)?;
        writeln!(f, "  -  Max Hit Points: {}", self.max_hit_points)?;
        writeln!(f, "  -  Current Hit Points: {}", self.current_hit_points)?;
        writeln!(f, "  -  Level: {}", self.level)?;
        writeln!(f, "  -  Experience: {}", self.experience)?;

        writeln!(f)?;
        writeln!(f, "**Attributes**:")?;
        for attribute in Attribute::all() {
            if let Some(score) = self.attributes.get(attribute) {
                writeln!(f, "  -  {}: {}", attribute, score)?;
            }
        }

        if !self.equipped_slots.is_empty() {
            writeln!(f)?;
            writeln!(f, "**Equipped**:")?;
            for slot in Slot::all() {
                if let Some(item) = self.equipped_slots.get(slot) {
                    writeln!(f, "  -  {}: {}", slot, item.name())?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "**Proficiencies**:")?;
        for kind in ProficiencyType::all() {
            let Some(list) = self.proficiencies.get(kind) else {
                continue;
            };
            writeln!(f, "  -  **{}**:", kind)?;
            for proficiency in list {
                writeln!(f, "    -  {}", proficiency.name)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "**Inventory**:")?;
        for (category, items) in &self.inventory {
            writeln!(f, "  -  **{}**:", category)?;
            for item in items {
                writeln!(f, "    -  {}", item.name())?;
            }
        }
        Ok(())
    }
}
