//! Slot management - Which item occupies which body slot

use super::sheet::CharacterSheet;
use crate::equipment::{Equipment, Equippable};
use crate::types::Slot;

impl CharacterSheet {
    /// Equip an item into its declared slot
    ///
    /// - Two-handed items clear both hands first.
    /// - A main-hand item pushes the current main-hand item into the off-hand,
    ///   dropping whatever the off-hand held.
    /// - A main-hand or off-hand item clears a two-handed item.
    /// - Anything else replaces the current occupant of its slot.
    ///
    /// Armor class is recomputed afterwards.
    pub(crate) fn equip(&mut self, item: Equipment) {
        let slot = item.slot();
        match slot {
            Slot::TwoHanded => {
                self.clear_slot(Slot::MainHand);
                self.clear_slot(Slot::OffHand);
            }
            Slot::MainHand => {
                self.clear_slot(Slot::TwoHanded);
                if let Some(previous) = self.equipped_slots.remove(&Slot::MainHand) {
                    tracing::debug!(
                        "{}: moving {} to {}",
                        self.name,
                        previous.name(),
                        Slot::OffHand
                    );
                    self.equipped_slots.insert(Slot::OffHand, previous);
                }
            }
            Slot::OffHand => {
                self.clear_slot(Slot::TwoHanded);
            }
            Slot::Body | Slot::None => {}
        }

        self.equipped_slots.insert(slot, item);
        self.recalculate_armor_class();
    }

    /// Empty the slot `item` declares, whatever currently occupies it
    ///
    /// Armor class is left at its last computed value.
    pub(crate) fn unequip(&mut self, item: &Equipment) -> Option<Equipment> {
        self.equipped_slots.remove(&item.slot())
    }

    fn clear_slot(&mut self, slot: Slot) {
        if let Some(removed) = self.equipped_slots.remove(&slot) {
            tracing::debug!("{}: unequipped {} from {}", self.name, removed.name(), slot);
        }
    }
}
