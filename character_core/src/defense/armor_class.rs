//! Armor class - Defense derived from worn armor and dexterity

use crate::equipment::Equipment;
use crate::types::Slot;

/// Armor class with nothing equipped
pub const UNARMORED_BASE: i32 = 10;

/// Calculate armor class from equipped items
///
/// Starts at `base`. Body armor replaces the running total with its own base
/// value; every other armor piece (shields and the like) adds its base. Pieces
/// that allow it also add `dex_modifier`, with no cap and no de-duplication
/// across pieces. Non-armor items and armor without a descriptor are ignored.
///
/// Body armor is applied before the other pieces, so the result does not
/// depend on the order `equipped` is iterated in.
///
/// # Arguments
/// * `base` - Unarmored armor class
/// * `equipped` - Occupied slots and the item in each
/// * `dex_modifier` - Current dexterity modifier (0 if dexterity is unset)
pub fn calculate_armor_class<'a, I>(base: i32, equipped: I, dex_modifier: i32) -> i32
where
    I: IntoIterator<Item = (Slot, &'a Equipment)>,
{
    let mut body = None;
    let mut auxiliary: i32 = 0;

    for (slot, item) in equipped {
        let Some(ac) = item.armor_class() else {
            continue;
        };
        let contribution = if ac.dex_bonus {
            ac.base.saturating_add(dex_modifier)
        } else {
            ac.base
        };

        if slot == Slot::Body {
            body = Some(contribution);
        } else {
            auxiliary = auxiliary.saturating_add(contribution);
        }
    }

    body.unwrap_or(base).saturating_add(auxiliary)
}
