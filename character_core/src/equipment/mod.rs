//! Equipment - Items a character can own and equip

mod armor;
mod gear;
mod weapon;

pub use armor::{Armor, ArmorClass};
pub use gear::Gear;
pub use weapon::{Weapon, WeaponDamage};

use crate::types::Slot;

/// Category name for armor pieces, shields included
pub const CATEGORY_ARMOR: &str = "Armor";
/// Category name for weapons
pub const CATEGORY_WEAPON: &str = "Weapon";
/// Category name for everything else
pub const CATEGORY_GEAR: &str = "Gear";

/// Trait for anything that can sit in an equipment slot or an inventory
pub trait Equippable: Send + Sync {
    /// Catalog key for this item
    fn key(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Slot this item occupies when equipped
    fn slot(&self) -> Slot;

    /// Inventory grouping ("Armor", "Weapon", "Gear")
    fn category(&self) -> &str;
}

/// Any owned item
#[derive(Debug, Clone, PartialEq)]
pub enum Equipment {
    Weapon(Weapon),
    Armor(Armor),
    Gear(Gear),
}

impl Equipment {
    /// Armor-class descriptor, only present on armor that defines one
    pub fn armor_class(&self) -> Option<&ArmorClass> {
        match self {
            Equipment::Armor(armor) => armor.armor_class.as_ref(),
            _ => None,
        }
    }

    pub fn is_armor(&self) -> bool {
        matches!(self, Equipment::Armor(_))
    }

    fn inner(&self) -> &dyn Equippable {
        match self {
            Equipment::Weapon(weapon) => weapon,
            Equipment::Armor(armor) => armor,
            Equipment::Gear(gear) => gear,
        }
    }
}

impl Equippable for Equipment {
    fn key(&self) -> &str {
        self.inner().key()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn slot(&self) -> Slot {
        self.inner().slot()
    }

    fn category(&self) -> &str {
        self.inner().category()
    }
}

impl From<Weapon> for Equipment {
    fn from(weapon: Weapon) -> Self {
        Equipment::Weapon(weapon)
    }
}

impl From<Armor> for Equipment {
    fn from(armor: Armor) -> Self {
        Equipment::Armor(armor)
    }
}

impl From<Gear> for Equipment {
    fn from(gear: Gear) -> Self {
        Equipment::Gear(gear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_access() {
        let items: Vec<Equipment> = vec![
            Weapon::new("longsword", "Longsword", Slot::MainHand).into(),
            Armor::new("shield", "Shield", Slot::OffHand, ArmorClass::new(2, false)).into(),
            Gear::new("rope", "Hempen Rope").into(),
        ];

        let categories: Vec<&str> = items.iter().map(|i| i.category()).collect();
        assert_eq!(categories, vec![CATEGORY_WEAPON, CATEGORY_ARMOR, CATEGORY_GEAR]);
        assert_eq!(items[0].slot(), Slot::MainHand);
        assert_eq!(items[2].slot(), Slot::None);
        assert_eq!(items[1].name(), "Shield");
    }

    #[test]
    fn test_armor_class_only_on_armor() {
        let sword: Equipment = Weapon::new("longsword", "Longsword", Slot::MainHand).into();
        assert!(sword.armor_class().is_none());

        let leather: Equipment =
            Armor::new("leather", "Leather Armor", Slot::Body, ArmorClass::new(11, true)).into();
        let ac = leather.armor_class().unwrap();
        assert_eq!(ac.base, 11);
        assert!(ac.dex_bonus);
    }

    #[test]
    fn test_is_armor() {
        let shield = Armor::new("shield", "Shield", Slot::OffHand, ArmorClass::new(2, false))
            .with_category("Shield");
        assert_eq!(shield.armor_category, "Shield");

        let shield: Equipment = shield.into();
        let rope: Equipment = Gear::new("rope", "Hempen Rope").into();
        assert!(shield.is_armor());
        assert!(!rope.is_armor());
    }
}
