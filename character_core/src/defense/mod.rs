//! Defense system - Armor class

mod armor_class;

pub use armor_class::{calculate_armor_class, UNARMORED_BASE};
