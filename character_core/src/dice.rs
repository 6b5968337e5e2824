//! Dice rolling and roll results kept in a character's history

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of rolling `count` dice with `sides` faces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    pub count: u32,
    pub sides: u32,
    /// Every die rolled, in roll order
    pub rolls: Vec<u32>,
    /// Die discarded before totalling, if any
    pub dropped: Option<u32>,
    pub total: u32,
}

impl fmt::Display for RollResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rolls: Vec<String> = self.rolls.iter().map(|r| r.to_string()).collect();
        write!(f, "{} [{}]", self.total, rolls.join(" "))
    }
}

/// Roll `count`d`sides`. A zero-sided die always rolls 0.
pub fn roll<R: Rng + ?Sized>(count: u32, sides: u32, rng: &mut R) -> RollResult {
    let rolls: Vec<u32> = (0..count)
        .map(|_| if sides == 0 { 0 } else { rng.gen_range(1..=sides) })
        .collect();
    let total = rolls.iter().sum();
    RollResult {
        count,
        sides,
        rolls,
        dropped: None,
        total,
    }
}

/// Roll 4d6 and drop the lowest die
pub fn roll_ability_score<R: Rng + ?Sized>(rng: &mut R) -> RollResult {
    let mut result = roll(4, 6, rng);
    if let Some(&lowest) = result.rolls.iter().min() {
        result.dropped = Some(lowest);
        result.total -= lowest;
    }
    result
}
