//! AbilityScore - Raw attribute score and its derived modifier

use crate::types::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flat modifier for a raw score, before any bonuses
///
/// | score | 1  | 2-3 | 4-5 | 6-7 | 8-9 | 10-11 | 12-13 | 14-15 | 16-17 | 18-19 | 20 |
/// |-------|----|-----|-----|-----|-----|-------|-------|-------|-------|-------|----|
/// | mod   | -5 | -4  | -3  | -2  | -1  |   0   |  +1   |  +2   |  +3   |  +4   | +5 |
///
/// Scores outside 1-20 contribute nothing.
pub fn score_modifier(score: i32) -> i32 {
    match score {
        1 => -5,
        2..=3 => -4,
        4..=5 => -3,
        6..=7 => -2,
        8..=9 => -1,
        10..=11 => 0,
        12..=13 => 1,
        14..=15 => 2,
        16..=17 => 3,
        18..=19 => 4,
        20 => 5,
        _ => 0,
    }
}

/// Raw score plus the modifier derived from it
///
/// `bonus` is the running total of every `add_bonus` call. It is kept apart
/// from the table value so that rescoring keeps racial or item bonuses:
/// `modifier == score_modifier(score) + bonus` always holds, saturating at
/// the `i32` bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScore {
    score: i32,
    modifier: i32,
    bonus: i32,
}

impl AbilityScore {
    /// Create a score with no accumulated bonus
    pub fn new(score: i32) -> Self {
        AbilityScore {
            score,
            modifier: score_modifier(score),
            bonus: 0,
        }
    }

    /// Replace the raw score, keeping accumulated bonuses
    pub fn set_score(&mut self, score: i32) {
        self.score = score;
        self.modifier = score_modifier(score).saturating_add(self.bonus);
    }

    /// Stack a bonus onto the modifier. No deduplication is done.
    pub fn add_bonus(&mut self, amount: i32) {
        self.bonus = self.bonus.saturating_add(amount);
        self.modifier = self.modifier.saturating_add(amount);
    }

    /// Raw score as last set
    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    /// Total of all bonuses applied so far
    pub fn bonus(&self) -> i32 {
        self.bonus
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.score, self.modifier)
    }
}

/// A bonus to one attribute, e.g. from a race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBonus {
    pub attribute: Attribute,
    pub bonus: i32,
}

impl AbilityBonus {
    pub fn new(attribute: Attribute, bonus: i32) -> Self {
        AbilityBonus { attribute, bonus }
    }
}
