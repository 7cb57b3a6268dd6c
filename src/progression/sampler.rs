//! Rarity sampling and cost/XP scaling

use rand::Rng;

use crate::data::{Bounds, Rarity, RarityWeights};

/// Roll a rarity from a tier's distribution
pub fn sample_rarity(weights: &RarityWeights, rng: &mut impl Rng) -> Rarity {
    let draw: f64 = rng.gen();
    pick_rarity(weights, draw)
}

/// Return the first rarity whose cumulative probability reaches `draw`.
///
/// A table that sums to slightly under the draw (float rounding) yields
/// `Rarity::Common`.
pub fn pick_rarity(weights: &RarityWeights, draw: f64) -> Rarity {
    let mut cumulative = 0.0;
    for (rarity, probability) in weights.entries() {
        cumulative += probability;
        if draw <= cumulative {
            return *rarity;
        }
    }
    Rarity::Common
}

/// Which kind of entity a value is being scaled for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Skill,
    Ability,
}

impl Role {
    /// Abilities cost less than skills
    pub fn cost_factor(&self) -> f64 {
        match self {
            Role::Skill => 1.0,
            Role::Ability => 0.3,
        }
    }

    /// Abilities give less XP than skills
    pub fn xp_factor(&self) -> f64 {
        match self {
            Role::Skill => 1.0,
            Role::Ability => 0.5,
        }
    }
}

/// A drawn base value and its scaled result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledRoll {
    pub base: u32,
    pub value: u32,
}

/// `floor(base * multiplier * factor)`, truncating toward zero
pub fn scale_value(base: u32, multiplier: f64, factor: f64) -> u32 {
    (base as f64 * multiplier * factor) as u32
}

/// Draw a base from `range` and scale it by rarity and `factor`
pub fn scale(range: Bounds, rarity: Rarity, factor: f64, rng: &mut impl Rng) -> ScaledRoll {
    let base = range.roll(rng);
    ScaledRoll {
        base,
        value: scale_value(base, rarity.multiplier(), factor),
    }
}

/// Roll a cost for the given role
pub fn roll_cost(range: Bounds, rarity: Rarity, role: Role, rng: &mut impl Rng) -> ScaledRoll {
    scale(range, rarity, role.cost_factor(), rng)
}

/// Roll an XP reward for the given role
pub fn roll_xp(range: Bounds, rarity: Rarity, role: Role, rng: &mut impl Rng) -> ScaledRoll {
    scale(range, rarity, role.xp_factor(), rng)
}
