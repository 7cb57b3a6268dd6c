//! Rarity model
//!
//! Rarity labels, their cost/XP multipliers, and per-tier probability tables.

use serde::{Deserialize, Serialize};

/// Quality label attached to every skill and ability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

impl Rarity {
    /// All rarities from lowest to highest
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }

    /// Get numeric value for sorting (higher = rarer)
    pub fn sort_value(&self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::Mythic => 5,
        }
    }

    /// Scale factor applied to base cost and base XP
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.5,
            Rarity::Epic => 4.0,
            Rarity::Legendary => 7.0,
            Rarity::Mythic => 12.0,
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered (rarity, probability) pairs for one tier.
///
/// Order matters: sampling walks the list front to back accumulating
/// probabilities, so entries are kept lowest rarity first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RarityWeights(pub Vec<(Rarity, f64)>);

impl RarityWeights {
    /// Build a table from probabilities given in `Rarity::ALL` order
    pub fn from_probabilities(probabilities: [f64; 6]) -> Self {
        Self(Rarity::ALL.into_iter().zip(probabilities).collect())
    }

    pub fn entries(&self) -> &[(Rarity, f64)] {
        &self.0
    }

    /// Configured probability for a rarity (0 if absent)
    pub fn probability(&self, rarity: Rarity) -> f64 {
        self.0
            .iter()
            .filter(|(r, _)| *r == rarity)
            .map(|(_, p)| *p)
            .sum()
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, p)| p).sum()
    }
}
