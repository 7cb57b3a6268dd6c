//! Tier configuration table
//!
//! Each tier is a level bracket with its own skill counts, ability counts,
//! cost and XP ranges, and rarity distribution.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rarity::RarityWeights;

/// Level-range bracket grouping skills and abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Life,
    Beginner,
    Novice,
    Hard,
    Expert,
    Master,
}

impl Tier {
    /// All tiers in generation order
    pub const ALL: [Tier; 6] = [
        Tier::Life,
        Tier::Beginner,
        Tier::Novice,
        Tier::Hard,
        Tier::Expert,
        Tier::Master,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tier::Life => "Life",
            Tier::Beginner => "Beginner",
            Tier::Novice => "Novice",
            Tier::Hard => "Hard",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
        }
    }

    /// Lowercase form used inside generated identifiers
    pub fn slug(&self) -> &'static str {
        match self {
            Tier::Life => "life",
            Tier::Beginner => "beginner",
            Tier::Novice => "novice",
            Tier::Hard => "hard",
            Tier::Expert => "expert",
            Tier::Master => "master",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive integer range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Draw a value uniformly from `min..=max`
    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Generation parameters for a single tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub tier: Tier,
    pub min_level: u32,
    pub max_level: u32,
    /// Number of skills generated for the tier
    pub skill_count: Bounds,
    /// Number of abilities generated per skill
    pub abilities_per_skill: Bounds,
    /// Range the unscaled cost is drawn from
    pub base_cost: Bounds,
    /// Range the unscaled XP is drawn from
    pub base_xp: Bounds,
    pub rarity: RarityWeights,
}

/// The full tier table, in generation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTable {
    pub tiers: Vec<TierConfig>,
}

impl TierTable {
    /// Find the configuration for a tier
    pub fn get(&self, tier: Tier) -> Option<&TierConfig> {
        self.tiers.iter().find(|c| c.tier == tier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierConfig> {
        self.tiers.iter()
    }
}

impl Default for TierTable {
    fn default() -> Self {
        default_tier_table()
    }
}

/// Built-in tier table
pub fn default_tier_table() -> TierTable {
    TierTable {
        tiers: vec![
            TierConfig {
                tier: Tier::Life,
                min_level: 1,
                max_level: 5,
                skill_count: Bounds::new(4, 6),
                abilities_per_skill: Bounds::new(8, 12),
                base_cost: Bounds::new(1, 10),
                base_xp: Bounds::new(25, 50),
                rarity: RarityWeights::from_probabilities([0.60, 0.30, 0.10, 0.00, 0.00, 0.00]),
            },
            TierConfig {
                tier: Tier::Beginner,
                min_level: 6,
                max_level: 20,
                skill_count: Bounds::new(6, 9),
                abilities_per_skill: Bounds::new(10, 14),
                base_cost: Bounds::new(5, 25),
                base_xp: Bounds::new(50, 100),
                rarity: RarityWeights::from_probabilities([0.40, 0.35, 0.20, 0.05, 0.00, 0.00]),
            },
            TierConfig {
                tier: Tier::Novice,
                min_level: 21,
                max_level: 50,
                skill_count: Bounds::new(8, 11),
                abilities_per_skill: Bounds::new(12, 16),
                base_cost: Bounds::new(10, 50),
                base_xp: Bounds::new(100, 300),
                rarity: RarityWeights::from_probabilities([0.25, 0.35, 0.25, 0.13, 0.02, 0.00]),
            },
            TierConfig {
                tier: Tier::Hard,
                min_level: 51,
                max_level: 80,
                skill_count: Bounds::new(10, 13),
                abilities_per_skill: Bounds::new(14, 18),
                base_cost: Bounds::new(25, 100),
                base_xp: Bounds::new(300, 600),
                rarity: RarityWeights::from_probabilities([0.15, 0.30, 0.30, 0.20, 0.05, 0.00]),
            },
            TierConfig {
                tier: Tier::Expert,
                min_level: 81,
                max_level: 140,
                skill_count: Bounds::new(12, 15),
                abilities_per_skill: Bounds::new(16, 20),
                base_cost: Bounds::new(50, 150),
                base_xp: Bounds::new(600, 1200),
                rarity: RarityWeights::from_probabilities([0.08, 0.22, 0.30, 0.28, 0.10, 0.02]),
            },
            TierConfig {
                tier: Tier::Master,
                min_level: 141,
                max_level: 200,
                skill_count: Bounds::new(15, 19),
                abilities_per_skill: Bounds::new(18, 25),
                base_cost: Bounds::new(100, 225),
                base_xp: Bounds::new(1200, 2500),
                rarity: RarityWeights::from_probabilities([0.03, 0.12, 0.25, 0.35, 0.20, 0.05]),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_table_covers_every_tier_in_order() {
        let table = default_tier_table();
        let order: Vec<Tier> = table.iter().map(|c| c.tier).collect();
        assert_eq!(order, Tier::ALL.to_vec());
    }

    #[test]
    fn test_default_table_is_well_formed() {
        for config in default_tier_table().iter() {
            assert!(config.min_level <= config.max_level, "{}", config.tier);
            assert!(config.skill_count.is_valid());
            assert!(config.abilities_per_skill.is_valid());
            assert!(config.base_cost.is_valid());
            assert!(config.base_xp.is_valid());
            assert!((config.rarity.total() - 1.0).abs() < 1e-9, "{} rarity sums to {}", config.tier, config.rarity.total());
        }
    }

    #[test]
    fn test_level_brackets_are_contiguous() {
        let table = default_tier_table();
        for pair in table.tiers.windows(2) {
            assert_eq!(pair[0].max_level + 1, pair[1].min_level);
        }
    }

    #[test]
    fn test_bounds_roll_stays_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(3, 5);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = bounds.roll(&mut rng);
            assert!(bounds.contains(v));
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "both endpoints should be reachable");
    }

    #[test]
    fn test_slug() {
        assert_eq!(Tier::Life.slug(), "life");
        assert_eq!(Tier::Master.slug(), Tier::Master.name().to_lowercase());
    }
}
