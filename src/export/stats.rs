//! Content statistics
//!
//! Aggregate counts and ranges printed after an export.

use std::fmt;

use crate::data::{Rarity, Tier, TierTable};
use crate::progression::GeneratedContent;

/// Min/max/average over a set of values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
    pub avg: f64,
}

impl ValueRange {
    /// `None` for an empty set
    pub fn of(values: impl IntoIterator<Item = u32>) -> Option<Self> {
        let mut min = u32::MAX;
        let mut max = 0;
        let mut sum = 0u64;
        let mut count = 0u64;
        for v in values {
            min = min.min(v);
            max = max.max(v);
            sum += v as u64;
            count += 1;
        }
        (count > 0).then(|| Self {
            min,
            max,
            avg: sum as f64 / count as f64,
        })
    }
}

/// Per-tier summary
#[derive(Debug, Clone, PartialEq)]
pub struct TierStats {
    pub tier: Tier,
    pub min_level: u32,
    pub max_level: u32,
    pub skills: usize,
    pub abilities: usize,
    /// Ability counts indexed by `Rarity::sort_value`
    pub ability_rarities: [usize; 6],
}

impl TierStats {
    pub fn avg_abilities_per_skill(&self) -> Option<f64> {
        (self.skills > 0).then(|| self.abilities as f64 / self.skills as f64)
    }
}

/// Statistics for a whole run
#[derive(Debug, Clone, PartialEq)]
pub struct ContentStats {
    pub tiers: Vec<TierStats>,
    pub total_skills: usize,
    pub total_abilities: usize,
    /// Over abilities only
    pub ability_cost: Option<ValueRange>,
    /// Over abilities and skills
    pub xp: Option<ValueRange>,
}

impl ContentStats {
    pub fn compute(content: &GeneratedContent, table: &TierTable) -> Self {
        let tiers = table
            .iter()
            .map(|config| {
                let mut ability_rarities = [0usize; 6];
                let mut abilities = 0;
                for ability in content.abilities_for_tier(config.tier) {
                    ability_rarities[ability.rarity.sort_value() as usize] += 1;
                    abilities += 1;
                }
                TierStats {
                    tier: config.tier,
                    min_level: config.min_level,
                    max_level: config.max_level,
                    skills: content.skills_for_tier(config.tier).count(),
                    abilities,
                    ability_rarities,
                }
            })
            .collect();

        let xp = content
            .abilities
            .iter()
            .map(|a| a.xp_granted)
            .chain(content.skills.iter().map(|s| s.xp_granted));

        Self {
            tiers,
            total_skills: content.skills.len(),
            total_abilities: content.abilities.len(),
            ability_cost: ValueRange::of(content.abilities.iter().map(|a| a.base_cost)),
            xp: ValueRange::of(xp),
        }
    }

    pub fn avg_abilities_per_skill(&self) -> Option<f64> {
        (self.total_skills > 0).then(|| self.total_abilities as f64 / self.total_skills as f64)
    }
}

impl fmt::Display for ContentStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Content Statistics:")?;
        writeln!(f, "{}", "=".repeat(50))?;

        for tier in &self.tiers {
            writeln!(f)?;
            writeln!(f, "Tier: {} (Levels {}-{})", tier.tier, tier.min_level, tier.max_level)?;
            writeln!(f, "   Skills: {}", tier.skills)?;
            writeln!(f, "   Abilities: {}", tier.abilities)?;
            if let Some(avg) = tier.avg_abilities_per_skill() {
                writeln!(f, "   Avg Abilities per Skill: {:.1}", avg)?;
            }
            writeln!(f, "   Rarity Distribution:")?;
            for rarity in Rarity::ALL {
                let count = tier.ability_rarities[rarity.sort_value() as usize];
                if count > 0 {
                    writeln!(f, "     {}: {}", rarity, count)?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Total Statistics:")?;
        writeln!(f, "   Total Skills: {}", self.total_skills)?;
        writeln!(f, "   Total Abilities: {}", self.total_abilities)?;
        if let Some(avg) = self.avg_abilities_per_skill() {
            writeln!(f, "   Avg Abilities per Skill: {:.1}", avg)?;
        }

        if let Some(cost) = self.ability_cost {
            writeln!(f)?;
            writeln!(f, "Cost Ranges:")?;
            writeln!(f, "   Min: {}", cost.min)?;
            writeln!(f, "   Max: {}", cost.max)?;
            writeln!(f, "   Avg: {:.1}", cost.avg)?;
        }

        if let Some(xp) = self.xp {
            writeln!(f)?;
            writeln!(f, "XP Ranges:")?;
            writeln!(f, "   Min: {}", xp.min)?;
            writeln!(f, "   Max: {}", xp.max)?;
            writeln!(f, "   Avg: {:.1}", xp.avg)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_tier_table;
    use crate::progression::ContentGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_value_range() {
        let range = ValueRange::of([4, 1, 7]).unwrap();
        assert_eq!(range.min, 1);
        assert_eq!(range.max, 7);
        assert!((range.avg - 4.0).abs() < 1e-9);
        assert!(ValueRange::of(Vec::<u32>::new()).is_none());
    }

    #[test]
    fn test_stats_match_content() {
        let table = default_tier_table();
        let content = ContentGenerator::with_rng(table.clone(), StdRng::seed_from_u64(6)).generate();
        let stats = ContentStats::compute(&content, &table);

        assert_eq!(stats.tiers.len(), 6);
        assert_eq!(stats.total_skills, content.skills.len());
        assert_eq!(stats.total_abilities, content.abilities.len());
        assert_eq!(stats.tiers.iter().map(|t| t.skills).sum::<usize>(), content.skills.len());
        for tier in &stats.tiers {
            assert_eq!(tier.ability_rarities.iter().sum::<usize>(), tier.abilities);
        }

        let life = &stats.tiers[0];
        assert_eq!(life.tier, Tier::Life);
        assert_eq!(life.ability_rarities[Rarity::Mythic.sort_value() as usize], 0);
    }

    #[test]
    fn test_empty_content_report() {
        let stats = ContentStats::compute(&GeneratedContent::default(), &default_tier_table());
        assert!(stats.ability_cost.is_none());
        assert!(stats.avg_abilities_per_skill().is_none());

        let report = stats.to_string();
        assert!(report.contains("Tier: Master (Levels 141-200)"));
        assert!(report.contains("Total Skills: 0"));
        assert!(!report.contains("Cost Ranges"));
    }
}
