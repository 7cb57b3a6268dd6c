//! Skill records
//!
//! Top-level progression nodes. Each skill owns a list of ability ids.

use serde::{Deserialize, Serialize};

use crate::data::{Rarity, Tier};

/// Skill category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Offense,
    Defense,
    Support,
    Resource,
    Luck,
    Strategy,
    Special,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 7] = [
        SkillCategory::Offense,
        SkillCategory::Defense,
        SkillCategory::Support,
        SkillCategory::Resource,
        SkillCategory::Luck,
        SkillCategory::Strategy,
        SkillCategory::Special,
    ];
}

/// Lowest and highest `max_level` a skill can roll
pub const SKILL_MAX_LEVEL_RANGE: (u32, u32) = (5, 20);

/// A generated skill. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: Tier,
    pub category: SkillCategory,
    pub rarity: Rarity,
    pub base_cost: u32,
    pub xp_granted: u32,
    pub max_level: u32,
    /// Owned ability ids in generation order
    pub abilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skill() -> Skill {
        Skill {
            id: "skill_life_0".to_string(),
            name: "Quick Strike".to_string(),
            description: "This skill boosts your luck with Wild West power.".to_string(),
            tier: Tier::Life,
            category: SkillCategory::Offense,
            rarity: Rarity::Rare,
            base_cost: 12,
            xp_granted: 90,
            max_level: 7,
            abilities: vec!["ability_life_0".to_string(), "ability_life_1".to_string()],
        }
    }

    #[test]
    fn test_json_field_names_and_order() {
        let json = serde_json::to_string(&sample_skill()).unwrap();
        let keys = [
            "\"id\"", "\"name\"", "\"description\"", "\"tier\"", "\"category\"", "\"rarity\"",
            "\"baseCost\"", "\"xpGranted\"", "\"maxLevel\"", "\"abilities\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", json);
        assert!(json.contains("\"tier\":\"Life\""));
        assert!(json.contains("\"baseCost\":12"));
    }
}
