//! Ability records
//!
//! Leaf progression nodes; each belongs to exactly one skill via `skill_id`.

use serde::{Deserialize, Serialize};

use crate::data::{Rarity, Tier};

/// Ability category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityCategory {
    Combat,
    Defense,
    Utility,
    Luck,
    Strategy,
    Special,
}

impl AbilityCategory {
    pub const ALL: [AbilityCategory; 6] = [
        AbilityCategory::Combat,
        AbilityCategory::Defense,
        AbilityCategory::Utility,
        AbilityCategory::Luck,
        AbilityCategory::Strategy,
        AbilityCategory::Special,
    ];
}

/// Lowest and highest `max_rank` an ability can roll
pub const ABILITY_MAX_RANK_RANGE: (u32, u32) = (3, 10);

/// A generated ability. Field order is the JSON key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: Tier,
    pub category: AbilityCategory,
    pub rarity: Rarity,
    pub base_cost: u32,
    pub xp_granted: u32,
    pub max_rank: u32,
    pub skill_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_camel_case_keys() {
        let ability = Ability {
            id: "ability_master_3".to_string(),
            name: "Golden grants luck".to_string(),
            description: "boosts powerful 120% bonus.".to_string(),
            tier: Tier::Master,
            category: AbilityCategory::Utility,
            rarity: Rarity::Mythic,
            base_cost: 360,
            xp_granted: 7200,
            max_rank: 10,
            skill_id: "skill_master_0".to_string(),
        };

        let value = serde_json::to_value(&ability).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 10);
        assert_eq!(object["maxRank"], 10);
        assert_eq!(object["skillId"], "skill_master_0");
        assert_eq!(object["category"], "Utility");
        assert!(object.get("skill_id").is_none());
    }
}
