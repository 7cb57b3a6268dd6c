//! Skill tree generation
//!
//! Builds every tier's skills and, for each skill, its abilities. Identifier
//! counters are explicit state owned by the caller.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::data::{GenerationData, Tier, TierConfig, TierTable};

use super::abilities::{Ability, AbilityCategory, ABILITY_MAX_RANK_RANGE};
use super::naming;
use super::sampler::{roll_cost, roll_xp, sample_rarity, Role};
use super::skills::{Skill, SkillCategory, SKILL_MAX_LEVEL_RANGE};

/// Per-tier identifier counters for skills and abilities
#[derive(Debug, Clone, Default)]
pub struct IdCounters {
    skills: HashMap<Tier, u32>,
    abilities: HashMap<Tier, u32>,
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next `skill_{tier}_{n}` id
    pub fn next_skill_id(&mut self, tier: Tier) -> String {
        let n = Self::bump(&mut self.skills, tier);
        format!("skill_{}_{}", tier.slug(), n)
    }

    /// Allocate the next `ability_{tier}_{n}` id
    pub fn next_ability_id(&mut self, tier: Tier) -> String {
        let n = Self::bump(&mut self.abilities, tier);
        format!("ability_{}_{}", tier.slug(), n)
    }

    fn bump(counters: &mut HashMap<Tier, u32>, tier: Tier) -> u32 {
        let counter = counters.entry(tier).or_insert(0);
        let n = *counter;
        *counter += 1;
        n
    }
}

/// Build one skill (ability list still empty)
fn build_skill(config: &TierConfig, counters: &mut IdCounters, rng: &mut impl Rng) -> Skill {
    let tier = config.tier;
    let id = counters.next_skill_id(tier);
    let category = *SkillCategory::ALL.choose(rng).unwrap_or(&SkillCategory::Offense);
    let rarity = sample_rarity(&config.rarity, rng);
    let cost = roll_cost(config.base_cost, rarity, Role::Skill, rng);
    let xp = roll_xp(config.base_xp, rarity, Role::Skill, rng);
    let max_level = rng.gen_range(SKILL_MAX_LEVEL_RANGE.0..=SKILL_MAX_LEVEL_RANGE.1);

    Skill {
        id,
        name: naming::skill_name(rng),
        description: naming::skill_description(rng),
        tier,
        category,
        rarity,
        base_cost: cost.value,
        xp_granted: xp.value,
        max_level,
        abilities: Vec::new(),
    }
}

/// Build one ability owned by `skill`
fn build_ability(
    config: &TierConfig,
    skill: &Skill,
    counters: &mut IdCounters,
    rng: &mut impl Rng,
) -> Ability {
    let tier = skill.tier;
    let id = counters.next_ability_id(tier);
    let category = *AbilityCategory::ALL.choose(rng).unwrap_or(&AbilityCategory::Combat);
    let rarity = sample_rarity(&config.rarity, rng);
    let cost = roll_cost(config.base_cost, rarity, Role::Ability, rng);
    let xp = roll_xp(config.base_xp, rarity, Role::Ability, rng);
    let max_rank = rng.gen_range(ABILITY_MAX_RANK_RANGE.0..=ABILITY_MAX_RANK_RANGE.1);

    Ability {
        id,
        name: naming::ability_name(rng),
        description: naming::ability_description(rarity, rng),
        tier,
        category,
        rarity,
        base_cost: cost.value,
        xp_granted: xp.value,
        max_rank,
        skill_id: skill.id.clone(),
    }
}

/// Generate all skills of a tier, each paired with its abilities
pub fn build_tier(
    config: &TierConfig,
    counters: &mut IdCounters,
    rng: &mut impl Rng,
) -> Vec<(Skill, Vec<Ability>)> {
    let skill_count = config.skill_count.roll(rng);
    let mut built = Vec::with_capacity(skill_count as usize);

    for _ in 0..skill_count {
        let mut skill = build_skill(config, counters, rng);

        let ability_count = config.abilities_per_skill.roll(rng);
        let abilities: Vec<Ability> = (0..ability_count)
            .map(|_| build_ability(config, &skill, counters, rng))
            .collect();

        skill.abilities = abilities.iter().map(|a| a.id.clone()).collect();
        log::debug!(
            "Built {} ({}, {}) with {} abilities",
            skill.id,
            skill.rarity,
            skill.name,
            abilities.len()
        );
        built.push((skill, abilities));
    }

    built
}

/// A broken skill/ability reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("ability {ability} points at unknown skill {skill}")]
    UnknownSkill { ability: String, skill: String },
    #[error("skill {skill} lists ability {ability} {count} times")]
    DuplicateListing { skill: String, ability: String, count: usize },
    #[error("skill {skill} lists ability {ability}, which belongs elsewhere or does not exist")]
    ForeignAbility { skill: String, ability: String },
    #[error("ability {ability} is not listed by its skill {skill}")]
    Unlisted { ability: String, skill: String },
    #[error("ability {ability} is tier {ability_tier} but its skill is tier {skill_tier}")]
    TierMismatch { ability: String, ability_tier: Tier, skill_tier: Tier },
    #[error("duplicate id {0}")]
    DuplicateId(String),
}

/// The flat skill and ability sequences produced by a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedContent {
    pub skills: Vec<Skill>,
    pub abilities: Vec<Ability>,
}

impl GeneratedContent {
    pub fn skills_for_tier(&self, tier: Tier) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(move |s| s.tier == tier)
    }

    pub fn abilities_for_tier(&self, tier: Tier) -> impl Iterator<Item = &Ability> {
        self.abilities.iter().filter(move |a| a.tier == tier)
    }

    /// Find a skill by ID
    pub fn find_skill(&self, id: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| s.id == id)
    }

    /// Check every skill/ability reference resolves exactly once
    pub fn verify_links(&self) -> Result<(), LinkError> {
        let mut skills_by_id: HashMap<&str, &Skill> = HashMap::new();
        for skill in &self.skills {
            if skills_by_id.insert(skill.id.as_str(), skill).is_some() {
                return Err(LinkError::DuplicateId(skill.id.clone()));
            }
        }

        let mut abilities_by_id: HashMap<&str, &Ability> = HashMap::new();
        for ability in &self.abilities {
            if abilities_by_id.insert(ability.id.as_str(), ability).is_some() {
                return Err(LinkError::DuplicateId(ability.id.clone()));
            }

            let skill = skills_by_id.get(ability.skill_id.as_str()).ok_or_else(|| {
                LinkError::UnknownSkill {
                    ability: ability.id.clone(),
                    skill: ability.skill_id.clone(),
                }
            })?;
            if skill.tier != ability.tier {
                return Err(LinkError::TierMismatch {
                    ability: ability.id.clone(),
                    ability_tier: ability.tier,
                    skill_tier: skill.tier,
                });
            }

            let count = skill.abilities.iter().filter(|id| **id == ability.id).count();
            match count {
                0 => {
                    return Err(LinkError::Unlisted {
                        ability: ability.id.clone(),
                        skill: skill.id.clone(),
                    })
                }
                1 => {}
                n => {
                    return Err(LinkError::DuplicateListing {
                        skill: skill.id.clone(),
                        ability: ability.id.clone(),
                        count: n,
                    })
                }
            }
        }

        for skill in &self.skills {
            for ability_id in &skill.abilities {
                let owned = abilities_by_id
                    .get(ability_id.as_str())
                    .map(|a| a.skill_id == skill.id)
                    .unwrap_or(false);
                if !owned {
                    return Err(LinkError::ForeignAbility {
                        skill: skill.id.clone(),
                        ability: ability_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Runs generation across the whole tier table
pub struct ContentGenerator {
    table: TierTable,
    rng: StdRng,
    counters: IdCounters,
}

impl ContentGenerator {
    /// Seeded from the data's seed, or from entropy if none is set
    pub fn new(data: GenerationData) -> Self {
        let rng = match data.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(data.table, rng)
    }

    pub fn with_rng(table: TierTable, rng: StdRng) -> Self {
        Self {
            table,
            rng,
            counters: IdCounters::new(),
        }
    }

    /// Generate every tier in table order
    pub fn generate(&mut self) -> GeneratedContent {
        let mut content = GeneratedContent::default();

        for config in &self.table.tiers {
            let built = build_tier(config, &mut self.counters, &mut self.rng);
            let skill_count = built.len();
            let before = content.abilities.len();

            for (skill, abilities) in built {
                content.skills.push(skill);
                content.abilities.extend(abilities);
            }

            log::info!(
                "Generated tier {} (levels {}-{}): {} skills, {} abilities",
                config.tier,
                config.min_level,
                config.max_level,
                skill_count,
                content.abilities.len() - before
            );
        }

        content
    }
}
