//! Progression content: skills, abilities, and their generation

pub mod skills;
pub mod abilities;
pub mod sampler;
pub mod naming;
pub mod generator;

pub use skills::{Skill, SkillCategory};
pub use abilities::{Ability, AbilityCategory};
pub use sampler::{Role, ScaledRoll, pick_rarity, sample_rarity, scale, scale_value, roll_cost, roll_xp};
pub use generator::{ContentGenerator, GeneratedContent, IdCounters, LinkError, build_tier};
