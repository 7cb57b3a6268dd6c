//! Skillforge - TRASH progression content generator
//!
//! Rolls a tiered skill/ability tree from static balance tables and
//! exports it as JSON for the game to load.

pub mod data;
pub mod progression;
pub mod export;

// Re-export commonly used types
pub use data::{DataManager, GenerationData, Rarity, Tier, TierTable};
pub use progression::{Ability, ContentGenerator, GeneratedContent, Skill};
pub use export::{ContentStats, ExportError};
