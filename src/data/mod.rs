//! Static generation data
//!
//! The tier table and rarity model, plus loading of an optional RON override.

pub mod rarity;
pub mod tiers;
pub mod loader;

pub use rarity::{Rarity, RarityWeights};
pub use tiers::{Bounds, Tier, TierConfig, TierTable, default_tier_table};
pub use loader::{DataManager, GenerationData, ConfigError, load_generation_data, write_default_data};
