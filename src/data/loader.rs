//! RON data loader
//!
//! Loads the tier table and seed from an external RON file, with fallback to
//! the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rarity::{Rarity, RarityWeights};
use super::tiers::{default_tier_table, Tier, TierTable};

/// Default location of the override file
pub const DEFAULT_DATA_PATH: &str = "assets/data/progression.ron";

/// Allowed gap between a rarity table's sum and 1.0
const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("failed to serialize generation data: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid tier table: {0}")]
    Invalid(String),
}

/// Everything the generator needs besides the random source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationData {
    /// Fixed seed for reproducible output; entropy-seeded when absent
    #[serde(default)]
    pub seed: Option<u64>,
    pub table: TierTable,
}

impl Default for GenerationData {
    fn default() -> Self {
        Self {
            seed: None,
            table: default_tier_table(),
        }
    }
}

impl GenerationData {
    /// Parse generation data from a RON string and validate it
    pub fn from_ron(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let data: GenerationData = ron::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        data.validate()?;
        Ok(data)
    }

    /// Check the table is something the generator can run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for tier in Tier::ALL {
            let count = self.table.iter().filter(|c| c.tier == tier).count();
            if count != 1 {
                return Err(ConfigError::Invalid(format!(
                    "tier {} appears {} times, expected exactly once",
                    tier, count
                )));
            }
        }

        for config in self.table.iter() {
            let tier = config.tier;
            if config.min_level > config.max_level {
                return Err(ConfigError::Invalid(format!(
                    "{}: level range {}-{} is inverted",
                    tier, config.min_level, config.max_level
                )));
            }

            let ranges = [
                ("skill_count", config.skill_count),
                ("abilities_per_skill", config.abilities_per_skill),
                ("base_cost", config.base_cost),
                ("base_xp", config.base_xp),
            ];
            for (field, bounds) in ranges {
                if !bounds.is_valid() {
                    return Err(ConfigError::Invalid(format!(
                        "{}: {} range {}-{} is inverted",
                        tier, field, bounds.min, bounds.max
                    )));
                }
            }
            let top_multiplier = Rarity::Mythic.multiplier();
            for (field, bounds) in [("base_cost", config.base_cost), ("base_xp", config.base_xp)] {
                if bounds.max as f64 * top_multiplier > u32::MAX as f64 {
                    return Err(ConfigError::Invalid(format!(
                        "{}: {} maximum {} overflows once scaled by rarity",
                        tier, field, bounds.max
                    )));
                }
            }
            if config.skill_count.min == 0 || config.abilities_per_skill.min == 0 {
                return Err(ConfigError::Invalid(format!(
                    "{}: skill and ability counts must be at least 1",
                    tier
                )));
            }

            validate_weights(tier, &config.rarity)?;
            let total = config.rarity.total();
            if (total - 1.0).abs() > PROBABILITY_TOLERANCE {
                return Err(ConfigError::Invalid(format!(
                    "{}: rarity probabilities sum to {}",
                    tier, total
                )));
            }
        }

        Ok(())
    }
}

/// Entries must be finite, within [0, 1], and listed lowest rarity first
/// with no rarity repeated.
fn validate_weights(tier: Tier, weights: &RarityWeights) -> Result<(), ConfigError> {
    let mut seen = [false; 6];
    let mut previous: Option<Rarity> = None;

    for (rarity, p) in weights.entries() {
        if !p.is_finite() || !(0.0..=1.0).contains(p) {
            return Err(ConfigError::Invalid(format!(
                "{}: {} probability {} is outside [0, 1]",
                tier, rarity, p
            )));
        }

        let slot = rarity.sort_value() as usize;
        if seen[slot] {
            return Err(ConfigError::Invalid(format!(
                "{}: {} is listed more than once",
                tier, rarity
            )));
        }
        seen[slot] = true;

        if let Some(prev) = previous {
            if rarity.sort_value() < prev.sort_value() {
                return Err(ConfigError::Invalid(format!(
                    "{}: {} is listed after {}, rarities must go lowest first",
                    tier, rarity, prev
                )));
            }
        }
        previous = Some(*rarity);
    }

    Ok(())
}

/// Manages external generation data
#[derive(Debug, Clone, Default)]
pub struct DataManager {
    pub generation: GenerationData,
}

impl DataManager {
    /// Load from the default path or fall back to built-in data
    pub fn new() -> Self {
        Self::load_or_default(Path::new(DEFAULT_DATA_PATH))
    }

    /// Load from `path`; a missing file means defaults, a broken one is
    /// reported and also means defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No override at {:?}, using built-in tier table", path);
            return Self::default();
        }

        match load_generation_data(path) {
            Ok(generation) => {
                log::info!("Loaded tier table from {:?}", path);
                Self { generation }
            }
            Err(e) => {
                log::warn!("{}. Using built-in tier table.", e);
                Self::default()
            }
        }
    }

    pub fn tier_table(&self) -> &TierTable {
        &self.generation.table
    }

    pub fn seed(&self) -> Option<u64> {
        self.generation.seed
    }
}

/// Read and validate a generation data file
pub fn load_generation_data(path: &Path) -> Result<GenerationData, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    GenerationData::from_ron(&content, path)
}

/// Export the built-in data to a RON file for easy editing
pub fn write_default_data(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let ron = ron::ser::to_string_pretty(&GenerationData::default(), ron::ser::PrettyConfig::default())?;
    fs::write(path, ron).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote default tier table to {:?}", path);
    Ok(())
}
