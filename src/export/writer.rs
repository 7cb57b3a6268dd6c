//! JSON export of generated content
//!
//! Writes `skills.json` and `abilities.json` into the output directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::progression::{Ability, GeneratedContent, Skill};

/// Where the game expects progression assets
pub const DEFAULT_OUTPUT_DIR: &str = "app/src/main/assets/progression";

pub const SKILLS_FILE: &str = "skills.json";
pub const ABILITIES_FILE: &str = "abilities.json";

/// Export error types
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {file}: {source}")]
    Serialize {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
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
        source: serde_json::Error,
    },
}

/// Paths of the files written by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub skills: PathBuf,
    pub abilities: PathBuf,
}

impl ExportPaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            skills: dir.join(SKILLS_FILE),
            abilities: dir.join(ABILITIES_FILE),
        }
    }
}

fn write_json<T: Serialize>(path: &Path, file: &'static str, records: &[T]) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|source| ExportError::Serialize { file, source })?;
    fs::write(path, json).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ExportError> {
    let data = fs::read_to_string(path).map_err(|source| ExportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ExportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both files, creating `dir` if needed. A failure partway through may
/// leave one file written.
pub fn write_content(dir: &Path, content: &GeneratedContent) -> Result<ExportPaths, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let paths = ExportPaths::in_dir(dir);
    write_json(&paths.skills, SKILLS_FILE, &content.skills)?;
    log::info!("Saved {} skills to {:?}", content.skills.len(), paths.skills);
    write_json(&paths.abilities, ABILITIES_FILE, &content.abilities)?;
    log::info!("Saved {} abilities to {:?}", content.abilities.len(), paths.abilities);

    Ok(paths)
}

/// Load previously exported content back from `dir`
pub fn read_content(dir: &Path) -> Result<GeneratedContent, ExportError> {
    let paths = ExportPaths::in_dir(dir);
    let skills: Vec<Skill> = read_json(&paths.skills)?;
    let abilities: Vec<Ability> = read_json(&paths.abilities)?;
    Ok(GeneratedContent { skills, abilities })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::default_tier_table;
    use crate::progression::ContentGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skillforge-export-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn sample_content() -> GeneratedContent {
        ContentGenerator::with_rng(default_tier_table(), StdRng::seed_from_u64(12)).generate()
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = scratch_dir("roundtrip").join("nested/progression");
        let content = sample_content();

        let paths = write_content(&dir, &content).unwrap();
        assert!(paths.skills.exists());
        assert!(paths.abilities.exists());

        let loaded = read_content(&dir).unwrap();
        assert_eq!(loaded, content);
        assert!(loaded.verify_links().is_ok());

        let _ = fs::remove_dir_all(scratch_dir("roundtrip"));
    }

    #[test]
    fn test_exported_json_types() {
        let dir = scratch_dir("types");
        let content = sample_content();
        write_content(&dir, &content).unwrap();

        let raw = fs::read_to_string(dir.join(SKILLS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &value.as_array().unwrap()[0];
        assert!(first["id"].is_string());
        assert!(first["baseCost"].is_u64());
        assert!(first["xpGranted"].is_u64());
        assert!(first["maxLevel"].is_u64());
        assert!(first["abilities"].as_array().unwrap().iter().all(|v| v.is_string()));

        let raw = fs::read_to_string(dir.join(ABILITIES_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let abilities = value.as_array().unwrap();
        assert_eq!(abilities.len(), content.abilities.len());
        assert!(abilities[0]["maxRank"].is_u64());
        assert_eq!(abilities[0]["skillId"], content.skills[0].id.as_str());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unwritable_directory_is_reported() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(&dir).unwrap();
        let blocker = dir.join("progression");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_content(&blocker, &GeneratedContent::default()).unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }), "{}", err);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_missing_files() {
        let dir = scratch_dir("missing");
        assert!(matches!(read_content(&dir), Err(ExportError::Read { .. })));
    }
}
