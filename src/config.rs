// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dictionary::PreserveDictionary;
use crate::fields::FieldSelection;
use crate::titlecase::TitleCaseEngine;

// ============================================================================
// Title-case configuration
// ============================================================================

/// Title-case configuration
///
/// Every field has a default, so a partial file (or none at all) is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleCaseConfig {
    /// Spellings kept verbatim wherever a token matches them case-insensitively
    pub preserve: Vec<String>,
    /// Tag fields to retitle; empty means every field
    pub fields: Vec<String>,
    /// Print a JSON report instead of plain text
    pub report: bool,
}

impl TitleCaseConfig {
    /// Default config location: `<config dir>/tu/config.json`
    pub fn config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine config directory"))?;
        Ok(config_dir.join("tu").join("config.json"))
    }

    /// Loads the config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the config from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from {:?}", path);

        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;

        tracing::info!(
            "Config loaded: {} preserved words, {} fields",
            config.preserve.len(),
            config.fields.len()
        );
        Ok(config)
    }

    /// Writes the config to `path` through a temp file, replacing it atomically
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("Saving config to {:?}", path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("Failed to write temp file: {}", e);
            e
        })?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("Failed to replace config file: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }
        Ok(())
    }

    /// Builds an engine whose pre-hook keeps the preserved spellings
    pub fn build_engine(&self) -> TitleCaseEngine {
        let engine = TitleCaseEngine::new();
        if self.preserve.is_empty() {
            return engine;
        }
        engine.with_pre_hook(PreserveDictionary::new(&self.preserve))
    }

    /// Field selection described by `fields`
    pub fn field_selection(&self) -> FieldSelection {
        FieldSelection::from_names(&self.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TitleCaseConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, TitleCaseConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "preserve": ["AC/DC"] }"#).unwrap();

        let config = TitleCaseConfig::load_from(&path).unwrap();
        assert_eq!(config.preserve, vec!["AC/DC"]);
        assert!(config.fields.is_empty());
        assert!(!config.report);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(TitleCaseConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TitleCaseConfig {
            preserve: vec!["feat.".to_string()],
            fields: vec!["title".to_string(), "album".to_string()],
            report: true,
        };

        config.save_to(&path).unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(TitleCaseConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_build_engine_uses_preserved_words() {
        let config = TitleCaseConfig {
            preserve: vec!["AC/DC".to_string()],
            ..Default::default()
        };
        assert_eq!(config.build_engine().convert("ac/dc live"), "AC/DC Live");
        assert_eq!(
            TitleCaseConfig::default().build_engine().convert("ac/dc live"),
            "Ac/Dc Live"
        );
    }
}
