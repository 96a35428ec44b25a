// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted plugin configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stored in `TargetCollection` when the user picks the sentinel entry.
pub const UNSET_TARGET: &str = "__CHOOSE__";

/// Current configuration schema version.
pub const CURRENT_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Customization selector and value applied for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobMapping {
    pub group: String,
    pub option: String,
}

impl JobMapping {
    pub fn new(group: impl Into<String>, option: impl Into<String>) -> Self {
        Self { group: group.into(), option: option.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PluginConfig {
    pub version: u32,
    pub enabled: bool,
    pub keep_current_stone_after_changing_class: bool,
    /// Empty or [`UNSET_TARGET`] when nothing has been picked.
    pub target_collection: String,
    pub enable_glow: bool,
    /// Job abbreviation -> mapping.
    pub mappings: BTreeMap<String, JobMapping>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_CONFIG_VERSION,
            enabled: true,
            keep_current_stone_after_changing_class: false,
            target_collection: String::new(),
            enable_glow: true,
            mappings: BTreeMap::new(),
        }
    }
}

impl PluginConfig {
    /// True when a real target collection has been chosen.
    pub fn is_configured(&self) -> bool {
        !self.target_collection.trim().is_empty() && self.target_collection != UNSET_TARGET
    }

    /// The chosen collection, if any.
    pub fn target(&self) -> Option<&str> {
        self.is_configured().then_some(self.target_collection.as_str())
    }

    /// Set the target collection; `None` stores [`UNSET_TARGET`].
    pub fn set_target(&mut self, name: Option<&str>) {
        self.target_collection = name.unwrap_or(UNSET_TARGET).to_string();
    }

    /// Mapping for a job, exact key first then ignoring ASCII case.
    pub fn mapping_for(&self, job: &str) -> Option<&JobMapping> {
        self.mappings.get(job).or_else(|| {
            self.mappings.iter().find(|(k, _)| k.eq_ignore_ascii_case(job)).map(|(_, v)| v)
        })
    }
}

/// Loads and saves [`PluginConfig`] as pretty JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `config.json` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join("config.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the config; a missing file yields the defaults.
    pub fn load(&self) -> Result<PluginConfig, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(PluginConfig::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomically replace the stored config.
    pub fn save(&self, config: &PluginConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&tmp_path, json.as_bytes())?;
        std::fs::rename(&tmp_path, &self.path)?;
        tracing::debug!(path = %self.path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
