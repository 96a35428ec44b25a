// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default job mappings bundled with the binary.

use crate::config::{JobMapping, PluginConfig};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Group used when the defaults document does not name one.
pub const DEFAULT_GROUP: &str = "Textures";

/// The bundled defaults document.
pub const BUNDLED_DEFAULTS: &str = include_str!("../default_mappings.json");

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

/// Shape of the defaults document: one group shared by every job.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultMappings {
    #[serde(default = "default_group")]
    pub group: String,
    #[serde(default)]
    pub enable_glow_default: bool,
    /// Job abbreviation -> option value.
    #[serde(default)]
    pub jobs: BTreeMap<String, String>,
}

impl DefaultMappings {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::parse(BUNDLED_DEFAULTS)
    }

    /// Mapping rows, skipping jobs with a blank option.
    pub fn rows(&self) -> impl Iterator<Item = (&str, JobMapping)> + '_ {
        self.jobs
            .iter()
            .filter(|(_, option)| !option.trim().is_empty())
            .map(|(job, option)| (job.as_str(), JobMapping::new(self.group.clone(), option.clone())))
    }
}

/// Seed `config.mappings` from `defaults` when the table is empty.
///
/// Returns `true` when the config changed and should be saved. A populated
/// table is never touched. `EnableGlow` only moves from false to the
/// document's default.
pub fn seed_defaults_if_needed(config: &mut PluginConfig, defaults: &DefaultMappings) -> bool {
    if !config.mappings.is_empty() {
        return false;
    }

    for (job, mapping) in defaults.rows() {
        config.mappings.insert(job.to_string(), mapping);
    }
    if !config.enable_glow {
        config.enable_glow = defaults.enable_glow_default;
    }
    tracing::info!(rows = config.mappings.len(), group = %defaults.group, "seeded default mappings");
    true
}

#[cfg(test)]
#[path = "defaults_tests.rs"]
mod tests;
