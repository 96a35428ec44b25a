// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate directories holding the engine's persisted configuration.
//!
//! Resolution order:
//!
//! ```text
//!   1. $HOME/.xlcore/pluginConfigs/<engine>          (HOME set and non-blank)
//!   2. /home/<os user>/.xlcore/pluginConfigs/<engine>
//!   3. <home>/.xlcore/wineprefix/**/pluginConfigs/<engine>
//!        for the /home/<os user> variant, then the $HOME variant
//! ```
//!
//! Under Wine, HOME may point at `C:\users\<name>` while the launcher keeps
//! its files under the real Linux home, which is why both variants are tried.

use jsneck_adapters::FileSystem;
use jsneck_core::DiscoveryTrace;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Inputs for root discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoots {
    /// Value of `HOME`, if set.
    pub home: Option<PathBuf>,
    /// Login name of the OS user.
    pub os_user: String,
    /// Engine directory name under `pluginConfigs`.
    pub engine: String,
}

impl SearchRoots {
    pub fn new(home: Option<PathBuf>, os_user: impl Into<String>, engine: impl Into<String>) -> Self {
        Self { home, os_user: os_user.into(), engine: engine.into() }
    }

    /// Read `HOME` and the OS user from the running process.
    pub fn from_env(engine: impl Into<String>) -> Self {
        let home = std::env::var_os("HOME").map(PathBuf::from);
        Self::new(home, whoami::username(), engine)
    }

    /// `HOME` when it is set to something other than whitespace.
    fn env_home(&self) -> Option<&Path> {
        self.home.as_deref().filter(|h| !h.to_string_lossy().trim().is_empty())
    }

    fn linux_home(&self) -> PathBuf {
        Path::new("/home").join(&self.os_user)
    }

    fn plugin_configs(&self, home: &Path) -> PathBuf {
        home.join(".xlcore").join("pluginConfigs").join(&self.engine)
    }

    /// Whether `dir` is a `pluginConfigs/<engine>` directory, ignoring separator style.
    pub fn is_engine_config_dir(&self, dir: &Path) -> bool {
        let normalized = dir.to_string_lossy().replace('\\', "/");
        normalized.ends_with(&format!("/pluginConfigs/{}", self.engine))
    }

    /// Every candidate root in priority order, deduplicated ignoring case.
    ///
    /// Wine prefix enumeration failures are traced and that prefix skipped.
    pub fn candidates(&self, fs: &dyn FileSystem, trace: &mut DiscoveryTrace) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let env_home = self.env_home();

        if let Some(home) = env_home {
            candidates.push(self.plugin_configs(home));
        }
        let linux_home = self.linux_home();
        candidates.push(self.plugin_configs(&linux_home));

        let wine_roots = std::iter::once(linux_home.as_path())
            .chain(env_home)
            .map(|home| home.join(".xlcore").join("wineprefix"));
        for wine_root in wine_roots {
            if !fs.is_dir(&wine_root) {
                continue;
            }
            match fs.find_dirs_named(&wine_root, &self.engine) {
                Ok(dirs) => {
                    candidates.extend(dirs.into_iter().filter(|d| self.is_engine_config_dir(d)));
                }
                Err(e) => trace.fault(format!("Prefix scan error {}", wine_root.display()), e.kind()),
            }
        }

        dedup_ignore_case(candidates)
    }
}

/// Keep the first occurrence of each path, comparing case-insensitively.
pub fn dedup_ignore_case(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths.into_iter().filter(|p| seen.insert(p.to_string_lossy().to_lowercase())).collect()
}

#[cfg(test)]
#[path = "roots_tests.rs"]
mod tests;
