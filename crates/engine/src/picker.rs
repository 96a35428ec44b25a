// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-side cache over a [`CollectionSource`].
//!
//! Resolution does blocking I/O, so it runs lazily on first use and again
//! only on an explicit refresh. A cached sentinel-only result is treated as
//! "not loaded yet" and retried on the next access.

use crate::resolver::{CollectionSource, Resolution};
use jsneck_core::{CandidateSet, DiscoveryTrace, PluginConfig, SENTINEL};

pub struct CollectionPicker<S> {
    source: S,
    cached: Option<Resolution>,
}

impl<S: CollectionSource> CollectionPicker<S> {
    pub fn new(source: S) -> Self {
        Self { source, cached: None }
    }

    /// Resolve unless a non-empty result is already cached.
    pub fn ensure_loaded(&mut self) -> Option<&Resolution> {
        let stale = self.cached.as_ref().is_none_or(|r| r.candidates.is_sentinel_only());
        if stale {
            self.refresh();
        }
        self.cached.as_ref()
    }

    /// Discard the cache and resolve again.
    pub fn refresh(&mut self) -> &Resolution {
        let resolution = self.source.resolve();
        tracing::debug!(
            found = resolution.candidates.found(),
            source = %resolution.source,
            "collections resolved"
        );
        self.cached.insert(resolution)
    }

    /// The most recent resolution, if any.
    pub fn last_resolution(&self) -> Option<&Resolution> {
        self.cached.as_ref()
    }

    pub fn candidates(&self) -> Option<&CandidateSet> {
        self.cached.as_ref().map(|r| &r.candidates)
    }

    /// Trace of the most recent resolution.
    pub fn last_trace(&self) -> Option<&DiscoveryTrace> {
        self.cached.as_ref().map(|r| &r.trace)
    }

    /// Real names in the cached set; 0 when nothing is cached.
    pub fn found(&self) -> usize {
        self.candidates().map_or(0, CandidateSet::found)
    }

    /// Index of the configured target in the cached set, 0 (the sentinel) when absent.
    pub fn selected_index(&self, config: &PluginConfig) -> usize {
        match (self.candidates(), config.target()) {
            (Some(candidates), Some(target)) => candidates.position(target),
            _ => 0,
        }
    }

    /// Select the entry at `index` as the target collection.
    ///
    /// Index 0 clears the target. Returns the selected entry, or `None` when
    /// `index` is out of range (the config is left untouched).
    pub fn select(&self, index: usize, config: &mut PluginConfig) -> Option<String> {
        if index == 0 {
            config.set_target(None);
            return Some(SENTINEL.to_string());
        }
        let name = self.candidates()?.get(index)?.to_string();
        config.set_target(Some(&name));
        tracing::info!(collection = %name, "target collection selected");
        Some(name)
    }
}

#[cfg(test)]
#[path = "picker_tests.rs"]
mod tests;
