// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collection discovery.
//!
//! Resolution never fails. Strategies run in order and stop at the first
//! that finds anything:
//!
//! 1. live query: each channel in [`LIVE_QUERY_CHANNELS`] until one returns names
//! 2. filesystem: every candidate root from [`SearchRoots`], both layouts
//!
//! Every fault along the way is recorded in the returned trace and treated
//! as "nothing found here". The result always starts with the sentinel.

pub mod layout;
pub mod roots;

pub use roots::SearchRoots;

use jsneck_adapters::{FileSystem, LiveQueryBridge};
use jsneck_core::{CandidateSet, DiscoveryTrace};
use serde::Serialize;

/// Name of the customization engine, as used in its config directory.
pub const ENGINE_NAME: &str = "Penumbra";

/// Query channels across engine releases, tried in order.
pub const LIVE_QUERY_CHANNELS: [&str; 3] =
    ["Penumbra.GetCollections", "Penumbra.Api.GetCollections", "Penumbra.CollectionNames"];

/// Subdirectory holding one document per collection.
pub const COLLECTIONS_DIR: &str = "collections";

/// Legacy single-file layout.
pub const LEGACY_FILE: &str = "collections.json";

/// Which strategy produced the names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedFrom {
    /// Channel that answered.
    LiveQuery(String),
    Filesystem,
    Nothing,
}

jsneck_core::simple_display! {
    ResolvedFrom {
        LiveQuery(..) => "live query",
        Filesystem => "filesystem",
        Nothing => "nothing",
    }
}

/// Outcome of one resolution.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub candidates: CandidateSet,
    pub trace: DiscoveryTrace,
    pub source: ResolvedFrom,
}

/// Something that can produce a candidate set on demand.
pub trait CollectionSource {
    fn resolve(&self) -> Resolution;
}

/// Discovers collection names through the live query bridge, then the filesystem.
pub struct CollectionResolver<B, F> {
    bridge: B,
    fs: F,
    roots: SearchRoots,
    channels: Vec<String>,
}

impl<B: LiveQueryBridge, F: FileSystem> CollectionResolver<B, F> {
    pub fn new(bridge: B, fs: F, roots: SearchRoots) -> Self {
        Self {
            bridge,
            fs,
            roots,
            channels: LIVE_QUERY_CHANNELS.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Override the live query channels.
    pub fn with_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    pub fn roots(&self) -> &SearchRoots {
        &self.roots
    }

    /// Run discovery. Always returns at least the sentinel.
    pub fn resolve(&self) -> Resolution {
        let mut trace = DiscoveryTrace::new();

        if let Some((channel, names)) = self.query_live(&mut trace) {
            return Resolution {
                candidates: CandidateSet::from_names(names),
                trace,
                source: ResolvedFrom::LiveQuery(channel),
            };
        }

        let names = self.scan_filesystem(&mut trace);
        let candidates = CandidateSet::from_names(names);
        let source =
            if candidates.is_sentinel_only() { ResolvedFrom::Nothing } else { ResolvedFrom::Filesystem };
        Resolution { candidates, trace, source }
    }

    /// First channel answering with a non-empty list.
    fn query_live(&self, trace: &mut DiscoveryTrace) -> Option<(String, Vec<String>)> {
        for channel in &self.channels {
            match self.bridge.query_names(channel) {
                Ok(names) => {
                    trace.push(format!("IPC {channel}: {}", names.len()));
                    if !names.is_empty() {
                        return Some((channel.clone(), names));
                    }
                }
                Err(e) => trace.fault(format!("IPC {channel} error"), e.kind()),
            }
        }
        None
    }

    /// Names from every candidate root, both layouts.
    fn scan_filesystem(&self, trace: &mut DiscoveryTrace) -> Vec<String> {
        let mut names = Vec::new();
        let mut files_read = 0usize;

        for root in self.roots.candidates(&self.fs, trace) {
            if !self.fs.is_dir(&root) {
                trace.push(format!("Dir missing: {}", root.display()));
                continue;
            }

            let collections_dir = root.join(COLLECTIONS_DIR);
            if self.fs.is_dir(&collections_dir) {
                match self.fs.list_files(&collections_dir, "json") {
                    Ok(files) => {
                        files_read += files.len();
                        trace.push(format!("Scan {} -> {} files", collections_dir.display(), files.len()));
                        for file in files {
                            names.extend(layout::read_collection_file(&self.fs, &file, trace));
                        }
                    }
                    Err(e) => trace.fault(format!("Scan error {}", collections_dir.display()), e.kind()),
                }
            }

            let legacy = root.join(LEGACY_FILE);
            if self.fs.is_file(&legacy) {
                files_read += 1;
                trace.push(format!("Scan legacy {}", legacy.display()));
                names.extend(layout::read_legacy_file(&self.fs, &legacy, trace));
            }
        }

        let distinct = CandidateSet::from_names(names.iter().cloned()).found();
        trace.push(format!("Total files read: {files_read} | names: {distinct}"));
        names
    }
}

impl<B: LiveQueryBridge, F: FileSystem> CollectionSource for CollectionResolver<B, F> {
    fn resolve(&self) -> Resolution {
        CollectionResolver::resolve(self)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
