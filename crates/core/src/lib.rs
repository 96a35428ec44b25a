// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jsneck-core: data model for the Jobstone Necklace auto-switcher

pub mod macros;

pub mod collection;
pub mod config;
pub mod defaults;
pub mod document;
pub mod job;
pub mod trace;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use collection::{CandidateSet, CollectionName, SENTINEL};
pub use config::{ConfigError, ConfigStore, JobMapping, PluginConfig, UNSET_TARGET};
pub use defaults::{seed_defaults_if_needed, DefaultMappings, DEFAULT_GROUP};
pub use document::{scan_names, Document, DocumentError};
pub use job::{JobId, JOB_TABLE};
pub use trace::DiscoveryTrace;
