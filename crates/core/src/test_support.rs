// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{JobMapping, PluginConfig};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for document trees.
pub mod strategies {
    use crate::document::{Document, NAME_FIELD};
    use proptest::prelude::*;

    fn arb_key() -> impl Strategy<Value = String> {
        prop_oneof![Just(NAME_FIELD.to_string()), "[A-Za-z]{1,8}"]
    }

    pub fn arb_document() -> impl Strategy<Value = Document> {
        let leaf = prop_oneof![
            Just(Document::Other),
            "[ A-Za-z]{0,8}".prop_map(Document::String),
        ];
        leaf.prop_recursive(4, 32, 6, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 0..6).prop_map(Document::Array),
                proptest::collection::vec((arb_key(), inner), 0..6).prop_map(Document::Object),
            ]
        })
    }
}

// ── Config factory functions ────────────────────────────────────────────

/// A configuration that passes `is_configured()` and targets `collection`.
pub fn configured(collection: &str) -> PluginConfig {
    PluginConfig { target_collection: collection.to_string(), ..PluginConfig::default() }
}

/// A configured config with a single mapping row.
pub fn configured_with_mapping(collection: &str, job: &str, group: &str, option: &str) -> PluginConfig {
    let mut config = configured(collection);
    config.mappings.insert(job.to_string(), JobMapping::new(group, option));
    config
}
