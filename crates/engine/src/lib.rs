// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jsneck-engine: job change detection, collection discovery, and mapping application.

pub mod detector;
pub mod picker;
pub mod resolver;
pub mod switcher;

use jsneck_core::PluginConfig;
use parking_lot::RwLock;
use std::sync::Arc;

/// Plugin configuration shared between the tick loop and user-facing commands.
pub type SharedConfig = Arc<RwLock<PluginConfig>>;

/// Wrap a config for sharing.
pub fn shared_config(config: PluginConfig) -> SharedConfig {
    Arc::new(RwLock::new(config))
}

pub use detector::{DetectorHandle, StateChangeDetector};
pub use picker::CollectionPicker;
pub use resolver::{
    CollectionResolver, CollectionSource, Resolution, ResolvedFrom, SearchRoots, ENGINE_NAME,
    LIVE_QUERY_CHANNELS,
};
pub use switcher::{JobSwitcher, SwitchOutcome, SwitcherHandle};
