// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers and the wiring they share.

pub mod collections;
pub mod config;
pub mod jobs;
pub mod mapping;
pub mod watch;

use std::sync::Arc;

use anyhow::{Context, Result};
use jsneck_adapters::{DisconnectedBridge, LiveQueryBridge, OsFileSystem};
use jsneck_core::{seed_defaults_if_needed, ConfigStore, DefaultMappings, PluginConfig};
use jsneck_engine::{CollectionPicker, CollectionResolver, SearchRoots, ENGINE_NAME};

use crate::env;

pub type Resolver = CollectionResolver<Arc<dyn LiveQueryBridge>, OsFileSystem>;

/// Config store at the resolved config directory.
pub fn config_store() -> Result<ConfigStore> {
    Ok(ConfigStore::in_dir(&env::config_dir()?))
}

/// Load the config, seeding the mapping table from the bundled defaults on first use.
pub fn load_config(store: &ConfigStore) -> Result<PluginConfig> {
    let mut config = store
        .load()
        .with_context(|| format!("failed to read {}", store.path().display()))?;
    let defaults = DefaultMappings::bundled().context("bundled default mappings are invalid")?;
    if seed_defaults_if_needed(&mut config, &defaults) {
        store
            .save(&config)
            .with_context(|| format!("failed to write {}", store.path().display()))?;
    }
    Ok(config)
}

pub fn save_config(store: &ConfigStore, config: &PluginConfig) -> Result<()> {
    store.save(config).with_context(|| format!("failed to write {}", store.path().display()))
}

/// Live query bridge for the configured engine socket, if any.
#[cfg(unix)]
fn bridge() -> Arc<dyn LiveQueryBridge> {
    match env::ipc_socket() {
        Some(path) => {
            tracing::debug!(socket = %path.display(), "using engine socket bridge");
            Arc::new(jsneck_adapters::SocketBridge::new(path, env::ipc_timeout()))
        }
        None => Arc::new(DisconnectedBridge),
    }
}

#[cfg(not(unix))]
fn bridge() -> Arc<dyn LiveQueryBridge> {
    Arc::new(DisconnectedBridge)
}

pub fn resolver() -> Resolver {
    CollectionResolver::new(bridge(), OsFileSystem, SearchRoots::from_env(ENGINE_NAME))
}

/// Build a picker and load it on the blocking pool.
pub async fn loaded_picker() -> Result<CollectionPicker<Resolver>> {
    tokio::task::spawn_blocking(|| {
        let mut picker = CollectionPicker::new(resolver());
        picker.ensure_loaded();
        picker
    })
    .await
    .context("collection discovery task failed")
}
