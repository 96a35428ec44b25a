// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use crate::exit_error::ExitError;

/// Version string including the build's git hash.
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Env var naming the log filter.
pub const LOG_ENV: &str = "JSNECK_LOG";

/// Resolve config directory: JSNECK_CONFIG_DIR > <platform config dir>/jsneck
pub fn config_dir() -> Result<PathBuf, ExitError> {
    if let Some(dir) = std::env::var_os("JSNECK_CONFIG_DIR").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|d| d.join("jsneck"))
        .ok_or_else(|| ExitError::new(1, "cannot determine config directory; set JSNECK_CONFIG_DIR"))
}

/// Engine bridge socket. Unset means no live query endpoint.
pub fn ipc_socket() -> Option<PathBuf> {
    std::env::var_os("JSNECK_IPC_SOCKET").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Per-call bridge timeout (default 2s)
pub fn ipc_timeout() -> Duration {
    millis_var("JSNECK_IPC_TIMEOUT_MS").filter(|d| !d.is_zero()).unwrap_or(Duration::from_secs(2))
}

/// Watch loop tick interval (default 100ms)
pub fn tick_interval() -> Duration {
    millis_var("JSNECK_TICK_MS").filter(|d| !d.is_zero()).unwrap_or(Duration::from_millis(100))
}

fn millis_var(name: &str) -> Option<Duration> {
    std::env::var(name).ok().and_then(|s| s.trim().parse::<u64>().ok()).map(Duration::from_millis)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
