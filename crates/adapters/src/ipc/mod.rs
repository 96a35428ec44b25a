// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live query bridge to the customization engine.
//!
//! The engine answers named-channel requests at runtime. Channels come and go
//! between engine releases, and the engine refuses queries until it has
//! finished loading, so every call may fail in several recoverable ways.

#[cfg(unix)]
pub mod socket;

use std::time::Duration;
use thiserror::Error;

/// Errors from a live query.
#[derive(Debug, Error)]
pub enum IpcError {
    #[error("channel not registered")]
    NotRegistered,
    #[error("engine not ready")]
    NotReady,
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("timed out after {0:?}")]
    Timeout(Duration),
    #[error("engine error: {0}")]
    Engine(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IpcError {
    /// Short label used in discovery traces.
    pub fn kind(&self) -> &'static str {
        match self {
            IpcError::NotRegistered => "NotRegistered",
            IpcError::NotReady => "NotReady",
            IpcError::Serialization(_) => "Serialization",
            IpcError::Timeout(_) => "Timeout",
            IpcError::Engine(_) => "Engine",
            IpcError::Io(_) => "Io",
        }
    }
}

/// Request/response access to the engine's named query channels.
pub trait LiveQueryBridge: Send + Sync {
    /// Invoke `channel` and return the names it reports.
    fn query_names(&self, channel: &str) -> Result<Vec<String>, IpcError>;
}

impl<B: LiveQueryBridge + ?Sized> LiveQueryBridge for std::sync::Arc<B> {
    fn query_names(&self, channel: &str) -> Result<Vec<String>, IpcError> {
        (**self).query_names(channel)
    }
}

/// Bridge used when no engine endpoint is configured; every channel is unregistered.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisconnectedBridge;

impl LiveQueryBridge for DisconnectedBridge {
    fn query_names(&self, _channel: &str) -> Result<Vec<String>, IpcError> {
        Err(IpcError::NotRegistered)
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{IpcError, LiveQueryBridge};
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Canned answer for one channel.
    #[derive(Debug, Clone)]
    enum Reply {
        Names(Vec<String>),
        NotReady,
        Serialization,
    }

    #[derive(Default)]
    struct FakeBridgeState {
        replies: HashMap<String, Reply>,
        calls: Vec<String>,
    }

    /// Fake bridge for testing. Unknown channels are unregistered.
    #[derive(Clone, Default)]
    pub struct FakeBridge {
        inner: Arc<Mutex<FakeBridgeState>>,
    }

    impl FakeBridge {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make `channel` answer with `names`.
        pub fn set_names(&self, channel: &str, names: &[&str]) {
            self.inner.lock().replies.insert(
                channel.to_string(),
                Reply::Names(names.iter().map(|n| n.to_string()).collect()),
            );
        }

        /// Make `channel` fail as if the engine were still loading.
        pub fn set_not_ready(&self, channel: &str) {
            self.inner.lock().replies.insert(channel.to_string(), Reply::NotReady);
        }

        /// Make `channel` fail with a payload decoding error.
        pub fn set_serialization_error(&self, channel: &str) {
            self.inner.lock().replies.insert(channel.to_string(), Reply::Serialization);
        }

        /// Channels invoked so far, in order.
        pub fn calls(&self) -> Vec<String> {
            self.inner.lock().calls.clone()
        }
    }

    impl LiveQueryBridge for FakeBridge {
        fn query_names(&self, channel: &str) -> Result<Vec<String>, IpcError> {
            let mut inner = self.inner.lock();
            inner.calls.push(channel.to_string());
            match inner.replies.get(channel) {
                Some(Reply::Names(names)) => Ok(names.clone()),
                Some(Reply::NotReady) => Err(IpcError::NotReady),
                Some(Reply::Serialization) => {
                    Err(IpcError::Serialization("expected sequence".to_string()))
                }
                None => Err(IpcError::NotRegistered),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeBridge;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
