// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Applying a job mapping inside the customization engine.

use jsneck_core::{CollectionName, JobMapping};
use parking_lot::Mutex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("engine unavailable")]
    Unavailable,
    #[error("engine rejected apply: {0}")]
    Rejected(String),
}

/// Instructs the engine to select `mapping.option` for `mapping.group` in a collection.
///
/// Implementations must be idempotent: applying the same mapping to the same
/// collection twice has no further observable effect.
pub trait MappingSink: Send + Sync {
    fn apply(&self, collection: &CollectionName, mapping: &JobMapping) -> Result<(), SinkError>;
}

impl<S: MappingSink + ?Sized> MappingSink for std::sync::Arc<S> {
    fn apply(&self, collection: &CollectionName, mapping: &JobMapping) -> Result<(), SinkError> {
        (**self).apply(collection, mapping)
    }
}

/// Sink that logs each distinct apply and remembers the last one.
///
/// Stands in for the engine call until the engine exposes a settings channel.
#[derive(Debug, Default)]
pub struct LoggingSink {
    last: Mutex<Option<(CollectionName, JobMapping)>>,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent distinct apply.
    pub fn last_applied(&self) -> Option<(CollectionName, JobMapping)> {
        self.last.lock().clone()
    }
}

impl MappingSink for LoggingSink {
    fn apply(&self, collection: &CollectionName, mapping: &JobMapping) -> Result<(), SinkError> {
        let mut last = self.last.lock();
        if last.as_ref().is_some_and(|(c, m)| c == collection && m == mapping) {
            tracing::debug!(%collection, group = %mapping.group, option = %mapping.option, "mapping already applied");
            return Ok(());
        }
        tracing::info!(%collection, group = %mapping.group, option = %mapping.option, "applying mapping");
        *last = Some((collection.clone(), mapping.clone()));
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{MappingSink, SinkError};
    use jsneck_core::{CollectionName, JobMapping};
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded apply call
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ApplyCall {
        pub collection: String,
        pub group: String,
        pub option: String,
    }

    #[derive(Default)]
    struct FakeSinkState {
        calls: Vec<ApplyCall>,
        fail: bool,
    }

    /// Fake sink for testing; records every call.
    #[derive(Clone, Default)]
    pub struct FakeSink {
        inner: Arc<Mutex<FakeSinkState>>,
    }

    impl FakeSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn calls(&self) -> Vec<ApplyCall> {
            self.inner.lock().calls.clone()
        }

        /// Make subsequent applies fail.
        pub fn set_failing(&self, fail: bool) {
            self.inner.lock().fail = fail;
        }
    }

    impl MappingSink for FakeSink {
        fn apply(&self, collection: &CollectionName, mapping: &JobMapping) -> Result<(), SinkError> {
            let mut inner = self.inner.lock();
            inner.calls.push(ApplyCall {
                collection: collection.to_string(),
                group: mapping.group.clone(),
                option: mapping.option.clone(),
            });
            if inner.fail {
                return Err(SinkError::Unavailable);
            }
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ApplyCall, FakeSink};

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
