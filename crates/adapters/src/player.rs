// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Access to the local player's current job.

use jsneck_core::JobId;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateReadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job id {0:?}")]
    InvalidJob(String),
}

/// Live view of the host's player state.
///
/// Must be cheap: it is read once per tick on the host's frame loop.
pub trait PlayerState: Send + Sync {
    /// `Ok(None)` when no character is loaded.
    fn current_job(&self) -> Result<Option<JobId>, StateReadError>;
}

/// Player state published by the host as a small text file holding the job id.
///
/// A missing or blank file means no character is loaded.
#[derive(Debug, Clone)]
pub struct FilePlayerState {
    path: PathBuf,
}

impl FilePlayerState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlayerState for FilePlayerState {
    fn current_job(&self) -> Result<Option<JobId>, StateReadError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        text.parse::<u32>()
            .map(|id| Some(JobId::new(id)))
            .map_err(|_| StateReadError::InvalidJob(text.to_string()))
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{PlayerState, StateReadError};
    use jsneck_core::JobId;
    use parking_lot::Mutex;
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// One scripted read result.
    #[derive(Debug, Clone, Copy)]
    enum Sample {
        Job(Option<JobId>),
        Fail,
    }

    #[derive(Default)]
    struct FakePlayerStateInner {
        current: Option<JobId>,
        script: VecDeque<Sample>,
        reads: usize,
    }

    /// Fake player state. Scripted samples are consumed first, then the
    /// current value repeats.
    #[derive(Clone, Default)]
    pub struct FakePlayerState {
        inner: Arc<Mutex<FakePlayerStateInner>>,
    }

    impl FakePlayerState {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_job(&self, job: Option<u32>) {
            self.inner.lock().current = job.map(JobId::new);
        }

        /// Queue a sequence of job ids to return on successive reads.
        pub fn script(&self, jobs: &[u32]) {
            let mut inner = self.inner.lock();
            inner.script.extend(jobs.iter().map(|id| Sample::Job(Some(JobId::new(*id)))));
        }

        /// Queue a single failing read.
        pub fn fail_next(&self) {
            self.inner.lock().script.push_back(Sample::Fail);
        }

        pub fn reads(&self) -> usize {
            self.inner.lock().reads
        }
    }

    impl PlayerState for FakePlayerState {
        fn current_job(&self) -> Result<Option<JobId>, StateReadError> {
            let mut inner = self.inner.lock();
            inner.reads += 1;
            match inner.script.pop_front() {
                Some(Sample::Job(job)) => {
                    inner.current = job;
                    Ok(job)
                }
                Some(Sample::Fail) => Err(StateReadError::InvalidJob("scripted".to_string())),
                None => Ok(inner.current),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakePlayerState;

#[cfg(test)]
#[path = "player_tests.rs"]
mod tests;
