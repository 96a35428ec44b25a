// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Edge-triggered job change detection.
//!
//! Runs inside the host's per-tick callback, so it never performs I/O of its
//! own beyond the player state read and never surfaces a failure: a failed
//! read is retried on the next tick.

use crate::SharedConfig;
use jsneck_adapters::{PlayerState, Scheduler, Subscription};
use jsneck_core::JobId;

/// Emits the new job id whenever the player's job differs from the last one seen.
pub struct StateChangeDetector<P> {
    player: P,
    config: SharedConfig,
    /// `None` until the first job is observed.
    last_seen: Option<JobId>,
}

impl<P: PlayerState> StateChangeDetector<P> {
    pub fn new(player: P, config: SharedConfig) -> Self {
        Self { player, config, last_seen: None }
    }

    pub fn last_seen(&self) -> Option<JobId> {
        self.last_seen
    }

    /// Sample once. Returns the new job id on a change.
    pub fn poll(&mut self) -> Option<JobId> {
        {
            let config = self.config.read();
            if !config.enabled || !config.is_configured() {
                return None;
            }
        }

        let job = match self.player.current_job() {
            Ok(Some(job)) => job,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!(error = %e, "player state unavailable, retrying next tick");
                return None;
            }
        };

        if self.last_seen == Some(job) {
            return None;
        }
        tracing::info!(previous = ?self.last_seen.map(JobId::get), %job, "job changed");
        self.last_seen = Some(job);
        Some(job)
    }
}

impl<P: PlayerState + 'static> StateChangeDetector<P> {
    /// Subscribe to `scheduler`, calling `on_change` for every detected change.
    ///
    /// The detector lives until the returned handle is dropped.
    pub fn attach<S, F>(mut self, scheduler: &S, mut on_change: F) -> DetectorHandle
    where
        S: Scheduler + ?Sized,
        F: FnMut(JobId) + Send + 'static,
    {
        let subscription = scheduler.subscribe(Box::new(move || {
            if let Some(job) = self.poll() {
                on_change(job);
            }
        }));
        DetectorHandle { subscription }
    }
}

/// Keeps an attached detector subscribed; dropping it unsubscribes.
#[derive(Debug)]
pub struct DetectorHandle {
    subscription: Subscription,
}

impl DetectorHandle {
    pub fn subscription_id(&self) -> u64 {
        self.subscription.id()
    }
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
