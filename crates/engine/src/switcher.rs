// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Applies the configured job mapping whenever the detector reports a change.

use crate::detector::{DetectorHandle, StateChangeDetector};
use crate::SharedConfig;
use jsneck_adapters::{MappingSink, PlayerState, Scheduler};
use jsneck_core::{CollectionName, JobId};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

/// Result of handling one job change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SwitchOutcome {
    Applied { job: JobId, collection: String, group: String, option: String },
    Disabled,
    Unconfigured,
    /// The id has no abbreviation in the job table.
    UnknownJob { job: JobId },
    NoMapping { job: JobId, abbreviation: String },
    Failed { job: JobId, error: String },
}

jsneck_core::simple_display! {
    SwitchOutcome {
        Applied { .. } => "applied",
        Disabled => "disabled",
        Unconfigured => "unconfigured",
        UnknownJob { .. } => "unknown job",
        NoMapping { .. } => "no mapping",
        Failed { .. } => "failed",
    }
}

pub struct JobSwitcher<K> {
    config: SharedConfig,
    sink: K,
}

impl<K: MappingSink> JobSwitcher<K> {
    pub fn new(config: SharedConfig, sink: K) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &SharedConfig {
        &self.config
    }

    /// Look up the mapping for `job` and apply it to the target collection.
    pub fn on_job_changed(&self, job: JobId) -> SwitchOutcome {
        let (collection, mapping, abbreviation) = {
            let config = self.config.read();
            if !config.enabled {
                return SwitchOutcome::Disabled;
            }
            let Some(collection) = config.target().and_then(CollectionName::new) else {
                return SwitchOutcome::Unconfigured;
            };
            let Some(abbreviation) = job.abbreviation() else {
                tracing::debug!(%job, "job not in job table");
                return SwitchOutcome::UnknownJob { job };
            };
            let Some(mapping) = config.mapping_for(abbreviation) else {
                tracing::debug!(%job, "no mapping for job");
                return SwitchOutcome::NoMapping { job, abbreviation: abbreviation.to_string() };
            };
            (collection, mapping.clone(), abbreviation)
        };

        match self.sink.apply(&collection, &mapping) {
            Ok(()) => {
                tracing::info!(%job, job_abbr = abbreviation, %collection, option = %mapping.option, "mapping applied");
                SwitchOutcome::Applied {
                    job,
                    collection: collection.to_string(),
                    group: mapping.group,
                    option: mapping.option,
                }
            }
            Err(e) => {
                tracing::warn!(%job, %collection, error = %e, "failed to apply mapping");
                SwitchOutcome::Failed { job, error: e.to_string() }
            }
        }
    }
}

impl<K: MappingSink + 'static> JobSwitcher<K> {
    /// Attach `detector` to `scheduler` and route every change through this switcher.
    pub fn start<P, S>(self, detector: StateChangeDetector<P>, scheduler: &S) -> SwitcherHandle
    where
        P: PlayerState + 'static,
        S: Scheduler + ?Sized,
    {
        let last = Arc::new(Mutex::new(None));
        let last_in = Arc::clone(&last);
        let detector = detector.attach(scheduler, move |job| {
            let outcome = self.on_job_changed(job);
            *last_in.lock() = Some(outcome);
        });
        SwitcherHandle { detector, last }
    }
}

/// Keeps a started switcher running; dropping it stops detection.
#[derive(Debug)]
pub struct SwitcherHandle {
    detector: DetectorHandle,
    last: Arc<Mutex<Option<SwitchOutcome>>>,
}

impl SwitcherHandle {
    /// Outcome of the most recent job change, if any.
    pub fn last_outcome(&self) -> Option<SwitchOutcome> {
        self.last.lock().clone()
    }

    /// Take the most recent outcome, leaving `None`.
    pub fn take_outcome(&self) -> Option<SwitchOutcome> {
        self.last.lock().take()
    }

    pub fn subscription_id(&self) -> u64 {
        self.detector.subscription_id()
    }
}

#[cfg(test)]
#[path = "switcher_tests.rs"]
mod tests;
