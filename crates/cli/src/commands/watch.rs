// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck watch`: stand-in for the host frame loop.
//!
//! Each tick reads the job id from a state file, runs the detector and
//! applies the mapping for every change through the logging sink.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use jsneck_adapters::{FilePlayerState, LoggingSink, TickScheduler};
use jsneck_engine::{shared_config, JobSwitcher, StateChangeDetector, SwitchOutcome};
use tokio::time::MissedTickBehavior;

use crate::color;
use crate::env;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct WatchArgs {
    /// File holding the current job id (blank or missing means no active character)
    #[arg(long)]
    pub state_file: PathBuf,
    /// Run a single tick and exit
    #[arg(long)]
    pub once: bool,
}

pub async fn handle(args: WatchArgs, format: OutputFormat) -> Result<()> {
    let store = super::config_store()?;
    let config = shared_config(super::load_config(&store)?);
    {
        let config = config.read();
        if !config.enabled {
            eprintln!("warning: detection is disabled; run `jsneck config enable`");
        } else if !config.is_configured() {
            eprintln!("warning: no target collection configured; run `jsneck config set-target`");
        }
    }

    let scheduler = TickScheduler::new();
    let detector = StateChangeDetector::new(FilePlayerState::new(&args.state_file), config.clone());
    let handle = JobSwitcher::new(config, Arc::new(LoggingSink::new())).start(detector, &scheduler);
    tracing::debug!(state_file = %args.state_file.display(), once = args.once, "watching");

    if args.once {
        scheduler.tick();
        let outcome = handle.take_outcome();
        report(outcome.as_ref(), format)?;
        if let Some(SwitchOutcome::Failed { error, .. }) = outcome {
            return Err(ExitError::new(1, format!("failed to apply mapping: {error}")).into());
        }
        return Ok(());
    }

    let mut interval = tokio::time::interval(env::tick_interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                scheduler.tick();
                if let Some(outcome) = handle.take_outcome() {
                    report(Some(&outcome), format)?;
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }
    Ok(())
}

fn report(outcome: Option<&SwitchOutcome>, format: OutputFormat) -> Result<()> {
    match format {
        // One object per line so the stream can be consumed incrementally
        OutputFormat::Json => match outcome {
            Some(outcome) => println!("{}", serde_json::to_string(outcome)?),
            None => println!("{}", serde_json::json!({ "outcome": "no_change" })),
        },
        OutputFormat::Text => println!("{}", describe(outcome)),
    }
    Ok(())
}

pub fn describe(outcome: Option<&SwitchOutcome>) -> String {
    let Some(outcome) = outcome else {
        return color::muted("No job change");
    };
    match outcome {
        SwitchOutcome::Applied { job, collection, group, option } => format!(
            "Applied {}: {} {}",
            color::literal(&job.to_string()),
            color::header(collection),
            color::context(&format!("[{group} = {option}]"))
        ),
        SwitchOutcome::Disabled => "Detection disabled".to_string(),
        SwitchOutcome::Unconfigured => "No target collection configured".to_string(),
        SwitchOutcome::UnknownJob { job } => format!("Job {job} is not in the job table"),
        SwitchOutcome::NoMapping { job, .. } => format!("No mapping for {job}"),
        SwitchOutcome::Failed { job, error } => format!("Failed to apply mapping for {job}: {error}"),
    }
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
