// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! jsneck: switches the Jobstone Necklace option when the player changes job.

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::commands::{collections, config, jobs, mapping, watch};
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "jsneck", version = env::VERSION, styles = color::styles())]
#[command(about = "Apply per-job Penumbra options to a chosen collection")]
struct Cli {
    /// Output format
    #[arg(long, short = 'o', global = true, value_enum, default_value_t)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the collections that can be targeted
    Collections(collections::CollectionsArgs),
    /// Inspect or edit the configuration
    Config(config::ConfigArgs),
    /// Show the job to option mapping table
    Mapping,
    /// Show the known jobs and their mapped options
    Jobs,
    /// Follow a job state file and apply mappings on every change
    Watch(watch::WatchArgs),
}

fn init_log() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .with_env_var(env::LOG_ENV)
                .from_env_lossy(),
        )
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.output;
    match cli.command {
        Command::Collections(args) => collections::handle(args, format).await,
        Command::Config(args) => config::handle(args.command, format).await,
        Command::Mapping => mapping::handle(format),
        Command::Jobs => jobs::handle(format),
        Command::Watch(args) => watch::handle(args, format).await,
    }
}

#[tokio::main]
async fn main() {
    init_log();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        let code = match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("error: {}", exit.message);
                exit.code
            }
            None => {
                eprintln!("error: {e:#}");
                1
            }
        };
        std::process::exit(code);
    }
}
