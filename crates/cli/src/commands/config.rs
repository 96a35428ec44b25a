// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck config`

use anyhow::Result;
use clap::{Args, Subcommand};
use jsneck_core::PluginConfig;

use crate::color;
use crate::exit_error::ExitError;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the current configuration
    Show,
    /// Choose the collection the mappings are applied to
    SetTarget {
        /// Collection name
        #[arg(required_unless_present = "index", conflicts_with = "index")]
        name: Option<String>,
        /// Position in `jsneck collections` output (0 clears the target)
        #[arg(long)]
        index: Option<usize>,
    },
    /// Turn job detection on
    Enable,
    /// Turn job detection off
    Disable,
}

pub async fn handle(command: ConfigCommand, format: OutputFormat) -> Result<()> {
    let store = super::config_store()?;
    let mut config = super::load_config(&store)?;

    match command {
        ConfigCommand::Show => {
            match format {
                OutputFormat::Json => print_json(&config)?,
                OutputFormat::Text => println!("{}", render_text(&config)),
            }
            return Ok(());
        }
        ConfigCommand::SetTarget { name: Some(name), .. } => {
            if name.trim().is_empty() {
                return Err(ExitError::usage("collection name must not be blank").into());
            }
            config.set_target(Some(&name));
        }
        ConfigCommand::SetTarget { name: None, index } => {
            let index = index.unwrap_or(0);
            let picker = super::loaded_picker().await?;
            if picker.select(index, &mut config).is_none() {
                let len = picker.candidates().map_or(1, |c| c.len());
                return Err(ExitError::usage(format!(
                    "index {index} out of range; {len} entries (see `jsneck collections`)"
                ))
                .into());
            }
        }
        ConfigCommand::Enable => config.enabled = true,
        ConfigCommand::Disable => config.enabled = false,
    }

    super::save_config(&store, &config)?;
    match format {
        OutputFormat::Json => print_json(&config)?,
        OutputFormat::Text => println!("{}", summary(&config)),
    }
    Ok(())
}

fn summary(config: &PluginConfig) -> String {
    let target = config.target().map(color::header).unwrap_or_else(|| color::muted("(none)"));
    let state = if config.enabled { "enabled" } else { "disabled" };
    format!("Target: {target} ({state})")
}

pub fn render_text(config: &PluginConfig) -> String {
    let target = match config.target() {
        Some(name) => color::header(name),
        None => color::muted("(none)"),
    };
    [
        format!("{} {}", color::context("Version:"), config.version),
        format!("{} {}", color::context("Enabled:"), config.enabled),
        format!("{} {}", color::context("Target collection:"), target),
        format!(
            "{} {}",
            color::context("Keep current stone after changing class:"),
            config.keep_current_stone_after_changing_class
        ),
        format!("{} {}", color::context("Enable glow:"), config.enable_glow),
        format!("{} {}", color::context("Mappings:"), config.mappings.len()),
    ]
    .join("\n")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
