// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck collections`

use anyhow::Result;
use clap::Args;
use jsneck_engine::Resolution;
use serde::Serialize;

use crate::color;
use crate::output::{print_json, OutputFormat, Table};

#[derive(Args)]
pub struct CollectionsArgs {
    /// Print the discovery trace after the list
    #[arg(long)]
    pub trace: bool,
}

#[derive(Serialize)]
struct CollectionsReport<'a> {
    candidates: &'a jsneck_core::CandidateSet,
    found: usize,
    selected: usize,
    source: &'a jsneck_engine::ResolvedFrom,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [String]>,
}

pub async fn handle(args: CollectionsArgs, format: OutputFormat) -> Result<()> {
    let store = super::config_store()?;
    let config = super::load_config(&store)?;
    let picker = super::loaded_picker().await?;
    let selected = picker.selected_index(&config);
    let Some(resolution) = picker.last_resolution() else {
        anyhow::bail!("collection discovery produced no result");
    };

    match format {
        OutputFormat::Json => print_json(&CollectionsReport {
            candidates: &resolution.candidates,
            found: resolution.candidates.found(),
            selected,
            source: &resolution.source,
            trace: args.trace.then(|| resolution.trace.lines()),
        })?,
        OutputFormat::Text => println!("{}", render_text(resolution, selected, args.trace)),
    }
    Ok(())
}

/// Numbered candidate list with the selected entry marked.
pub fn render_text(resolution: &Resolution, selected: usize, with_trace: bool) -> String {
    let mut table = Table::new(&["#", "Collection"]);
    for (index, name) in resolution.candidates.iter().enumerate() {
        let marker = if index == selected { "*" } else { " " };
        table.row(vec![format!("{marker}{index}"), name.to_string()]);
    }

    let found = resolution.candidates.found();
    let mut out = table.render();
    out.push_str(&format!(
        "\n\n{}",
        color::context(&format!("Found {found} collection(s) via {}", resolution.source))
    ));
    if with_trace {
        out.push_str("\n\n");
        out.push_str(&color::header("Trace"));
        for line in resolution.trace.lines() {
            out.push_str(&format!("\n  {}", color::muted(line)));
        }
    }
    out
}

#[cfg(test)]
#[path = "collections_tests.rs"]
mod tests;
