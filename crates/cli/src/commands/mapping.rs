// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck mapping`

use anyhow::Result;
use jsneck_core::PluginConfig;
use serde::Serialize;

use crate::color;
use crate::output::{print_json, OutputFormat, Table};

#[derive(Serialize)]
struct MappingRow<'a> {
    job: &'a str,
    group: &'a str,
    option: &'a str,
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let store = super::config_store()?;
    let config = super::load_config(&store)?;

    match format {
        OutputFormat::Json => {
            let rows: Vec<MappingRow<'_>> = config
                .mappings
                .iter()
                .map(|(job, m)| MappingRow { job, group: &m.group, option: &m.option })
                .collect();
            print_json(&rows)?;
        }
        OutputFormat::Text => println!("{}", render_text(&config)),
    }
    Ok(())
}

pub fn render_text(config: &PluginConfig) -> String {
    if config.mappings.is_empty() {
        return color::muted("No mappings configured");
    }
    let mut table = Table::new(&["Job", "Group", "Option"]);
    for (job, mapping) in &config.mappings {
        table.row(vec![job.clone(), mapping.group.clone(), mapping.option.clone()]);
    }
    table.render()
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
