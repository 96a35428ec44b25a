// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck jobs`

use anyhow::Result;
use jsneck_core::{PluginConfig, JOB_TABLE};
use serde::Serialize;

use crate::output::{print_json, OutputFormat, Table};

#[derive(Debug, Serialize, PartialEq)]
pub struct JobRow {
    pub id: u32,
    pub abbreviation: &'static str,
    pub name: &'static str,
    /// Option applied for this job, if mapped.
    pub option: Option<String>,
}

pub fn rows(config: &PluginConfig) -> Vec<JobRow> {
    JOB_TABLE
        .iter()
        .map(|&(id, abbreviation, name)| JobRow {
            id,
            abbreviation,
            name,
            option: config.mapping_for(abbreviation).map(|m| m.option.clone()),
        })
        .collect()
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let store = super::config_store()?;
    let config = super::load_config(&store)?;
    let rows = rows(&config);

    match format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Text => {
            let mut table = Table::new(&["Id", "Job", "Name", "Option"]);
            for row in rows {
                table.row(vec![
                    row.id.to_string(),
                    row.abbreviation.to_string(),
                    row.name.to_string(),
                    row.option.unwrap_or_else(|| "-".to_string()),
                ]);
            }
            println!("{}", table.render());
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "jobs_tests.rs"]
mod tests;
