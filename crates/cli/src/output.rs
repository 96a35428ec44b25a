// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Left-aligned text table. Column widths are measured before coloring.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self { headers: headers.to_vec(), rows: Vec::new() }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }

    /// Render with a colored header row; the last column is not padded.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let line = |cells: Vec<String>, raw: Vec<usize>| -> String {
            let last = cells.len().saturating_sub(1);
            let mut out = String::new();
            for (i, (cell, len)) in cells.into_iter().zip(raw).enumerate() {
                out.push_str(&cell);
                if i < last {
                    let width = widths.get(i).copied().unwrap_or(len);
                    out.push_str(&" ".repeat(width.saturating_sub(len) + 2));
                }
            }
            out
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(line(
            self.headers.iter().map(|h| crate::color::header(h)).collect(),
            self.headers.iter().map(|h| h.chars().count()).collect(),
        ));
        for row in &self.rows {
            lines.push(line(row.clone(), row.iter().map(|c| c.chars().count()).collect()));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
