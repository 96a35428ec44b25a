// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic trail collected during one collection resolution.

use serde::Serialize;
use std::fmt;

/// Ordered, human-readable notes describing what discovery tried and found.
///
/// Each line is mirrored to `tracing` at debug level as it is recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiscoveryTrace {
    lines: Vec<String>,
}

impl DiscoveryTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "jsneck::discovery", "{line}");
        self.lines.push(line);
    }

    /// Record a fault as `<context>: <kind>`.
    pub fn fault(&mut self, context: impl fmt::Display, kind: impl fmt::Display) {
        self.push(format!("{context}: {kind}"));
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for DiscoveryTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join(" | "))
    }
}

#[cfg(test)]
#[path = "trace_tests.rs"]
mod tests;
