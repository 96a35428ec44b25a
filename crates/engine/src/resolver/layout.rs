// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Name extraction from the engine's two on-disk layouts.
//!
//! - modern: `<root>/collections/<id>.json`, one object per collection with a
//!   `Name` field
//! - legacy: `<root>/collections.json`, a single object whose `Collections`
//!   object is keyed by name
//!
//! Documents that do not match the expected shape fall back to a recursive
//! scan for `Name` fields.

use jsneck_adapters::FileSystem;
use jsneck_core::document::NAME_FIELD;
use jsneck_core::{scan_names, DiscoveryTrace, Document};
use std::path::Path;

/// Field of the legacy aggregate holding the per-collection objects.
pub const LEGACY_COLLECTIONS_FIELD: &str = "Collections";

/// How names were pulled out of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The document had the expected shape.
    Direct(Vec<String>),
    /// The document was scanned recursively.
    Scanned(Vec<String>),
}

impl Extraction {
    pub fn names(&self) -> &[String] {
        match self {
            Extraction::Direct(names) | Extraction::Scanned(names) => names,
        }
    }

    pub fn into_names(self) -> Vec<String> {
        match self {
            Extraction::Direct(names) | Extraction::Scanned(names) => names,
        }
    }
}

/// Names from a modern per-collection document.
///
/// An object with a string `Name` yields that name alone (nothing if blank).
pub fn names_from_collection_doc(doc: &Document) -> Extraction {
    match doc.get(NAME_FIELD).and_then(Document::as_str) {
        Some(name) if doc.is_object() => {
            let names = if name.trim().is_empty() { vec![] } else { vec![name.to_string()] };
            Extraction::Direct(names)
        }
        _ => Extraction::Scanned(scan_names(doc)),
    }
}

/// Names from the legacy aggregate: every key of the `Collections` object.
pub fn names_from_legacy_doc(doc: &Document) -> Extraction {
    match doc.get(LEGACY_COLLECTIONS_FIELD) {
        Some(collections @ Document::Object(_)) => Extraction::Direct(
            collections
                .keys()
                .into_iter()
                .flatten()
                .filter(|k| !k.trim().is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => Extraction::Scanned(scan_names(doc)),
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn load(fs: &dyn FileSystem, path: &Path) -> Result<Document, String> {
    let text = fs.read_to_string(path).map_err(|e| e.kind())?;
    Document::parse(&text).map_err(|e| e.kind().to_string())
}

/// Read one modern collection file. Faults are traced and yield no names.
pub fn read_collection_file(fs: &dyn FileSystem, path: &Path, trace: &mut DiscoveryTrace) -> Vec<String> {
    let label = file_label(path);
    let doc = match load(fs, path) {
        Ok(doc) => doc,
        Err(kind) => {
            trace.fault(format!("Read error {label}"), kind);
            return Vec::new();
        }
    };
    let extraction = names_from_collection_doc(&doc);
    for name in extraction.names() {
        match extraction {
            Extraction::Direct(_) => trace.push(format!("Name from {label}: {name}")),
            Extraction::Scanned(_) => trace.push(format!("Name (scan) {label}: {name}")),
        }
    }
    extraction.into_names()
}

/// Read the legacy aggregate file. Faults are traced and yield no names.
pub fn read_legacy_file(fs: &dyn FileSystem, path: &Path, trace: &mut DiscoveryTrace) -> Vec<String> {
    let label = file_label(path);
    let doc = match load(fs, path) {
        Ok(doc) => doc,
        Err(kind) => {
            trace.fault(format!("Legacy error {label}"), kind);
            return Vec::new();
        }
    };
    let extraction = names_from_legacy_doc(&doc);
    for name in extraction.names() {
        match extraction {
            Extraction::Direct(_) => trace.push(format!("Legacy key: {name}")),
            Extraction::Scanned(_) => trace.push(format!("Name (scan) {label}: {name}")),
        }
    }
    extraction.into_names()
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
