// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed configuration documents written by the customization engine.
//!
//! The engine's on-disk schema has changed between its releases, so name
//! extraction works over a small tagged tree rather than typed structs.
//! Only the shapes that matter for finding names are kept: objects, arrays
//! and strings. Numbers, booleans and nulls collapse into [`Document::Other`].

use thiserror::Error;

/// Field holding a collection's display name.
pub const NAME_FIELD: &str = "Name";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid document: {0}")]
    Invalid(#[from] serde_json::Error),
}

impl DocumentError {
    /// Short label used in discovery traces.
    pub fn kind(&self) -> &'static str {
        match self {
            DocumentError::Invalid(e) if e.is_eof() => "unexpected end of document",
            DocumentError::Invalid(e) if e.is_syntax() => "syntax error",
            DocumentError::Invalid(_) => "invalid document",
        }
    }
}

/// A parsed document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Fields in parser order (keys sorted by `serde_json`).
    Object(Vec<(String, Document)>),
    Array(Vec<Document>),
    String(String),
    Other,
}

impl Document {
    /// Parse JSON text into a document tree.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(Self::from(value))
    }

    /// Field lookup on an object; `None` for other variants.
    pub fn get(&self, key: &str) -> Option<&Document> {
        match self {
            Document::Object(fields) => fields.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    /// Field names when this is an object.
    pub fn keys(&self) -> Option<impl Iterator<Item = &str>> {
        match self {
            Document::Object(fields) => Some(fields.iter().map(|(k, _)| k.as_str())),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Document::Object(_))
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Object(map) => {
                Document::Object(map.into_iter().map(|(k, v)| (k, Document::from(v))).collect())
            }
            Value::Array(items) => Document::Array(items.into_iter().map(Document::from).collect()),
            Value::String(s) => Document::String(s),
            Value::Null | Value::Bool(_) | Value::Number(_) => Document::Other,
        }
    }
}

/// Collect every non-blank string `Name` field anywhere in the tree.
///
/// Objects contribute their own `Name` and recurse into every other field;
/// arrays recurse element-wise. Output is in traversal order and may repeat.
pub fn scan_names(doc: &Document) -> Vec<String> {
    let mut names = Vec::new();
    scan_into(doc, &mut names);
    names
}

fn scan_into(doc: &Document, names: &mut Vec<String>) {
    match doc {
        Document::Object(fields) => {
            for (key, value) in fields {
                match value {
                    Document::String(s) if key == NAME_FIELD => {
                        if !s.trim().is_empty() {
                            names.push(s.clone());
                        }
                    }
                    Document::Object(_) | Document::Array(_) => scan_into(value, names),
                    _ => {}
                }
            }
        }
        Document::Array(items) => {
            for item in items {
                scan_into(item, names);
            }
        }
        Document::String(_) | Document::Other => {}
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
