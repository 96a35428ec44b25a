// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collection names and the candidate set offered to the user.

use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Placeholder shown at the head of every candidate set, meaning "no selection".
pub const SENTINEL: &str = "— choose one —";

/// A non-blank collection name discovered from the customization engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CollectionName(String);

impl CollectionName {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for case-insensitive identity.
    pub fn fold_key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Case-insensitive order, falling back to ordinal order so the result is total.
    pub fn cmp_ignore_case(&self, other: &Self) -> Ordering {
        self.fold_key().cmp(&other.fold_key()).then_with(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CollectionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered candidate names, always headed by [`SENTINEL`].
///
/// Real names are unique ignoring case (first spelling seen wins) and sorted
/// case-insensitively. Index 0 is always the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    names: Vec<CollectionName>,
}

impl CandidateSet {
    /// A set holding only the sentinel.
    pub fn sentinel_only() -> Self {
        Self::default()
    }

    /// Build a set from raw names: blanks dropped, case-insensitive dedup, sorted.
    pub fn from_names<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut names: Vec<CollectionName> = raw
            .into_iter()
            .filter_map(CollectionName::new)
            .filter(|name| seen.insert(name.fold_key()))
            .collect();
        names.sort_by(CollectionName::cmp_ignore_case);
        Self { names }
    }

    /// Real names, without the sentinel.
    pub fn names(&self) -> &[CollectionName] {
        &self.names
    }

    /// Every entry including the sentinel at index 0.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        std::iter::once(SENTINEL).chain(self.names.iter().map(CollectionName::as_str))
    }

    /// Entry at `index`, where 0 is the sentinel.
    pub fn get(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(SENTINEL),
            i => self.names.get(i - 1).map(CollectionName::as_str),
        }
    }

    /// Index of an exact (ordinal) match, 0 when absent.
    pub fn position(&self, name: &str) -> usize {
        self.names.iter().position(|n| n.as_str() == name).map(|i| i + 1).unwrap_or(0)
    }

    /// Total entries including the sentinel.
    pub fn len(&self) -> usize {
        self.names.len() + 1
    }

    /// Never true; a candidate set always holds the sentinel.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of real names found.
    pub fn found(&self) -> usize {
        self.names.len()
    }

    pub fn is_sentinel_only(&self) -> bool {
        self.names.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }
}

impl Serialize for CandidateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
#[path = "collection_tests.rs"]
mod tests;
