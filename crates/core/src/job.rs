// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifiers as reported by the game client.
//!
//! The client exposes the local player's class/job as a numeric row id.
//! Mappings are keyed by the job's abbreviation, so the detector's numeric
//! output is translated through [`JOB_TABLE`] before a mapping is looked up.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric class/job row id of the local player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u32);

impl JobId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Three-letter abbreviation, if the id is a known class or job.
    pub fn abbreviation(self) -> Option<&'static str> {
        JOB_TABLE.iter().find(|(id, _, _)| *id == self.0).map(|(_, abbr, _)| *abbr)
    }

    /// Display name, if the id is a known class or job.
    pub fn display_name(self) -> Option<&'static str> {
        JOB_TABLE.iter().find(|(id, _, _)| *id == self.0).map(|(_, _, name)| *name)
    }

    /// Look up a job id by abbreviation (case-insensitive).
    pub fn from_abbreviation(abbr: &str) -> Option<Self> {
        JOB_TABLE
            .iter()
            .find(|(_, a, _)| a.eq_ignore_ascii_case(abbr))
            .map(|(id, _, _)| Self(*id))
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.abbreviation() {
            Some(abbr) => write!(f, "{} ({})", self.0, abbr),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<u32> for JobId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// `(row id, abbreviation, name)` for every class and job.
pub const JOB_TABLE: &[(u32, &str, &str)] = &[
    (1, "GLA", "Gladiator"),
    (2, "PGL", "Pugilist"),
    (3, "MRD", "Marauder"),
    (4, "LNC", "Lancer"),
    (5, "ARC", "Archer"),
    (6, "CNJ", "Conjurer"),
    (7, "THM", "Thaumaturge"),
    (8, "CRP", "Carpenter"),
    (9, "BSM", "Blacksmith"),
    (10, "ARM", "Armorer"),
    (11, "GSM", "Goldsmith"),
    (12, "LTW", "Leatherworker"),
    (13, "WVR", "Weaver"),
    (14, "ALC", "Alchemist"),
    (15, "CUL", "Culinarian"),
    (16, "MIN", "Miner"),
    (17, "BTN", "Botanist"),
    (18, "FSH", "Fisher"),
    (19, "PLD", "Paladin"),
    (20, "MNK", "Monk"),
    (21, "WAR", "Warrior"),
    (22, "DRG", "Dragoon"),
    (23, "BRD", "Bard"),
    (24, "WHM", "White Mage"),
    (25, "BLM", "Black Mage"),
    (26, "ACN", "Arcanist"),
    (27, "SMN", "Summoner"),
    (28, "SCH", "Scholar"),
    (29, "ROG", "Rogue"),
    (30, "NIN", "Ninja"),
    (31, "MCH", "Machinist"),
    (32, "DRK", "Dark Knight"),
    (33, "AST", "Astrologian"),
    (34, "SAM", "Samurai"),
    (35, "RDM", "Red Mage"),
    (36, "BLU", "Blue Mage"),
    (37, "GNB", "Gunbreaker"),
    (38, "DNC", "Dancer"),
    (39, "RPR", "Reaper"),
    (40, "SGE", "Sage"),
    (41, "VPR", "Viper"),
    (42, "PCT", "Pictomancer"),
];

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
