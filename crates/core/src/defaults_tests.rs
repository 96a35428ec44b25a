// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::JobId;

#[test]
fn bundled_document_parses() {
    let defaults = DefaultMappings::bundled().unwrap();
    assert_eq!(defaults.group, "Textures");
    assert!(!defaults.enable_glow_default);
    assert_eq!(defaults.jobs.get("PLD").map(String::as_str), Some("Paladin"));
}

#[test]
fn bundled_jobs_are_known_abbreviations() {
    let defaults = DefaultMappings::bundled().unwrap();
    for job in defaults.jobs.keys() {
        assert!(JobId::from_abbreviation(job).is_some(), "unknown job {job}");
    }
}

#[test]
fn missing_fields_use_defaults() {
    let defaults = DefaultMappings::parse(r#"{"Jobs":{"WAR":"Warrior"}}"#).unwrap();
    assert_eq!(defaults.group, DEFAULT_GROUP);
    assert!(!defaults.enable_glow_default);
    let rows: Vec<_> = defaults.rows().collect();
    assert_eq!(rows, vec![("WAR", JobMapping::new("Textures", "Warrior"))]);
}

#[test]
fn rows_skip_blank_options() {
    let defaults =
        DefaultMappings::parse(r#"{"Group":"Glow","Jobs":{"WAR":"Warrior","PLD":" "}}"#).unwrap();
    let rows: Vec<_> = defaults.rows().collect();
    assert_eq!(rows, vec![("WAR", JobMapping::new("Glow", "Warrior"))]);
}

#[test]
fn seeds_empty_table() {
    let defaults = DefaultMappings::parse(
        r#"{"Group":"Textures","EnableGlowDefault":true,"Jobs":{"PLD":"Paladin","WHM":"White Mage"}}"#,
    )
    .unwrap();
    let mut config = PluginConfig { enable_glow: false, ..PluginConfig::default() };

    assert!(seed_defaults_if_needed(&mut config, &defaults));
    assert_eq!(config.mappings.len(), 2);
    assert_eq!(config.mappings["WHM"], JobMapping::new("Textures", "White Mage"));
    assert!(config.enable_glow);
}

#[test]
fn never_regenerates_populated_table() {
    let defaults = DefaultMappings::bundled().unwrap();
    let mut config = PluginConfig::default();
    config.mappings.insert("PLD".into(), JobMapping::new("Custom", "Mine"));

    assert!(!seed_defaults_if_needed(&mut config, &defaults));
    assert_eq!(config.mappings.len(), 1);
    assert_eq!(config.mappings["PLD"].group, "Custom");
}

#[test]
fn enable_glow_true_is_kept() {
    let defaults = DefaultMappings::parse(r#"{"EnableGlowDefault":false,"Jobs":{"PLD":"Paladin"}}"#)
        .unwrap();
    let mut config = PluginConfig::default();
    assert!(config.enable_glow);
    seed_defaults_if_needed(&mut config, &defaults);
    assert!(config.enable_glow);
}
