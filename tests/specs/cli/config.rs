// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck config` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn show_on_first_run_seeds_defaults() {
    let sandbox = Sandbox::new();
    sandbox
        .jsneck()
        .args(&["config", "show"])
        .passes()
        .stdout_has("Enabled: true")
        .stdout_has("Target collection: (none)")
        .stdout_has("Mappings: 22");

    let stored = sandbox.read_config();
    assert_eq!(stored["Version"], 1);
    assert_eq!(stored["Mappings"]["PLD"], serde_json::json!({"Group": "Textures", "Option": "Paladin"}));
}

#[test]
fn existing_mappings_are_not_reseeded() {
    let sandbox = Sandbox::new();
    sandbox.file(
        "config/config.json",
        r#"{"Version": 1, "TargetCollection": "Raid", "Mappings": {"WHM": {"Group": "Glow", "Option": "On"}}}"#,
    );

    sandbox
        .jsneck()
        .args(&["config", "show"])
        .passes()
        .stdout_has("Target collection: Raid")
        .stdout_has("Mappings: 1");
}

#[test]
fn set_target_by_name() {
    let sandbox = Sandbox::new();
    sandbox.jsneck().args(&["config", "set-target", "Raid"]).passes().stdout_eq("Target: Raid (enabled)");
    assert_eq!(sandbox.read_config()["TargetCollection"], "Raid");
}

#[test]
fn set_target_by_index_uses_discovered_names() {
    let sandbox = Sandbox::new();
    sandbox.collection("a.json", "Raid");
    sandbox.collection("b.json", "Alt");

    sandbox.jsneck().args(&["config", "set-target", "--index", "2"]).passes().stdout_has("Target: Raid");
    assert_eq!(sandbox.read_config()["TargetCollection"], "Raid");
}

#[test]
fn index_zero_clears_target() {
    let sandbox = Sandbox::new();
    sandbox.jsneck().args(&["config", "set-target", "Raid"]).passes();
    sandbox.jsneck().args(&["config", "set-target", "--index", "0"]).passes().stdout_has("Target: (none)");
    assert_eq!(sandbox.read_config()["TargetCollection"], "__CHOOSE__");
}

#[test]
fn index_out_of_range_is_usage_error() {
    let sandbox = Sandbox::new();
    sandbox.collection("a.json", "Raid");
    sandbox
        .jsneck()
        .args(&["config", "set-target", "--index", "5"])
        .fails_with(2)
        .stderr_has("index 5 out of range; 2 entries");
}

#[test]
fn blank_name_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox.jsneck().args(&["config", "set-target", "  "]).fails_with(2).stderr_has("must not be blank");
}

#[test]
fn disable_then_enable() {
    let sandbox = Sandbox::new();
    sandbox.jsneck().args(&["config", "disable"]).passes().stdout_has("(disabled)");
    assert_eq!(sandbox.read_config()["Enabled"], false);

    sandbox.jsneck().args(&["config", "enable"]).passes().stdout_has("(enabled)");
    assert_eq!(sandbox.read_config()["Enabled"], true);
}

#[test]
fn show_json_uses_persisted_field_names() {
    let sandbox = Sandbox::new();
    let run = sandbox.jsneck().args(&["config", "show", "--output", "json"]).passes();
    let json = run.json();

    assert_eq!(json["TargetCollection"], "");
    assert_eq!(json["KeepCurrentStoneAfterChangingClass"], false);
    assert_eq!(json["EnableGlow"], true);
}

#[test]
fn corrupt_config_fails() {
    let sandbox = Sandbox::new();
    sandbox.file("config/config.json", "{ broken");
    sandbox.jsneck().args(&["config", "show"]).fails_with(1).stderr_has("failed to read");
}
