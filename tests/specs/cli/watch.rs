// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck watch` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

fn configured_sandbox() -> Sandbox {
    let sandbox = Sandbox::new();
    sandbox.jsneck().args(&["config", "set-target", "Raid"]).passes();
    sandbox
}

#[test]
fn once_applies_mapping_for_current_job() {
    let sandbox = configured_sandbox();
    let state = sandbox.file("job", "19\n");

    sandbox
        .jsneck()
        .args(&["watch", "--once", "--state-file"])
        .args(&[state.to_str().unwrap()])
        .passes()
        .stdout_eq("Applied 19 (PLD): Raid [Textures = Paladin]");
}

#[test]
fn once_without_character_reports_no_change() {
    let sandbox = configured_sandbox();
    let state = sandbox.file("job", "  \n");

    sandbox
        .jsneck()
        .args(&["watch", "--once", "--state-file", state.to_str().unwrap()])
        .passes()
        .stdout_eq("No job change");
}

#[test]
fn once_with_missing_state_file_reports_no_change() {
    let sandbox = configured_sandbox();
    let missing = sandbox.path().join("absent");

    sandbox
        .jsneck()
        .args(&["watch", "--once", "--state-file", missing.to_str().unwrap()])
        .passes()
        .stdout_eq("No job change");
}

#[test]
fn unconfigured_reads_nothing_and_warns() {
    let sandbox = Sandbox::new();
    let state = sandbox.file("job", "19");

    sandbox
        .jsneck()
        .args(&["watch", "--once", "--state-file", state.to_str().unwrap()])
        .passes()
        .stdout_eq("No job change")
        .stderr_has("no target collection configured");
}

#[test]
fn disabled_applies_nothing() {
    let sandbox = configured_sandbox();
    sandbox.jsneck().args(&["config", "disable"]).passes();
    let state = sandbox.file("job", "19");

    sandbox
        .jsneck()
        .args(&["watch", "--once", "--state-file", state.to_str().unwrap()])
        .passes()
        .stdout_eq("No job change")
        .stderr_has("detection is disabled");
}

#[test]
fn unmapped_job_is_reported() {
    let sandbox = configured_sandbox();
    // Gladiator has no default mapping
    let state = sandbox.file("job", "1");

    sandbox
        .jsneck()
        .args(&["watch", "--once", "--state-file", state.to_str().unwrap()])
        .passes()
        .stdout_eq("No mapping for 1 (GLA)");
}

#[test]
fn json_outcome_line() {
    let sandbox = configured_sandbox();
    let state = sandbox.file("job", "24");

    let run = sandbox
        .jsneck()
        .args(&["watch", "--once", "-o", "json", "--state-file", state.to_str().unwrap()])
        .passes();

    assert_eq!(
        run.json(),
        serde_json::json!({
            "outcome": "applied",
            "job": 24,
            "collection": "Raid",
            "group": "Textures",
            "option": "White Mage",
        })
    );
}

#[test]
fn invalid_job_id_is_not_fatal() {
    let sandbox = configured_sandbox();
    let state = sandbox.file("job", "paladin");

    sandbox
        .jsneck()
        .args(&["watch", "--once", "--state-file", state.to_str().unwrap()])
        .passes()
        .stdout_eq("No job change");
}
