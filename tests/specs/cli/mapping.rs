// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck mapping` and `jsneck jobs` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn mapping_shows_bundled_defaults() {
    let sandbox = Sandbox::new();
    sandbox
        .jsneck()
        .args(&["mapping"])
        .passes()
        .stdout_has("Job  Group     Option")
        .stdout_has("PLD  Textures  Paladin")
        .stdout_has("PCT  Textures  Pictomancer");
}

#[test]
fn mapping_json_rows() {
    let sandbox = Sandbox::new();
    let run = sandbox.jsneck().args(&["mapping", "-o", "json"]).passes();
    let rows = run.json();

    assert_eq!(rows.as_array().map(Vec::len), Some(22));
    assert!(rows
        .as_array()
        .unwrap()
        .contains(&serde_json::json!({"job": "WHM", "group": "Textures", "option": "White Mage"})));
}

#[test]
fn jobs_lists_every_known_job() {
    let sandbox = Sandbox::new();
    let run = sandbox.jsneck().args(&["jobs", "--output", "json"]).passes();
    let jobs = run.json();

    assert_eq!(jobs.as_array().map(Vec::len), Some(42));
    assert_eq!(jobs[18], serde_json::json!({"id": 19, "abbreviation": "PLD", "name": "Paladin", "option": "Paladin"}));
    assert_eq!(jobs[0]["option"], serde_json::Value::Null);
}
