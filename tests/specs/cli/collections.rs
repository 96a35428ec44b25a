// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `jsneck collections` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn empty_home_lists_only_sentinel() {
    let sandbox = Sandbox::new();
    sandbox
        .jsneck()
        .args(&["collections"])
        .passes()
        .stdout_has("*0  — choose one —")
        .stdout_has("Found 0 collection(s) via nothing")
        .stdout_lacks("Trace");
}

#[test]
fn lists_modern_and_legacy_collections_sorted() {
    let sandbox = Sandbox::new();
    sandbox.collection("a.json", "Zeta");
    sandbox.collection("b.json", "alpha");
    sandbox.file(
        sandbox.engine_root().join("collections.json"),
        r#"{"Collections": {"Beta": {}, "ALPHA": {}}}"#,
    );

    sandbox
        .jsneck()
        .args(&["collections"])
        .passes()
        .stdout_eq(
            "#   Collection\n\
             *0  — choose one —\n \
             1  alpha\n \
             2  Beta\n \
             3  Zeta\n\
             \n\
             Found 3 collection(s) via filesystem",
        );
}

#[test]
fn malformed_document_is_skipped() {
    let sandbox = Sandbox::new();
    sandbox.collection("good.json", "Raid");
    sandbox.file(sandbox.engine_root().join("collections/bad.json"), "{ nope");

    sandbox
        .jsneck()
        .args(&["collections", "--trace"])
        .passes()
        .stdout_has(" 1  Raid")
        .stdout_has("Read error bad.json: syntax error")
        .stdout_has("Total files read: 2 | names: 1");
}

#[test]
fn nested_names_are_found_by_scan() {
    let sandbox = Sandbox::new();
    sandbox.file(
        sandbox.engine_root().join("collections/nested.json"),
        r#"{"x": {"y": [{"Name": "Gamma"}]}}"#,
    );

    sandbox.jsneck().args(&["collections"]).passes().stdout_has(" 1  Gamma");
}

#[test]
fn wine_prefix_roots_are_searched() {
    let sandbox = Sandbox::new();
    sandbox.file(
        ".xlcore/wineprefix/drive_c/users/me/AppData/Roaming/XIVLauncher/pluginConfigs/Penumbra/collections/w.json",
        r#"{"Name": "FromWine"}"#,
    );

    sandbox.jsneck().args(&["collections"]).passes().stdout_has(" 1  FromWine");
}

#[test]
fn json_output_reports_source_and_selection() {
    let sandbox = Sandbox::new();
    sandbox.collection("a.json", "Raid");
    sandbox.jsneck().args(&["config", "set-target", "Raid"]).passes();

    let run = sandbox.jsneck().args(&["collections", "-o", "json"]).passes();
    let json = run.json();

    assert_eq!(json["candidates"], serde_json::json!(["— choose one —", "Raid"]));
    assert_eq!(json["found"], 1);
    assert_eq!(json["selected"], 1);
    assert_eq!(json["source"], "filesystem");
    assert!(json.get("trace").is_none());
}

#[test]
fn unreachable_socket_falls_back_to_filesystem() {
    let sandbox = Sandbox::new();
    sandbox.collection("a.json", "Raid");

    sandbox
        .jsneck()
        .env("JSNECK_IPC_SOCKET", sandbox.path().join("missing.sock"))
        .args(&["collections", "--trace"])
        .passes()
        .stdout_has("IPC Penumbra.GetCollections error: NotRegistered")
        .stdout_has(" 1  Raid");
}
