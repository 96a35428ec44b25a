// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use jsneck_adapters::FakeFileSystem;

fn doc(json: &str) -> Document {
    Document::parse(json).unwrap()
}

#[yare::parameterized(
    name_field       = { r#"{"Name":"Default","Id":"abc"}"#,            Extraction::Direct(vec!["Default".into()]) },
    blank_name       = { r#"{"Name":""}"#,                              Extraction::Direct(vec![]) },
    nested_fallback  = { r#"{"Data":{"Name":"Inner"}}"#,                Extraction::Scanned(vec!["Inner".into()]) },
    numeric_name     = { r#"{"Name":3,"Sub":[{"Name":"S"}]}"#,          Extraction::Scanned(vec!["S".into()]) },
    array_root       = { r#"[{"Name":"A"},{"Name":"B"}]"#,              Extraction::Scanned(vec!["A".into(), "B".into()]) },
)]
fn collection_doc_cases(json: &str, expected: Extraction) {
    assert_eq!(names_from_collection_doc(&doc(json)), expected);
}

#[yare::parameterized(
    keyed            = { r#"{"Collections":{"Alpha":{},"Beta":{}}}"#,                 Extraction::Direct(vec!["Alpha".into(), "Beta".into()]) },
    empty_object     = { r#"{"Collections":{}}"#,                                     Extraction::Direct(vec![]) },
    array_fallback   = { r#"{"Collections":[{"Name":"Gamma"}]}"#,                     Extraction::Scanned(vec!["Gamma".into()]) },
    missing_field    = { r#"{"x":{"y":[{"Name":"Gamma"}]}}"#,                         Extraction::Scanned(vec!["Gamma".into()]) },
)]
fn legacy_doc_cases(json: &str, expected: Extraction) {
    assert_eq!(names_from_legacy_doc(&doc(json)), expected);
}

#[test]
fn collection_file_traces_source() {
    let fs = FakeFileSystem::new();
    fs.add_file("/p/collections/a.json", r#"{"Name":"Default"}"#);
    fs.add_file("/p/collections/b.json", r#"{"Wrapped":{"Name":"Raid"}}"#);
    let mut trace = DiscoveryTrace::new();

    let a = read_collection_file(&fs, Path::new("/p/collections/a.json"), &mut trace);
    let b = read_collection_file(&fs, Path::new("/p/collections/b.json"), &mut trace);

    assert_eq!(a, vec!["Default"]);
    assert_eq!(b, vec!["Raid"]);
    assert_eq!(
        trace.lines(),
        &["Name from a.json: Default".to_string(), "Name (scan) b.json: Raid".to_string()]
    );
}

#[test]
fn malformed_collection_file_is_traced_not_fatal() {
    let fs = FakeFileSystem::new();
    fs.add_file("/p/collections/broken.json", "{\"Name\": ");
    let mut trace = DiscoveryTrace::new();

    let names = read_collection_file(&fs, Path::new("/p/collections/broken.json"), &mut trace);
    assert!(names.is_empty());
    assert_eq!(trace.lines(), &["Read error broken.json: unexpected end of document".to_string()]);
}

#[test]
fn unreadable_legacy_file_is_traced() {
    let fs = FakeFileSystem::new();
    fs.add_file("/p/collections.json", "{}");
    fs.deny("/p/collections.json");
    let mut trace = DiscoveryTrace::new();

    let names = read_legacy_file(&fs, Path::new("/p/collections.json"), &mut trace);
    assert!(names.is_empty());
    assert_eq!(trace.lines(), &["Legacy error collections.json: PermissionDenied".to_string()]);
}

#[test]
fn legacy_keys_are_traced() {
    let fs = FakeFileSystem::new();
    fs.add_file("/p/collections.json", r#"{"Collections":{"Alpha":{},"Beta":{}}}"#);
    let mut trace = DiscoveryTrace::new();

    let names = read_legacy_file(&fs, Path::new("/p/collections.json"), &mut trace);
    assert_eq!(names, vec!["Alpha", "Beta"]);
    assert_eq!(trace.lines(), &["Legacy key: Alpha".to_string(), "Legacy key: Beta".to_string()]);
}
