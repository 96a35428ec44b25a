// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("collections")
        .stdout_has("config")
        .stdout_has("mapping")
        .stdout_has("jobs")
        .stdout_has("watch");
}

#[test]
fn config_help_shows_subcommands() {
    cli()
        .args(&["config", "--help"])
        .passes()
        .stdout_has("show")
        .stdout_has("set-target")
        .stdout_has("enable")
        .stdout_has("disable");
}

#[test]
fn version_includes_package_version() {
    cli().args(&["--version"]).passes().stdout_has("jsneck 0.1.0+");
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    cli().fails_with(2).stderr_has("Usage:");
}

#[test]
fn watch_requires_state_file() {
    cli().args(&["watch"]).fails_with(2).stderr_has("--state-file");
}
