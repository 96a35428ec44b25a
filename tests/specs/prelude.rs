// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.
//!
//! Every command runs against an isolated [`Sandbox`]: a temp directory used
//! as HOME and config dir, with no engine socket and colors off.

use std::path::{Path, PathBuf};

pub use similar_asserts::assert_eq;

/// Bare `jsneck` command, not bound to a sandbox.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::cargo_bin("jsneck").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("JSNECK_LOG");
    Cli { cmd }
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit code 0.
    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output);
        assert_eq!(run.code, Some(0), "expected success\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }

    /// Run and require exit code `code`.
    pub fn fails_with(mut self, code: i32) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run::from(output);
        assert_eq!(run.code, Some(code), "unexpected exit\nstdout:\n{}\nstderr:\n{}", run.stdout, run.stderr);
        run
    }
}

pub struct Run {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for Run {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl Run {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}\nstdout:\n{}", self.stdout);
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}\nstdout:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}\nstderr:\n{}", self.stderr);
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout.trim_end(), expected.trim_end());
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Isolated HOME plus config dir.
pub struct Sandbox {
    dir: tempfile::TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self { dir: tempfile::TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.path().join("config")
    }

    /// Engine config root under the sandbox HOME.
    pub fn engine_root(&self) -> PathBuf {
        self.path().join(".xlcore/pluginConfigs/Penumbra")
    }

    /// Write `contents` at `rel` under the sandbox, creating parents.
    pub fn file(&self, rel: impl AsRef<Path>, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// One modern-layout collection document.
    pub fn collection(&self, file: &str, name: &str) {
        let rel = self.engine_root().join("collections").join(file);
        self.file(rel, &format!(r#"{{"Name": "{name}", "Settings": {{}}}}"#));
    }

    pub fn read_config(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.config_dir().join("config.json")).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    pub fn jsneck(&self) -> Cli {
        cli()
            .env("HOME", self.path())
            .env("JSNECK_CONFIG_DIR", self.config_dir())
            .env("JSNECK_IPC_SOCKET", "")
    }
}
