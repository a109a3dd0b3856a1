// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Returns an `assert_cmd` Command for the textsearch binary with a clean
/// environment for config and color detection.
pub fn textsearch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("textsearch"));
    cmd.env_remove("TEXTSEARCH_CONFIG")
        .env_remove("TEXTSEARCH_LOG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// Creates a temp git root holding the given files.
///
/// The `.git` marker stops config discovery from escaping the directory.
pub fn temp_project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    for (path, content) in files {
        write_file(dir.path(), path, content);
    }
    dir
}

pub fn write_file(root: &Path, path: &str, content: &str) {
    let full_path = root.join(path);
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(full_path, content).unwrap();
}

/// Run `textsearch <args>` inside `dir` and return stdout as JSON.
pub fn json_output(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = textsearch_cmd()
        .args(args)
        .args(["-o", "json"])
        .current_dir(dir)
        .output()
        .unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}
