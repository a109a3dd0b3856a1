// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! textsearch.toml discovery and validation.

use crate::prelude::*;

const KEYWORDS: &str = r#"version = 1

[[keywords]]
pattern = "todo"
replacement = "TASK"
"#;

/// > Keywords come from a discovered textsearch.toml
#[test]
fn discovered_config_supplies_keywords() {
    let dir = temp_project(&[("textsearch.toml", KEYWORDS), ("sub/notes.txt", "a todo")]);
    textsearch_cmd()
        .args(["subst", "notes.txt"])
        .current_dir(dir.path().join("sub"))
        .assert()
        .success()
        .stdout("a TASK");
}

/// > Command-line keywords follow config keywords
#[test]
fn cli_keywords_appended() {
    let dir = temp_project(&[("textsearch.toml", KEYWORDS), ("in.txt", "todo fixme")]);
    let value = json_output(dir.path(), &["match", "-k", "fixme", "in.txt"]);
    assert_eq!(value["keywords"][0]["pattern"], "todo");
    assert_eq!(value["keywords"][1]["pattern"], "fixme");
    assert_eq!(value["inputs"][0]["matches"][1]["keyword"], 1);
}

/// > -C selects an explicit config file
#[test]
fn explicit_config_flag() {
    let dir = temp_project(&[("custom.toml", KEYWORDS)]);
    textsearch_cmd()
        .args(["subst", "-C", "custom.toml"])
        .current_dir(dir.path())
        .write_stdin("todo")
        .assert()
        .success()
        .stdout("TASK");
}

/// > TEXTSEARCH_CONFIG selects the config file
#[test]
fn config_env_var() {
    let dir = temp_project(&[("elsewhere.toml", KEYWORDS)]);
    textsearch_cmd()
        .arg("subst")
        .env("TEXTSEARCH_CONFIG", dir.path().join("elsewhere.toml"))
        .current_dir(dir.path())
        .write_stdin("todo")
        .assert()
        .success()
        .stdout("TASK");
}

/// > A missing explicit config is a config error
#[test]
fn missing_explicit_config() {
    let dir = temp_project(&[]);
    textsearch_cmd()
        .args(["match", "-k", "x", "-C", "nope.toml"])
        .current_dir(dir.path())
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}

/// > Only version 1 is accepted
#[test]
fn unsupported_version() {
    let dir = temp_project(&[("textsearch.toml", "version = 2\n")]);
    textsearch_cmd()
        .args(["match", "-k", "x"])
        .current_dir(dir.path())
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > [search] options apply; flags can switch more on
#[test]
fn search_options_from_config() {
    let config = "version = 1\n[search]\ncase_insensitive = true\n";
    let dir = temp_project(&[("textsearch.toml", config)]);
    textsearch_cmd()
        .args(["match", "-k", "cat", "-w"])
        .current_dir(dir.path())
        .write_stdin("CAT concat")
        .assert()
        .success()
        .stdout("0-3: CAT\n");
}

/// > Unknown keys are logged as warnings and ignored
#[test]
fn unknown_keys_warn() {
    let config = "version = 1\ncolour = \"red\"\n";
    let dir = temp_project(&[("textsearch.toml", config)]);
    textsearch_cmd()
        .args(["match", "-k", "x"])
        .env("TEXTSEARCH_LOG", "warn")
        .current_dir(dir.path())
        .write_stdin("x")
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized config field"));
}

/// > Without -k or config keywords the command fails
#[test]
fn no_keywords_is_an_error() {
    let dir = temp_project(&[]);
    textsearch_cmd()
        .arg("match")
        .current_dir(dir.path())
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no keywords given"));
}
