// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `textsearch match` behavior.

use crate::prelude::*;

/// > Offset mode prints `start-end: matched` per match
#[test]
fn reports_offsets_from_stdin() {
    textsearch_cmd()
        .args(["match", "-k", "two"])
        .write_stdin("one two\nthree two\n")
        .assert()
        .success()
        .stdout("4-7: two\n14-17: two\n");
}

/// > Exit code 1 when nothing matched
#[test]
fn no_matches_exits_one() {
    textsearch_cmd()
        .args(["match", "-k", "absent"])
        .write_stdin("nothing here")
        .assert()
        .code(1)
        .stdout("");
}

/// > Leftmost-longest: the earliest start wins, then the longest keyword
#[test]
fn commits_leftmost_longest() {
    textsearch_cmd()
        .args(["match", "-k", "cd", "-k", "abcdefg", "-k", "ab"])
        .write_stdin("abcdx")
        .assert()
        .success()
        .stdout("0-2: ab\n2-4: cd\n");
}

/// > Line mode prints each matching line once with its number
#[test]
fn line_mode_reports_line_numbers() {
    textsearch_cmd()
        .args(["match", "-k", "bar", "--lines"])
        .write_stdin("foo\nfoo bar bar\r\nbaz\rbar")
        .assert()
        .success()
        .stdout("2: foo bar bar\n4: bar\n");
}

/// > Several inputs are prefixed with their path, in argument order
#[test]
fn multiple_files_keep_argument_order() {
    let dir = temp_project(&[("a.txt", "x"), ("b.txt", "x x")]);
    textsearch_cmd()
        .args(["match", "-k", "x", "b.txt", "a.txt"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("b.txt:0-1: x\nb.txt:2-3: x\na.txt:0-1: x\n");
}

/// > `-` names stdin among file operands
#[test]
fn dash_reads_stdin() {
    let dir = temp_project(&[("a.txt", "needle")]);
    textsearch_cmd()
        .args(["match", "-k", "needle", "a.txt", "-"])
        .current_dir(dir.path())
        .write_stdin("needle")
        .assert()
        .success()
        .stdout(predicates::str::contains("<stdin>:0-6: needle"));
}

/// > Replacement labels are shown next to matches
#[test]
fn shows_replacement_label() {
    textsearch_cmd()
        .args(["match", "-k", "cat=feline"])
        .write_stdin("a cat")
        .assert()
        .success()
        .stdout("2-5: cat (feline)\n");
}

/// > --limit stops text output and says so
#[test]
fn limit_truncates_output() {
    textsearch_cmd()
        .args(["match", "-k", "x", "--limit", "2"])
        .write_stdin("x x x")
        .assert()
        .success()
        .stdout(predicates::str::contains("Stopped after 2 of 3 matches"));
}

/// > a limit that covers every match prints no truncation note
#[test]
fn limit_at_total_prints_everything() {
    textsearch_cmd()
        .args(["match", "-k", "x", "--limit", "3"])
        .write_stdin("x x x")
        .assert()
        .success()
        .stdout(predicates::str::contains("Stopped after").not());
}

/// > -i folds case; reported spans point at the original text
#[test]
fn ignore_case() {
    textsearch_cmd()
        .args(["match", "-k", "hello", "-i"])
        .write_stdin("Say HELLO")
        .assert()
        .success()
        .stdout("4-9: HELLO\n");
}

/// > -w rejects matches embedded in longer words
#[test]
fn word_boundaries() {
    textsearch_cmd()
        .args(["match", "-k", "cat", "-w"])
        .write_stdin("concat cat cats")
        .assert()
        .success()
        .stdout("7-10: cat\n");
}

/// > JSON output carries keywords, totals, and per-input reports
#[test]
fn json_output_shape() {
    let dir = temp_project(&[("in.txt", "foo bar")]);
    let value = json_output(dir.path(), &["match", "-k", "foo=X", "-k", "bar", "in.txt"]);
    assert_eq!(value["total"], 2);
    assert_eq!(value["keywords"][0]["replacement"], "X");
    assert_eq!(value["inputs"][0]["path"], "in.txt");
    assert_eq!(value["inputs"][0]["mode"], "offset");
    assert_eq!(value["inputs"][0]["matches"][1]["keyword"], 1);
    assert!(value.get("timing").is_none());
}

/// > JSON output in line mode
#[test]
fn json_line_mode() {
    let dir = temp_project(&[("in.txt", "a\nb foo")]);
    let value = json_output(dir.path(), &["match", "-k", "foo", "--lines", "in.txt"]);
    let m = &value["inputs"][0]["matches"][0];
    assert_eq!(m["line"], 2);
    assert_eq!(m["content"], "b foo");
    assert_eq!(m["start"], 2);
    assert_eq!(m["end"], 5);
}

/// > --timing prints phases to stderr
#[test]
fn timing_goes_to_stderr() {
    textsearch_cmd()
        .args(["match", "-k", "x", "--timing"])
        .write_stdin("x")
        .assert()
        .success()
        .stdout("0-1: x\n")
        .stderr(
            predicates::str::contains("build:")
                .and(predicates::str::contains("scan:"))
                .and(predicates::str::contains("total:")),
        );
}

/// > --timing adds a timing object to JSON
#[test]
fn timing_in_json() {
    let dir = temp_project(&[("in.txt", "x")]);
    let value = json_output(dir.path(), &["match", "-k", "x", "--timing", "in.txt"]);
    assert!(value["timing"]["total_ms"].is_u64());
}

/// > Keywords spanning a line boundary are rejected with exit code 2
#[test]
fn multiline_keyword_rejected() {
    textsearch_cmd()
        .args(["match", "-k", "a\nb"])
        .write_stdin("a\nb")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("spans a line boundary"));
}

/// > Missing input files exit with code 3
#[test]
fn missing_file_is_internal_error() {
    let dir = temp_project(&[]);
    textsearch_cmd()
        .args(["match", "-k", "x", "missing.txt"])
        .current_dir(dir.path())
        .assert()
        .code(3)
        .stderr(predicates::str::contains("missing.txt"));
}

/// > Empty keyword arguments are rejected
#[test]
fn empty_keyword_rejected() {
    textsearch_cmd()
        .args(["match", "-k", "=x"])
        .write_stdin("x")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("empty keyword pattern"));
}

/// > COLOR forces highlighting; NO_COLOR wins over it
#[test]
fn color_env_controls_highlighting() {
    textsearch_cmd()
        .args(["match", "-k", "x"])
        .env("COLOR", "1")
        .write_stdin("x")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b["));

    textsearch_cmd()
        .args(["match", "-k", "x"])
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .write_stdin("x")
        .assert()
        .success()
        .stdout("0-1: x\n");
}
