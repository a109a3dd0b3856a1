// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `textsearch subst` behavior.

use crate::prelude::*;

/// > Adjacent occurrences are each replaced
#[test]
fn replaces_from_stdin() {
    textsearch_cmd()
        .args(["subst", "-k", "foo=X"])
        .write_stdin("foofoobar")
        .assert()
        .success()
        .stdout("XXbar");
}

/// > Overlapping keywords resolve to the first committed match
#[test]
fn overlapping_keywords() {
    textsearch_cmd()
        .args([
            "subst",
            "-k",
            "bcdef=xbcdefy",
            "-k",
            "defghi=xdefghiy",
            "-k",
            "hijk=xhijky",
        ])
        .write_stdin("abcdefghijklmn")
        .assert()
        .success()
        .stdout("axbcdefygxhijkylmn");
}

/// > Detect-only keywords pass matched text through
#[test]
fn detect_only_keeps_text() {
    textsearch_cmd()
        .args(["subst", "-k", "foo", "-k", "bar=B"])
        .write_stdin("foo bar")
        .assert()
        .success()
        .stdout("foo B");
}

/// > Text without matches is copied unchanged and exits 0
#[test]
fn no_matches_is_identity() {
    textsearch_cmd()
        .args(["subst", "-k", "zzz=y"])
        .write_stdin("line one\nline two\n")
        .assert()
        .success()
        .stdout("line one\nline two\n");
}

/// > Files are rewritten to stdout in argument order
#[test]
fn files_in_argument_order() {
    let dir = temp_project(&[("a.txt", "cat\n"), ("b.txt", "dog cat\n")]);
    textsearch_cmd()
        .args(["subst", "-k", "cat=feline", "b.txt", "a.txt"])
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout("dog feline\nfeline\n");
}

/// > Replacement text is never rescanned
#[test]
fn replacements_not_rescanned() {
    textsearch_cmd()
        .args(["subst", "-k", "a=aa"])
        .write_stdin("aba")
        .assert()
        .success()
        .stdout("aabaa");
}

/// > Inputs over 10MiB are rejected
#[test]
fn oversized_input_rejected() {
    let dir = temp_project(&[]);
    std::fs::write(dir.path().join("big.txt"), vec![b'x'; 10 * 1024 * 1024 + 1]).unwrap();
    textsearch_cmd()
        .args(["subst", "-k", "x=y", "big.txt"])
        .current_dir(dir.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("file too large"));
}

/// > --timing writes phases to stderr, leaving stdout untouched
#[test]
fn timing_on_stderr() {
    textsearch_cmd()
        .args(["subst", "-k", "a=b", "--timing"])
        .write_stdin("a")
        .assert()
        .success()
        .stdout("b")
        .stderr(predicates::str::contains("output:"));
}
