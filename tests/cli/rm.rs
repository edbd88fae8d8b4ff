//! Tests for `page rm`.

use crate::support::*;

#[test]
fn test_rm_force() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t.rm_force("github");
    assert_success(&output);
    assert_stderr_contains(&output, "removed github");

    assert!(!t.entry_path("github").exists());
    assert_eq!(listed(&t.ls()), vec!["bank", "example.com"]);
}

#[test]
fn test_rm_confirmed() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);

    let output = t.rm_answering("example.com", "y\n");
    assert_success(&output);
    assert!(!t.entry_path("example.com").exists());
}

#[test]
fn test_rm_confirmed_uppercase_yes() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);

    assert_success(&t.rm_answering("example.com", "YES\n"));
    assert!(!t.entry_path("example.com").exists());
}

#[test]
fn test_rm_declined() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);

    let output = t.rm_answering("example.com", "n\n");
    assert_success(&output);
    assert_stderr_contains(&output, "aborted.");
    assert!(t.entry_path("example.com").exists());
}

#[test]
fn test_rm_no_answer_keeps_entry() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);

    assert_success(&t.rm_answering("example.com", ""));
    assert!(t.entry_path("example.com").exists());
}

#[test]
fn test_rm_missing_entry() {
    let t = Test::init();

    let output = t.rm_force("missing-entry");
    assert_failure(&output);
    assert_stderr_contains(&output, "entry does not exist: missing-entry");
}

#[test]
fn test_rm_missing_entry_does_not_prompt() {
    let t = Test::init();

    let output = t.rm_answering("missing-entry", "y\n");
    assert_failure(&output);
    assert!(!stderr(&output).contains("[y/N]"));
}

#[test]
fn test_rm_traversal_name_is_not_found() {
    let t = Test::init();
    std::fs::write(t.home.path().join("data").join("page").join("outside"), "x").unwrap();

    let output = t.rm_force("../outside");
    assert_failure(&output);
    assert!(t.home.path().join("data").join("page").join("outside").exists());
}

#[test]
fn test_rm_confirmed_any_y_answer() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);

    assert_success(&t.rm_answering("example.com", "yep\n"));
    assert!(!t.entry_path("example.com").exists());
}
