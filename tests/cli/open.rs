//! Tests for `page open`.

use crate::support::*;
use page::core::keys;
use page::core::store::Store;
use std::fs;

#[test]
fn test_open_print_roundtrip() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);
    assert_opens_to(&t, "example.com", "user\npass123\n");
}

#[test]
fn test_open_print_strips_comments_and_blanks() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    assert_opens_to(&t, "bank", "12345678\nhunter2\n");
}

#[test]
fn test_open_missing_entry() {
    let t = Test::init();

    let output = t.open_print("missing-entry");
    assert_failure(&output);
    assert_stderr_contains(&output, "entry does not exist: missing-entry");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_open_corrupt_entry() {
    let t = Test::init();
    fs::write(t.entry_path("broken"), "definitely not age").unwrap();

    let output = t.open_print("broken");
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed envelope");
}

#[test]
fn test_open_with_wrong_key() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);

    // Replace the keypair; the entry was sealed for the old one
    fs::remove_file(t.key_dir().join("privkey")).unwrap();
    fs::remove_file(t.key_dir().join("recipients")).unwrap();
    assert_success(&t.init_cmd());

    let output = t.open_print("example.com");
    assert_failure(&output);
    assert_stderr_contains(&output, "not encrypted for this key");
}

#[test]
fn test_open_without_identity_hints_init() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);
    fs::remove_file(t.key_dir().join("privkey")).unwrap();

    let output = t.open_print("example.com");
    assert_failure(&output);
    assert_stderr_contains(&output, "key file does not exist");
    assert_stderr_contains(&output, "page init");
}

#[test]
fn test_open_needs_only_identity() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);
    fs::remove_file(t.key_dir().join("recipients")).unwrap();

    assert_opens_to(&t, "example.com", "user\npass123\n");
}

#[test]
fn test_open_without_clipboard_tool() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);
    let empty_path = t.home.path().join("empty-path");
    fs::create_dir_all(&empty_path).unwrap();

    let output = t
        .cmd()
        .args(["open", "example.com"])
        .env("PATH", &empty_path)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "no clipboard tool found");
    assert!(!stdout(&output).contains("pass123"));
}

#[test]
fn test_open_print_keeps_non_utf8_bytes() {
    let t = Test::init();
    let recipient = keys::load_recipient(&t.key_dir().join("recipients")).unwrap();
    Store::new(t.store_dir())
        .with_recipient(recipient)
        .write("bin", b"pa\xffss\xfe\n")
        .unwrap();

    let output = t.open_print("bin");
    assert_success(&output);
    assert_eq!(output.stdout, b"pa\xffss\xfe\n");
}
