//! Tests for `page gen`.

use crate::support::*;
use std::fs;

#[test]
fn test_gen_default_length() {
    let t = Test::init();

    let output = t.gen("fresh");
    assert_success(&output);
    assert_stderr_contains(&output, "generated fresh (12 characters)");

    let opened = t.open_print("fresh");
    assert_success(&opened);
    assert_eq!(stdout(&opened).trim_end().len(), 12);
}

#[test]
fn test_gen_custom_length() {
    let t = Test::init();

    assert_success(&t.gen_length("long", 40));

    let opened = t.open_print("long");
    assert_eq!(stdout(&opened).trim_end().len(), 40);
}

#[test]
fn test_gen_values_differ() {
    let t = Test::init();
    assert_success(&t.gen("a"));
    assert_success(&t.gen("b"));

    assert_ne!(stdout(&t.open_print("a")), stdout(&t.open_print("b")));
}

#[test]
fn test_gen_refuses_existing_entry() {
    let t = Test::with_entries(&[EXAMPLE_ENTRY]);

    let output = t.gen("example.com");
    assert_failure(&output);
    assert_stderr_contains(&output, "entry already exists: example.com");

    assert_opens_to(&t, "example.com", "user\npass123\n");
}

#[test]
fn test_gen_zero_length_rejected() {
    let t = Test::init();

    let output = t.gen_length("nothing", 0);
    assert_failure(&output);
    assert!(!t.entry_path("nothing").exists());
}

#[test]
fn test_gen_needs_only_recipient() {
    let t = Test::init();
    fs::remove_file(t.key_dir().join("privkey")).unwrap();

    assert_success(&t.gen("sealed"));
    assert!(t.entry_path("sealed").exists());
}

#[test]
fn test_gen_for_foreign_recipient_is_unreadable() {
    let t = Test::init();
    fs::write(t.key_dir().join("recipients"), format!("{}\n", FOREIGN_PUBLIC_KEY)).unwrap();

    assert_success(&t.gen("elsewhere"));

    let output = t.open_print("elsewhere");
    assert_failure(&output);
    assert_stderr_contains(&output, "not encrypted for this key");
}
