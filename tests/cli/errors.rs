//! Tests for error reporting and global behavior.

use crate::support::*;
use std::fs;

#[test]
fn test_version() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_command() {
    let t = Test::new();

    let output = t.cmd().arg("frobnicate").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_missing_keys_hint_init() {
    let t = Test::new();
    fs::create_dir_all(t.store_dir()).unwrap();

    let output = t.gen("entry");
    assert_failure(&output);
    assert_stderr_contains(&output, "key file does not exist");
    assert_stderr_contains(&output, "run: page init");
}

#[test]
fn test_malformed_key_file() {
    let t = Test::init();
    fs::write(t.key_dir().join("privkey"), "# nothing useful\nnot-a-key\n").unwrap();

    let output = t.open_print("anything");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key");
    assert_stderr_contains(&output, "page init");
}

#[test]
fn test_mismatched_keypair() {
    let t = Test::init();
    fs::write(t.key_dir().join("recipients"), format!("{}\n", FOREIGN_PUBLIC_KEY)).unwrap();
    let editor = t.editor_writing("x\n");

    let output = t.edit_with("entry", &editor);
    assert_failure(&output);
    assert_stderr_contains(&output, "does not belong to the private key");
}

#[test]
fn test_errors_stay_off_stdout() {
    let t = Test::init();

    let output = t.open_print("missing");
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_config_file() {
    let t = Test::init();
    fs::write(t.key_dir().join("config.toml"), "colour = \"blue\"\n").unwrap();

    let output = t.ls();
    assert_failure(&output);
    assert_stderr_contains(&output, "config");
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "_page");
}

#[test]
fn test_completions_need_no_setup() {
    let t = Test::new();

    // No keys, no store, not even a readable config
    let output = t
        .cmd()
        .args(["completions", "zsh"])
        .env("PAGE_KEY_DIR", t.home.path().join("nowhere"))
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_gen_length_too_large() {
    let t = Test::init();

    let output = t.gen_length("huge", 4096);
    assert_failure(&output);
}
