//! Shared CLI output helpers.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: entry names, paths, hints
//! - Dimmed: secondary info
//!
//! Status lines go to stderr so that stdout carries only data (`ls`,
//! `open -p`).

use std::fmt::Display;

use console::style;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ removed example.com`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green().for_stderr(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message (red).
///
/// Example: `✗ entry does not exist: example.com`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run: page init`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  public key  age1...`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        eprintln!(
            "  {}  {}",
            style(label).dim().for_stderr(),
            style(value).bold().for_stderr()
        );
    } else {
        eprintln!("  {}  {}", label, value);
    }
}

/// Print a dimmed/secondary message.
///
/// Example: `no entries`
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        eprintln!("{}", style(msg).dim().for_stderr());
    } else {
        eprintln!("{}", msg);
    }
}

/// Format an entry name in cyan.
pub fn entry(name: &str) -> String {
    if colors_enabled() {
        style(name).cyan().for_stderr().to_string()
    } else {
        name.to_string()
    }
}
