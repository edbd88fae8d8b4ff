//! Open command - decrypt an entry to the clipboard or stdout.

use std::io::{self, Write};

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{clipboard, output};
use crate::core::config::Config;
use crate::core::keys;
use crate::core::store::Store;
use crate::error::Result;

/// Decrypt `entry` and copy it, or print it with `print`.
///
/// Blank lines and `#` comment lines are dropped, so an entry can carry
/// notes that never reach the clipboard.
pub fn execute(config: &Config, entry: &str, print: bool) -> Result<()> {
    let identity = keys::load_identity(&config.key_paths().identity)?;
    let store = Store::new(&config.store_dir).with_identity(identity);

    let plaintext = store.read(entry)?;
    let secret = visible_lines(&plaintext);

    if print {
        // Plain output for scripting - no decoration
        let mut stdout = io::stdout().lock();
        stdout.write_all(&secret)?;
        stdout.flush()?;
        return Ok(());
    }

    info!(entry = %entry, "copying to clipboard");
    clipboard::copy(&secret)?;
    output::success(&format!("copied {} to clipboard", output::entry(entry)));
    Ok(())
}

/// Keep non-blank lines that do not start with `#`, newline-terminated.
///
/// Works on raw bytes; every kept line is passed through unchanged.
fn visible_lines(plaintext: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(Vec::with_capacity(plaintext.len()));
    for line in plaintext.split(|&b| b == b'\n') {
        if line.is_empty() || line.starts_with(b"#") {
            continue;
        }
        out.extend_from_slice(line);
        out.push(b'\n');
    }
    out
}
