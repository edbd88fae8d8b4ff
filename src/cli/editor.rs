//! External editor source.
//!
//! The plaintext is handed to the editor through a private temp file that
//! is emptied and deleted once the editor exits, whether or not it succeeded.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{EditorError, Result};

/// Let the user edit `initial` in `editor` and return the result.
///
/// `editor` may include arguments (`"code --wait"`); the temp file path is
/// appended last.
///
/// # Errors
///
/// Returns `EditorError::Launch` if the editor cannot be started, or
/// `EditorError::Exited` if it exits unsuccessfully.
pub fn edit(editor: &str, initial: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let mut tmp = tempfile::Builder::new().prefix("page-").tempfile()?;
    tmp.write_all(initial)?;
    tmp.flush()?;

    // Editors may replace the file rather than rewrite it, so read by path
    let edited = run(editor, tmp.path())
        .and_then(|()| Ok(Zeroizing::new(fs::read(tmp.path())?)));
    wipe(tmp.path());

    edited
}

fn run(editor: &str, path: &Path) -> Result<()> {
    let mut words = editor.split_whitespace();
    let program = words.next().unwrap_or(editor);

    debug!(editor = %editor, path = %path.display(), "launching editor");
    let status = Command::new(program)
        .args(words)
        .arg(path)
        .status()
        .map_err(|source| EditorError::Launch {
            editor: editor.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(EditorError::Exited {
            editor: editor.to_string(),
            status: status.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Empty the scratch file before it is deleted. Best effort: a failure is
/// logged and the file is still removed on drop.
fn wipe(path: &Path) {
    let truncated = fs::OpenOptions::new()
        .write(true)
        .open(path)
        .and_then(|file| file.set_len(0));

    if let Err(e) = truncated {
        debug!(path = %path.display(), error = %e, "failed to empty editor scratch file");
    }
}
