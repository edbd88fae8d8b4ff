//! Edit command - create or change an entry in an external editor.

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{editor, output};
use crate::core::config::Config;
use crate::core::keys::Keypair;
use crate::core::store::Store;
use crate::core::validation::validate_entry_name;
use crate::error::Result;

/// Open `entry` in the editor and save the result.
///
/// A missing entry starts out empty. The entry is only rewritten when the
/// content changed, and a new entry is not created from an empty buffer.
pub fn execute(config: &Config, entry: &str, editor_flag: Option<&str>) -> Result<()> {
    // Editing needs both halves: decrypt the old content, encrypt the new
    let keypair = Keypair::load(&config.key_paths())?;
    let store = Store::new(&config.store_dir).with_keypair(keypair);

    let existing = store.exists(entry)?;
    let original = if existing {
        store.read(entry)?
    } else {
        validate_entry_name(entry)?;
        Zeroizing::new(Vec::new())
    };

    let editor = config.editor(editor_flag);
    let edited = editor::edit(&editor, &original)?;

    if edited == original {
        output::dimmed(if existing {
            "no changes"
        } else {
            "empty entry not saved"
        });
        return Ok(());
    }

    info!(entry = %entry, created = !existing, "saving entry");
    store.write(entry, &edited)?;

    let verb = if existing { "updated" } else { "created" };
    output::success(&format!("{} {}", verb, output::entry(entry)));
    Ok(())
}
