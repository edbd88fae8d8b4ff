//! Rm command - delete an entry.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::config::Config;
use crate::core::store::Store;
use crate::error::{Result, StoreError};

/// Remove an entry, asking first unless `force` is set.
pub fn execute(config: &Config, entry: &str, force: bool) -> Result<()> {
    // Removing needs no keys
    let store = Store::new(&config.store_dir);

    if !store.exists(entry)? {
        return Err(StoreError::EntryNotFound(entry.to_string()).into());
    }

    if !force && !prompt::confirm(&format!("remove entry {}?", entry))? {
        output::dimmed("aborted.");
        return Ok(());
    }

    info!(entry = %entry, force, "removing entry");
    store.remove(entry)?;
    output::success(&format!("removed {}", output::entry(entry)));
    Ok(())
}
