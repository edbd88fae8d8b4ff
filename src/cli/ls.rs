//! Ls command - list entry names.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::store::Store;
use crate::error::Result;

/// List all entries, one per line.
pub fn execute(config: &Config, json: bool) -> Result<()> {
    let store = Store::new(&config.store_dir);
    let entries = store.list()?;

    if json {
        let result = serde_json::json!({
            "entries": entries,
            "count": entries.len()
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if entries.is_empty() {
        output::dimmed("no entries");
    } else {
        // Plain output for scripting - no decoration
        for entry in entries {
            println!("{}", entry);
        }
    }

    Ok(())
}
