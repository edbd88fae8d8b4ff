//! Init command - generate the keypair and create the store.

use tracing::info;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::keys;
use crate::core::store::Store;
use crate::error::Result;

/// Generate the age keypair and create the store directory.
///
/// Refuses to run if either key file already exists.
pub fn execute(config: &Config) -> Result<()> {
    let paths = config.key_paths();
    info!(keys = %config.key_dir.display(), "initializing");

    let keypair = keys::generate(&paths)?;

    let store = Store::new(&config.store_dir);
    store.init()?;

    output::success("generated age keypair");
    output::kv("identity  ", paths.identity.display());
    output::kv("recipients", paths.recipient.display());
    output::kv("public key", keypair.recipient());
    output::kv("store     ", store.root().display());

    info!("initialized");
    Ok(())
}
