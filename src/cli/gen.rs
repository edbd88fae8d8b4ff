//! Gen command - store a freshly generated random secret.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::keys;
use crate::core::store::Store;
use crate::error::Result;

/// Generate a `length`-character secret into the new entry `entry`.
///
/// Fails if the entry already exists; use `edit` to change it.
pub fn execute(config: &Config, entry: &str, length: usize) -> Result<()> {
    let recipient = keys::load_recipient(&config.key_paths().recipient)?;
    let store = Store::new(&config.store_dir).with_recipient(recipient);

    let secret = generate(length);
    store.create(entry, secret.as_bytes())?;

    info!(entry = %entry, length, "generated secret");
    output::success(&format!(
        "generated {} ({} characters)",
        output::entry(entry),
        length
    ));
    Ok(())
}

/// Base64 of `length` random bytes, cut to `length` characters.
fn generate(length: usize) -> Zeroizing<String> {
    let mut bytes = Zeroizing::new(vec![0u8; length]);
    OsRng.fill_bytes(bytes.as_mut_slice());

    let mut encoded = Zeroizing::new(STANDARD.encode(bytes.as_slice()));
    encoded.truncate(length);
    encoded
}
