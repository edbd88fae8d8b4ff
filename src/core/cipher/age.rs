//! Age encryption backend implementation.
//!
//! Envelopes are age files with x25519 keys, wrapped in ASCII armor.

use std::io::{Read, Write};

use ::age::x25519;
use ::age::DecryptError;
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::error::{CipherError, Result};

/// First line of every armored envelope.
pub const ARMOR_BEGIN: &str = "-----BEGIN AGE ENCRYPTED FILE-----";

/// Last line of every armored envelope.
pub const ARMOR_END: &str = "-----END AGE ENCRYPTED FILE-----";

/// Age-based cryptographic backend using x25519 keys
pub struct Age;

impl Cipher for Age {
    type Recipient = x25519::Recipient;
    type Identity = x25519::Identity;

    fn seal(&self, plaintext: &[u8], recipient: &x25519::Recipient) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let encryptor =
            age::Encryptor::with_recipients(std::iter::once(recipient as &dyn age::Recipient))
                .map_err(|e| CipherError::Encryption(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let armor = age::armor::ArmoredWriter::wrap_output(
            &mut encrypted,
            age::armor::Format::AsciiArmor,
        )
        .map_err(|e| CipherError::Encryption(format!("armor: {}", e)))?;
        let mut writer = encryptor
            .wrap_output(armor)
            .map_err(|e| CipherError::Encryption(format!("{}", e)))?;

        writer
            .write_all(plaintext)
            .map_err(|e| CipherError::Encryption(format!("{}", e)))?;
        let armored = writer
            .finish()
            .map_err(|e| CipherError::Encryption(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CipherError::Encryption(format!("armor: {}", e)))?;

        trace!(envelope_len = encrypted.len(), "sealed");

        String::from_utf8(encrypted)
            .map_err(|e| CipherError::Encryption(format!("UTF-8 error: {}", e)).into())
    }

    fn open(&self, envelope: &[u8], identity: &x25519::Identity) -> Result<Zeroizing<Vec<u8>>> {
        trace!(envelope_len = envelope.len(), "opening");

        let binary = dearmor(envelope)?;

        let decryptor = age::Decryptor::new(&binary[..]).map_err(classify)?;
        let mut reader = decryptor
            .decrypt(std::iter::once(identity as &dyn age::Identity))
            .map_err(classify)?;

        let mut decrypted = Zeroizing::new(Vec::new());
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::Integrity(format!("payload: {}", e)))?;

        trace!(plaintext_len = decrypted.len(), "opened");

        Ok(decrypted)
    }
}

/// Strip the armor, returning the binary age file.
///
/// The age armor reader silently passes binary input through, so the
/// header and footer are checked here first.
fn dearmor(envelope: &[u8]) -> Result<Vec<u8>> {
    let text = std::str::from_utf8(envelope)
        .map_err(|_| CipherError::MalformedArmor("envelope is not ASCII text".to_string()))?;
    let trimmed = text.trim();

    if !trimmed.starts_with(ARMOR_BEGIN) {
        return Err(CipherError::MalformedArmor("missing armor header".to_string()).into());
    }
    if !trimmed.ends_with(ARMOR_END) {
        return Err(CipherError::MalformedArmor("missing armor footer".to_string()).into());
    }

    let mut binary = Vec::new();
    age::armor::ArmoredReader::new(envelope)
        .read_to_end(&mut binary)
        .map_err(|e| CipherError::MalformedArmor(format!("{}", e)))?;

    Ok(binary)
}

/// Map an age decryption error onto the codec's three failure kinds.
fn classify(err: DecryptError) -> crate::error::Error {
    let kind = match err {
        DecryptError::NoMatchingKeys => CipherError::WrongKey,
        DecryptError::InvalidMac
        | DecryptError::DecryptionFailed
        | DecryptError::KeyDecryptionFailed => CipherError::Integrity(format!("{}", err)),
        other => CipherError::MalformedArmor(format!("{}", other)),
    };
    kind.into()
}

/// Parse a public key string into an age recipient
///
/// # Errors
///
/// Returns the age parser's message if the key format is invalid.
pub fn parse_recipient(key: &str) -> std::result::Result<x25519::Recipient, String> {
    key.trim()
        .parse::<x25519::Recipient>()
        .map_err(|e| e.to_string())
}

/// Parse a private key string into an age identity
///
/// # Errors
///
/// Returns the age parser's message if the key format is invalid.
pub fn parse_identity(key: &str) -> std::result::Result<x25519::Identity, String> {
    key.trim()
        .parse::<x25519::Identity>()
        .map_err(|e| e.to_string())
}
