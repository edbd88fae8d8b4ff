//! Envelope codec.
//!
//! Seals plaintext bytes into an ASCII-armored age envelope for a single
//! recipient and opens it again with the matching identity.
//!
//! ## Envelope format
//!
//! ```text
//! -----BEGIN AGE ENCRYPTED FILE-----
//! YWdlLWVuY3J5cHRpb24ub3JnL3YxCi0+IFgyNTUxOSBV...
//! -----END AGE ENCRYPTED FILE-----
//! ```
//!
//! The body is the binary age file (X25519 recipient stanza, header MAC,
//! ChaCha20-Poly1305 STREAM payload) in base64, wrapped at 64 columns.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::error::Result;

mod age;

pub use age::{parse_identity, parse_recipient, Age, ARMOR_BEGIN, ARMOR_END};

/// Cryptographic backend trait.
///
/// A backend turns plaintext into a printable, self-contained envelope and
/// back. Opening must distinguish a malformed envelope, a wrong key and a
/// failed integrity check (see [`crate::error::CipherError`]).
pub trait Cipher {
    /// Type representing a recipient public key.
    type Recipient;

    /// Type representing a private identity/key.
    type Identity;

    /// Encrypt plaintext for a recipient.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Encryption` if the envelope cannot be built.
    fn seal(&self, plaintext: &[u8], recipient: &Self::Recipient) -> Result<String>;

    /// Decrypt an envelope with a private identity.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedArmor`, `CipherError::WrongKey` or
    /// `CipherError::Integrity`.
    fn open(&self, envelope: &[u8], identity: &Self::Identity) -> Result<Zeroizing<Vec<u8>>>;
}

// Re-export commonly used age types for convenience
pub use ::age::x25519::{Identity, Recipient};

/// Seal plaintext for an age recipient.
///
/// This is a convenience wrapper around `Age::seal`.
pub fn seal(plaintext: &[u8], recipient: &Recipient) -> Result<String> {
    Age.seal(plaintext, recipient)
}

/// Open an armored age envelope with a private identity.
///
/// This is a convenience wrapper around `Age::open`.
pub fn open(envelope: &[u8], identity: &Identity) -> Result<Zeroizing<Vec<u8>>> {
    Age.open(envelope, identity)
}
