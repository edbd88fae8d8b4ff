//! Error types.
//!
//! One enum per concern, composed into [`Error`]. Every variant carries
//! enough context for the CLI to tell a missing entry from a wrong key from
//! a corrupted file.

use thiserror::Error;

/// Top-level error returned by every page operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the failure is fixed by (re-)running `page init`.
    pub fn needs_init(&self) -> bool {
        matches!(
            self,
            Error::Key(KeyError::MissingKeyFile(_))
                | Error::Key(KeyError::Parse { .. })
                | Error::Key(KeyError::Mismatch)
                | Error::Store(StoreError::MissingIdentity)
                | Error::Store(StoreError::MissingRecipient)
        )
    }
}

/// Entry store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store unavailable at {path}: {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("entry does not exist: {0}")]
    EntryNotFound(String),

    #[error("entry already exists: {0}")]
    EntryExists(String),

    #[error("invalid entry name '{name}': {reason}")]
    InvalidEntryName { name: String, reason: &'static str },

    #[error("no identity loaded: decryption needs the private key")]
    MissingIdentity,

    #[error("no recipient loaded: encryption needs the public key")]
    MissingRecipient,

    #[error("failed to read entry {entry}: {source}")]
    Read {
        entry: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write entry {entry}: {source}")]
    Write {
        entry: String,
        #[source]
        source: std::io::Error,
    },
}

/// Key material errors.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("key file does not exist: {0}")]
    MissingKeyFile(String),

    #[error("invalid key in {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("key file already exists: {0}")]
    AlreadyExists(String),

    #[error("public key does not belong to the private key")]
    Mismatch,

    #[error("failed to read key file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write key file: {0}")]
    Write(#[source] std::io::Error),
}

/// Envelope codec errors.
///
/// `MalformedArmor`, `WrongKey` and `Integrity` are the three decryption
/// failure kinds; see [`CipherError::is_decryption`].
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    Encryption(String),

    #[error("decryption failed: malformed envelope: {0}")]
    MalformedArmor(String),

    #[error("decryption failed: entry was not encrypted for this key")]
    WrongKey,

    #[error("decryption failed: integrity check failed: {0}")]
    Integrity(String),
}

impl CipherError {
    /// True for any failure produced while opening an envelope.
    pub fn is_decryption(&self) -> bool {
        !matches!(self, CipherError::Encryption(_))
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Clipboard sink errors.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard tool found (tried wl-copy, xclip, xsel, pbcopy, clip.exe); use -p to print")]
    Unavailable,

    #[error("{tool} failed: {reason}")]
    Failed { tool: String, reason: String },
}

/// External editor errors.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("failed to launch editor '{editor}': {source}")]
    Launch {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("editor '{editor}' exited with {status}; entry left unchanged")]
    Exited { editor: String, status: String },
}

pub type Result<T> = std::result::Result<T, Error>;
