//! Encrypted entry store.
//!
//! A store is a directory where every regular file is one entry: the file
//! name is the entry name and the content is an armored age envelope. The
//! store is a handle built per invocation; it binds the identity (to read)
//! and/or the recipient (to write) that the caller loaded.
//!
//! There is no locking. Concurrent writers race and the last rename wins,
//! but a reader never observes a partially written entry.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use age::x25519;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::constants;
use crate::core::keys::Keypair;
use crate::core::validation::validate_entry_name;
use crate::error::{Result, StoreError};

/// Handle on a store directory and the keys bound to it.
pub struct Store {
    root: PathBuf,
    identity: Option<x25519::Identity>,
    recipient: Option<x25519::Recipient>,
}

impl Store {
    /// A store rooted at `root` with no keys bound.
    ///
    /// Enough for `list`, `exists` and `remove`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            identity: None,
            recipient: None,
        }
    }

    /// Bind the identity used by [`Store::read`].
    pub fn with_identity(mut self, identity: x25519::Identity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Bind the recipient used by [`Store::write`].
    pub fn with_recipient(mut self, recipient: x25519::Recipient) -> Self {
        self.recipient = Some(recipient);
        self
    }

    /// Bind both halves of a keypair.
    pub fn with_keypair(self, keypair: Keypair) -> Self {
        let (identity, recipient) = keypair.into_parts();
        self.with_identity(identity).with_recipient(recipient)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk location of an entry.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Create the store directory (mode 0700) if it does not exist.
    pub fn init(&self) -> Result<()> {
        if self.root.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.root).map_err(|e| self.unavailable(e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(
                &self.root,
                fs::Permissions::from_mode(constants::STORE_DIR_MODE),
            )
            .map_err(|e| self.unavailable(e))?;
        }

        debug!(root = %self.root.display(), "store created");
        Ok(())
    }

    /// Names of all entries, sorted.
    ///
    /// Only regular files count (symlinks are followed). Directories,
    /// non-UTF-8 names and leftover temp files are skipped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the directory cannot be read.
    pub fn list(&self) -> Result<Vec<String>> {
        let dir = fs::read_dir(&self.root).map_err(|e| self.unavailable(e))?;

        let mut names = Vec::new();
        for entry in dir {
            let entry = entry.map_err(|e| self.unavailable(e))?;

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!(name = ?raw, "skipping entry with non UTF-8 name");
                    continue;
                }
            };

            if name.starts_with(constants::TEMP_PREFIX) {
                debug!(name = %name, "skipping temp file");
                continue;
            }

            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => names.push(name),
                Ok(_) => debug!(name = %name, "skipping non-file"),
                Err(e) => debug!(name = %name, error = %e, "skipping unreadable entry"),
            }
        }

        names.sort();
        debug!(count = names.len(), "listed entries");
        Ok(names)
    }

    /// Whether `name` is one of [`Store::list`]'s entries.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the directory cannot be read.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|n| n == name))
    }

    /// Decrypt an entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EntryNotFound` if the entry is absent,
    /// `StoreError::MissingIdentity` if no identity is bound, or the
    /// codec's `CipherError` if the file is not a valid envelope for it.
    pub fn read(&self, name: &str) -> Result<Zeroizing<Vec<u8>>> {
        if !self.exists(name)? {
            return Err(StoreError::EntryNotFound(name.to_string()).into());
        }
        let identity = self.identity.as_ref().ok_or(StoreError::MissingIdentity)?;

        let envelope = fs::read(self.path(name)).map_err(|source| StoreError::Read {
            entry: name.to_string(),
            source,
        })?;

        let plaintext = cipher::open(&envelope, identity).map_err(|e| {
            debug!(entry = %name, error = %e, "failed to open entry");
            e
        })?;

        debug!(entry = %name, "read entry");
        Ok(plaintext)
    }

    /// Encrypt `plaintext` into an entry, replacing any previous content.
    ///
    /// The envelope is written to a temp file in the store directory,
    /// synced, restricted to mode 0600 and renamed over the entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MissingRecipient` if no recipient is bound,
    /// `StoreError::InvalidEntryName` for names that are not plain file
    /// names, `StoreError::Unavailable` if the directory is missing, or
    /// `StoreError::Write` if the file cannot be written.
    pub fn write(&self, name: &str, plaintext: &[u8]) -> Result<()> {
        let recipient = self.recipient.as_ref().ok_or(StoreError::MissingRecipient)?;
        validate_entry_name(name)?;

        let envelope = cipher::seal(plaintext, recipient)?;
        self.persist(name, envelope.as_bytes())?;

        debug!(entry = %name, "wrote entry");
        Ok(())
    }

    /// Like [`Store::write`], but only for a new entry.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EntryExists` if the entry is already present.
    pub fn create(&self, name: &str, plaintext: &[u8]) -> Result<()> {
        if self.exists(name)? {
            return Err(StoreError::EntryExists(name.to_string()).into());
        }
        self.write(name, plaintext)
    }

    /// Delete an entry. There is no trash; the file is gone.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EntryNotFound` if the entry is absent.
    pub fn remove(&self, name: &str) -> Result<()> {
        if !self.exists(name)? {
            return Err(StoreError::EntryNotFound(name.to_string()).into());
        }

        fs::remove_file(self.path(name)).map_err(|source| StoreError::Write {
            entry: name.to_string(),
            source,
        })?;

        debug!(entry = %name, "removed entry");
        Ok(())
    }

    fn persist(&self, name: &str, contents: &[u8]) -> Result<()> {
        let write_err = |source: io::Error| -> crate::error::Error {
            if !self.root.is_dir() {
                return self.unavailable(source).into();
            }
            StoreError::Write {
                entry: name.to_string(),
                source,
            }
            .into()
        };

        let mut tmp = tempfile::Builder::new()
            .prefix(constants::TEMP_PREFIX)
            .tempfile_in(&self.root)
            .map_err(write_err)?;

        tmp.write_all(contents).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(constants::ENTRY_MODE))
                .map_err(write_err)?;
        }

        tmp.persist(self.path(name))
            .map_err(|e| write_err(e.error))?;

        self.sync_root(name)
    }

    /// Flush the directory so the rename itself is durable.
    fn sync_root(&self, name: &str) -> Result<()> {
        #[cfg(unix)]
        fs::File::open(&self.root)
            .and_then(|dir| dir.sync_all())
            .map_err(|source| StoreError::Write {
                entry: name.to_string(),
                source,
            })?;
        #[cfg(not(unix))]
        let _ = name;

        Ok(())
    }

    fn unavailable(&self, source: io::Error) -> StoreError {
        StoreError::Unavailable {
            path: self.root.display().to_string(),
            source,
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("root", &self.root)
            .field("identity", &self.identity.is_some())
            .field(
                "recipient",
                &self.recipient.as_ref().map(|r| r.to_string()),
            )
            .finish()
    }
}
