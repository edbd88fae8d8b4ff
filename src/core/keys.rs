//! Key generation and loading.
//!
//! A page keypair lives in two files: the private identity (mode 0600) and
//! the public recipient (mode 0644). Both are plain age key strings; the
//! identity file may carry `#` comment lines like `age-keygen` output.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use age::secrecy::ExposeSecret;
use age::x25519;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::constants;
use crate::error::{KeyError, Result};

/// Locations of the identity and recipient files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPaths {
    pub identity: PathBuf,
    pub recipient: PathBuf,
}

impl KeyPaths {
    /// Standard file names inside a key directory.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            identity: dir.join(constants::IDENTITY_FILE),
            recipient: dir.join(constants::RECIPIENT_FILE),
        }
    }
}

/// A private identity together with its public recipient.
pub struct Keypair {
    identity: x25519::Identity,
    recipient: x25519::Recipient,
}

impl Keypair {
    /// Generate a fresh in-memory keypair.
    pub fn generate() -> Self {
        let identity = x25519::Identity::generate();
        let recipient = identity.to_public();
        Self {
            identity,
            recipient,
        }
    }

    /// Load both key files and check that they belong together.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::Mismatch` if the recipient file holds a different
    /// public key than the one derived from the identity.
    pub fn load(paths: &KeyPaths) -> Result<Self> {
        let identity = load_identity(&paths.identity)?;
        let recipient = load_recipient(&paths.recipient)?;

        if identity.to_public().to_string() != recipient.to_string() {
            return Err(KeyError::Mismatch.into());
        }

        Ok(Self {
            identity,
            recipient,
        })
    }

    pub fn identity(&self) -> &x25519::Identity {
        &self.identity
    }

    pub fn recipient(&self) -> &x25519::Recipient {
        &self.recipient
    }

    /// Split into the parts a store binds to.
    pub fn into_parts(self) -> (x25519::Identity, x25519::Recipient) {
        (self.identity, self.recipient)
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("recipient", &self.recipient.to_string())
            .finish_non_exhaustive()
    }
}

/// Generate a keypair and persist it.
///
/// Never overwrites: if either file exists, nothing is written.
///
/// # Errors
///
/// Returns `KeyError::AlreadyExists` if a key file is present, or
/// `KeyError::Write` if the files cannot be created.
pub fn generate(paths: &KeyPaths) -> Result<Keypair> {
    for path in [&paths.identity, &paths.recipient] {
        if path.exists() {
            return Err(KeyError::AlreadyExists(path.display().to_string()).into());
        }
    }

    let keypair = Keypair::generate();
    let public_key = keypair.recipient.to_string();
    debug!(recipient = %public_key, "generated keypair");

    for path in [&paths.identity, &paths.recipient] {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(KeyError::Write)?;
        }
    }

    let secret = keypair.identity.to_string();
    let identity_contents = Zeroizing::new(format!(
        "# created: {}\n# public key: {}\n{}\n",
        chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%:z"),
        public_key,
        secret.expose_secret()
    ));
    write_new(&paths.identity, identity_contents.as_bytes(), 0o600)?;
    write_new(&paths.recipient, format!("{}\n", public_key).as_bytes(), 0o644)?;

    debug!(
        identity = %paths.identity.display(),
        recipient = %paths.recipient.display(),
        "keypair saved"
    );

    Ok(keypair)
}

/// Load the private identity.
///
/// Blank lines and lines starting with `#` are skipped; if several key
/// lines remain, the last one wins.
///
/// # Errors
///
/// Returns `KeyError::MissingKeyFile` if the file is absent, or
/// `KeyError::Parse` if no valid identity is found.
pub fn load_identity(path: &Path) -> Result<x25519::Identity> {
    debug!(path = %path.display(), "loading identity");

    let contents = read_key_file(path)?;

    #[cfg(unix)]
    warn_on_loose_permissions(path, 0o600);

    let line = last_key_line(&contents).ok_or_else(|| KeyError::Parse {
        path: path.display().to_string(),
        reason: "no key found".to_string(),
    })?;

    cipher::parse_identity(line).map_err(|reason| {
        KeyError::Parse {
            path: path.display().to_string(),
            reason,
        }
        .into()
    })
}

/// Load the public recipient.
///
/// # Errors
///
/// Returns `KeyError::MissingKeyFile` if the file is absent, or
/// `KeyError::Parse` if it does not hold a valid age public key.
pub fn load_recipient(path: &Path) -> Result<x25519::Recipient> {
    debug!(path = %path.display(), "loading recipient");

    let contents = read_key_file(path)?;
    let line = last_key_line(&contents).ok_or_else(|| KeyError::Parse {
        path: path.display().to_string(),
        reason: "no key found".to_string(),
    })?;

    cipher::parse_recipient(line).map_err(|reason| {
        KeyError::Parse {
            path: path.display().to_string(),
            reason,
        }
        .into()
    })
}

fn read_key_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(KeyError::MissingKeyFile(path.display().to_string()).into());
    }
    fs::read_to_string(path).map_err(|e| KeyError::Read(e).into())
}

fn last_key_line(contents: &str) -> Option<&str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .last()
}

/// Create a file that must not already exist, with an explicit mode.
fn write_new(path: &Path, contents: &[u8], mode: u32) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::AlreadyExists {
            KeyError::AlreadyExists(path.display().to_string())
        } else {
            KeyError::Write(e)
        }
    })?;
    file.write_all(contents).map_err(KeyError::Write)?;
    file.sync_all().map_err(KeyError::Write)?;

    // The open mode is filtered by the umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).map_err(KeyError::Write)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(())
}

#[cfg(unix)]
fn warn_on_loose_permissions(path: &Path, expected_mode: u32) {
    use std::os::unix::fs::PermissionsExt;

    let Ok(metadata) = fs::metadata(path) else {
        return;
    };
    let actual_mode = metadata.permissions().mode() & 0o777;

    if actual_mode != expected_mode {
        warn!(
            path = %path.display(),
            mode = %format!("{:o}", actual_mode),
            expected = %format!("{:o}", expected_mode),
            "insecure key file permissions"
        );
    }
}
