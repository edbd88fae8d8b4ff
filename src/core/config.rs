//! Configuration resolution.
//!
//! Paths are resolved once per invocation into an explicit [`Config`] that
//! is handed to the store and key loaders. Precedence, highest first:
//! command-line flags (or their `PAGE_*` environment variables), the
//! optional `config.toml` in the key directory, then XDG defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::core::keys::KeyPaths;
use crate::error::{ConfigError, Result};

/// Resolved paths and settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one encrypted file per entry
    pub store_dir: PathBuf,
    /// Directory holding `privkey`, `recipients` and `config.toml`
    pub key_dir: PathBuf,
    /// Editor from `config.toml` or `$EDITOR`
    pub editor: Option<String>,
}

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub store_dir: Option<PathBuf>,
    pub key_dir: Option<PathBuf>,
}

/// On-disk `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    store: Option<PathBuf>,
    editor: Option<String>,
}

impl Config {
    /// Resolve the configuration from overrides, config file and defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDir` if a default is needed but no home
    /// directory can be found, or a parse error for a malformed config file.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let key_dir = match overrides.key_dir {
            Some(dir) => dir,
            None => default_key_dir()?,
        };

        let file = FileConfig::load(&key_dir.join(constants::CONFIG_FILE))?;

        let store_dir = match (overrides.store_dir, file.store) {
            (Some(dir), _) => dir,
            (None, Some(dir)) => expand_home(&dir)?,
            (None, None) => default_store_dir()?,
        };

        let editor = match file.editor {
            Some(editor) => Some(editor),
            None => std::env::var("EDITOR").ok().filter(|e| !e.trim().is_empty()),
        };

        let config = Self {
            store_dir,
            key_dir,
            editor,
        };
        debug!(
            store = %config.store_dir.display(),
            keys = %config.key_dir.display(),
            "config resolved"
        );

        Ok(config)
    }

    /// Identity and recipient file locations.
    pub fn key_paths(&self) -> KeyPaths {
        KeyPaths::in_dir(&self.key_dir)
    }

    /// Editor to launch, preferring an explicit choice.
    pub fn editor(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| self.editor.clone())
            .unwrap_or_else(|| constants::DEFAULT_EDITOR.to_string())
    }
}

impl FileConfig {
    fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        debug!(path = %path.display(), "loading config file");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        let file: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        if let Some(editor) = &file.editor {
            if editor.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "editor",
                    reason: "cannot be empty".to_string(),
                }
                .into());
            }
        }

        Ok(file)
    }
}

/// `$XDG_CONFIG_HOME/page` (or the platform config directory).
fn default_key_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(base.join(constants::APP_DIR))
}

/// `$XDG_DATA_HOME/page/secrets`, falling back to `~/.local/share`.
fn default_store_dir() -> Result<PathBuf> {
    let base = match std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or(ConfigError::NoHomeDir)?
            .join(".local")
            .join("share"),
    };
    Ok(base.join(constants::APP_DIR).join(constants::STORE_DIR))
}

fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(dirs::home_dir().ok_or(ConfigError::NoHomeDir)?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}
