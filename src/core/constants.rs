//! Constants used throughout page.
//!
//! Centralizes file names, environment variables and modes.

/// Application directory name under the XDG config and data homes.
pub const APP_DIR: &str = "page";

/// Store directory name under `$XDG_DATA_HOME/page`.
pub const STORE_DIR: &str = "secrets";

/// Private identity file name inside the key directory.
pub const IDENTITY_FILE: &str = "privkey";

/// Public recipient file name inside the key directory.
pub const RECIPIENT_FILE: &str = "recipients";

/// Optional configuration file name inside the key directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Prefix of in-flight temp files inside the store directory.
pub const TEMP_PREFIX: &str = ".page-tmp";

/// Mode of every entry file after a write.
pub const ENTRY_MODE: u32 = 0o600;

/// Mode of the store directory when page creates it.
pub const STORE_DIR_MODE: u32 = 0o700;

/// Editor used when neither `-e`, the config file nor `$EDITOR` name one.
pub const DEFAULT_EDITOR: &str = "vi";

/// Length of generated secrets when `-l` is not given.
pub const DEFAULT_GEN_LENGTH: u16 = 12;

/// Upper bound for `-l`.
pub const MAX_GEN_LENGTH: u16 = 1024;
