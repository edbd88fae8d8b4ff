//! Command-line interface.

pub mod clipboard;
pub mod completions;
pub mod edit;
pub mod editor;
pub mod gen;
pub mod init;
pub mod ls;
pub mod open;
pub mod output;
pub mod prompt;
pub mod rm;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::{Config, Overrides};
use crate::core::constants;
use crate::error::Result;

/// Page - a tiny age-encrypted password store.
#[derive(Parser)]
#[command(
    name = "page",
    about = "A tiny age-encrypted password store, one file per secret",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store directory (default: $XDG_DATA_HOME/page/secrets)
    #[arg(long, global = true, env = "PAGE_STORE_DIR", value_name = "DIR")]
    pub store: Option<PathBuf>,

    /// Key directory holding privkey and recipients (default: $XDG_CONFIG_HOME/page)
    #[arg(long, global = true, env = "PAGE_KEY_DIR", value_name = "DIR")]
    pub key_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate the age keypair and create the store
    Init,

    /// List entries
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy an entry to the clipboard
    Open {
        /// Print the entry instead of copying it
        #[arg(short, long)]
        print: bool,
        /// Entry name
        entry: String,
    },

    /// Create or edit an entry in an editor
    Edit {
        /// Editor to use instead of $EDITOR
        #[arg(short, long)]
        editor: Option<String>,
        /// Entry name
        entry: String,
    },

    /// Generate a random secret into a new entry
    Gen {
        /// Number of characters to generate
        #[arg(
            short,
            long,
            default_value_t = constants::DEFAULT_GEN_LENGTH,
            value_parser = clap::value_parser!(u16).range(1..=i64::from(constants::MAX_GEN_LENGTH))
        )]
        length: u16,
        /// Entry name
        entry: String,
    },

    /// Remove an entry
    Rm {
        /// Do not ask for confirmation
        #[arg(short, long)]
        force: bool,
        /// Entry name
        entry: String,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed command line.
///
/// Configuration is resolved only for commands that touch the store.
pub fn execute(cli: Cli) -> Result<()> {
    use Command::*;

    let overrides = Overrides {
        store_dir: cli.store,
        key_dir: cli.key_dir,
    };
    let config = move || Config::resolve(overrides);

    match cli.command {
        Init => init::execute(&config()?),
        Ls { json } => ls::execute(&config()?, json),
        Open { print, entry } => open::execute(&config()?, &entry, print),
        Edit { editor, entry } => edit::execute(&config()?, &entry, editor.as_deref()),
        Gen { length, entry } => gen::execute(&config()?, &entry, usize::from(length)),
        Rm { force, entry } => rm::execute(&config()?, &entry, force),
        Completions { shell } => completions::execute(shell),
    }
}
