//! Completions command.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as CompletionShell;

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
        }
    }
}

/// Print the completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    render(shell, &mut std::io::stdout())
}

/// Write the completion script for `shell` to `out`.
pub fn render(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(CompletionShell::from(shell), &mut cmd, name, out);
    Ok(())
}
