//! Yes/no confirmation.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;

use crate::error::Result;

/// Ask a yes/no question; the default answer is no.
///
/// On a terminal this is an interactive `dialoguer` prompt, which restores
/// the terminal mode on every exit path. Otherwise one line is read from
/// stdin so the answer can be piped in.
pub fn confirm(message: &str) -> Result<bool> {
    if io::stdin().is_terminal() && io::stderr().is_terminal() {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact()?;
        return Ok(answer);
    }

    let mut stderr = io::stderr();
    write!(stderr, "{} [y/N] ", message)?;
    stderr.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(is_yes(&line))
}

/// Any answer starting with `y` or `Y` is yes.
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('y' | 'Y'))
}
