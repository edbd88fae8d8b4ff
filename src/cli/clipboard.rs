//! Clipboard sink.
//!
//! Pipes text into the first clipboard tool found on `PATH`.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ClipboardError, Result};

/// A clipboard command and the session variable it needs, if any.
struct Tool {
    program: &'static str,
    args: &'static [&'static str],
    requires_env: Option<&'static str>,
}

const TOOLS: &[Tool] = &[
    Tool {
        program: "wl-copy",
        args: &[],
        requires_env: Some("WAYLAND_DISPLAY"),
    },
    Tool {
        program: "xclip",
        args: &["-selection", "clipboard"],
        requires_env: Some("DISPLAY"),
    },
    Tool {
        program: "xsel",
        args: &["--clipboard", "--input"],
        requires_env: Some("DISPLAY"),
    },
    Tool {
        program: "pbcopy",
        args: &[],
        requires_env: None,
    },
    Tool {
        program: "clip.exe",
        args: &[],
        requires_env: None,
    },
];

/// Copy `bytes` to the system clipboard unchanged.
///
/// # Errors
///
/// Returns `ClipboardError::Unavailable` if no usable tool is installed,
/// or `ClipboardError::Failed` if the tool exits unsuccessfully.
pub fn copy(bytes: &[u8]) -> Result<()> {
    let (tool, path) = find_tool().ok_or(ClipboardError::Unavailable)?;
    debug!(tool = tool.program, path = %path.display(), "using clipboard tool");

    let failed = |reason: String| ClipboardError::Failed {
        tool: tool.program.to_string(),
        reason,
    };

    let mut child = Command::new(&path)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| failed(e.to_string()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(bytes)
            .map_err(|e| failed(e.to_string()))?;
    }

    let status = child.wait().map_err(|e| failed(e.to_string()))?;
    if !status.success() {
        return Err(failed(format!("exited with {}", status)).into());
    }

    Ok(())
}

fn find_tool() -> Option<(&'static Tool, PathBuf)> {
    TOOLS
        .iter()
        .filter(|tool| {
            tool.requires_env
                .map_or(true, |var| std::env::var_os(var).is_some())
        })
        .find_map(|tool| which::which(tool.program).ok().map(|path| (tool, path)))
}
