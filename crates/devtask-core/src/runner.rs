//! External tool invocation with exit-status propagation.

use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Run a command to completion, inheriting stdio. The tool's own output is
/// the user-visible diagnostic; a non-zero exit becomes [`Error::ToolFailed`]
/// carrying the same status code.
pub fn run(cmd: &mut Command) -> Result<()> {
    let tool = tool_name(cmd);
    debug!(%tool, "running");
    let status = cmd.status().map_err(|e| spawn_error(&tool, e))?;
    check_status(&tool, status)
}

/// Run a command and return its stdout as a string. Stderr is inherited so
/// the tool's diagnostics still reach the user.
pub fn capture(cmd: &mut Command) -> Result<String> {
    let tool = tool_name(cmd);
    debug!(%tool, "capturing output");
    let output = cmd
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| spawn_error(&tool, e))?;
    check_status(&tool, output.status)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn check_status(tool: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    match status.code() {
        Some(code) => Err(Error::ToolFailed {
            tool: tool.to_string(),
            code,
        }),
        None => Err(Error::ToolInterrupted {
            tool: tool.to_string(),
        }),
    }
}

fn spawn_error(tool: &str, err: io::Error) -> Error {
    if err.kind() == io::ErrorKind::NotFound {
        Error::ToolNotFound(tool.to_string())
    } else {
        Error::Io(err)
    }
}

fn tool_name(cmd: &Command) -> String {
    Path::new(cmd.get_program())
        .file_name()
        .unwrap_or_else(|| cmd.get_program())
        .to_string_lossy()
        .into_owned()
}
