use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no virtual environment at {} (create it first)", .0.display())]
    EnvNotFound(PathBuf),

    #[error("virtual environment at {} is unusable: {reason}", path.display())]
    EnvCorrupt { path: PathBuf, reason: String },

    #[error("environment activation failed: {0}")]
    Activation(String),

    #[error("tool '{0}' not found")]
    ToolNotFound(String),

    #[error("'{tool}' exited with status {code}")]
    ToolFailed { tool: String, code: i32 },

    #[error("'{tool}' was terminated by a signal")]
    ToolInterrupted { tool: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit code matching this error. Tool failures keep the
    /// wrapped tool's own status; everything else is a plain failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
