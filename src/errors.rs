use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AliaSqlError {
    #[error("AliaSql: Could not locate executable.")]
    ToolNotFound { path: PathBuf },

    #[error("AliaSql: Process was not started.")]
    ProcessNotStarted { path: PathBuf },

    // The exit code is kept out of the message so callers matching on text keep working.
    #[error("AliaSql: Process returned an error.")]
    ProcessFailed { exit_code: i32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AliaSqlError {
    /// Exit code reported by the tool, when the failure came from a completed process.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            AliaSqlError::ProcessFailed { exit_code } => Some(*exit_code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, AliaSqlError>;
