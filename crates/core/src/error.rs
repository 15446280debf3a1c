use std::io;

/// Errors that can occur while resolving directories and running commands
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown directory or group: {0}")]
    UnknownSelector(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Command failed in `{dir}` (exit code {code})")]
    CommandFailed { dir: String, code: i32 },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Exit code the process should report for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CommandFailed { code, .. } => *code,
            _ => 1,
        }
    }
}

/// Result type alias for fed operations
pub type Result<T> = std::result::Result<T, Error>;
