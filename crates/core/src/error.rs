use std::io;
use std::path::PathBuf;

/// Errors that can occur while building or running phase tasks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unknown phase: {0}")]
    UnknownPhase(String),

    #[error("Directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to spawn `{command}`: {source}")]
    SpawnError {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {}", describe_exit(.code))]
    ProcessFailed { command: String, code: Option<i32> },

    #[error("Watch error: {0}")]
    WatchError(#[from] notify::Error),

    #[error("Invalid glob pattern: {0}")]
    PatternError(#[from] glob::PatternError),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Exit code to report for this error when it ends the process
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ProcessFailed { code: Some(code), .. } => *code,
            _ => 1,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "a signal".to_string(),
    }
}

/// Result type alias for phase-runner operations
pub type Result<T> = std::result::Result<T, Error>;
