use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub type BootstrapResult<T = ()> = Result<T, BootstrapError>;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Git is not installed")]
    GitNotInstalled,

    #[error("Directory {} not found!", .path.display())]
    DirNotFound { path: PathBuf },

    #[error("Error starting command {command}: {source}")]
    GitCommandFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Command '{command}' exited with code {code}: {stderr}")]
    GitCommandError {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Command '{command}' was terminated by {}", signal_name(.signal))]
    GitCommandTerminated { command: String, signal: Option<i32> },

    #[error("Command '{command}' timed out after {}s", .timeout.as_secs())]
    GitCommandTimedOut { command: String, timeout: Duration },

    #[error("Error waiting for process to finish: {source}")]
    ProcessWaitFailed { source: std::io::Error },

    #[error("Failed to initialize repository: {}", stderr_of(.0))]
    InitFailed(Box<BootstrapError>),

    #[error("Failed to set {key}: {}", stderr_of(.source))]
    SetConfigFailed {
        key: String,
        source: Box<BootstrapError>,
    },

    #[error("{what} is required")]
    EmptyInput { what: String },

    #[error("Failed to read input: {source}")]
    ReadInputFailed { source: std::io::Error },

    #[error("Failed to create {}: {source}", .path.display())]
    WriteIgnoreFileFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to query repository status: {}", stderr_of(.0))]
    StatusFailed(Box<BootstrapError>),

    #[error("Failed to stage files: {}", stderr_of(.0))]
    StageFailed(Box<BootstrapError>),

    #[error("Failed to create initial commit: {}", stderr_of(.0))]
    CommitFailed(Box<BootstrapError>),

    #[error("Interrupted by user")]
    Interrupted,
}

impl BootstrapError {
    /// Captured stderr of a failed git command, if this error carries one.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            BootstrapError::GitCommandError { stderr, .. } => Some(stderr),
            BootstrapError::InitFailed(inner)
            | BootstrapError::StatusFailed(inner)
            | BootstrapError::StageFailed(inner)
            | BootstrapError::CommitFailed(inner)
            | BootstrapError::SetConfigFailed { source: inner, .. } => inner.stderr(),
            _ => None,
        }
    }
}

// step errors show what git printed, falling back to the whole inner error
fn stderr_of(error: &BootstrapError) -> String {
    match error.stderr() {
        Some(stderr) if !stderr.is_empty() => stderr.to_string(),
        _ => error.to_string(),
    }
}

fn signal_name(signal: &Option<i32>) -> String {
    match signal {
        Some(signal) => format!("signal {}", signal),
        None => "a signal".to_string(),
    }
}
