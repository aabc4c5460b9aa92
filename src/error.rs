//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Invalid run configuration (aborts before any walk)
//! - WalkError: Directory traversal failures (aborts the affected root)
//! - CommandError: Go toolchain invocation failures (project-local)

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Exclude pattern is not a valid glob
    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Errors raised while walking a root path
#[derive(Error, Debug)]
pub enum WalkError {
    /// The underlying directory walk failed
    #[error("walk dir {root}: {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A manifest path could not be made absolute
    #[error("resolve {path}: {source}")]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by an external toolchain command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The process could not be started
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process exited unsuccessfully
    #[error("`{command}` {status}")]
    Status { command: String, status: ExitStatus },

    /// The process output could not be interpreted
    #[error("unreadable output from `{command}`: {message}")]
    Output { command: String, message: String },
}

impl ConfigError {
    /// Creates a new InvalidPattern error
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl WalkError {
    /// Creates a new Traversal error
    pub fn traversal(root: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        WalkError::Traversal {
            root: root.into(),
            source,
        }
    }

    /// Creates a new Resolve error
    pub fn resolve(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WalkError::Resolve {
            path: path.into(),
            source,
        }
    }
}

impl CommandError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Status error
    pub fn status(command: impl Into<String>, status: ExitStatus) -> Self {
        CommandError::Status {
            command: command.into(),
            status,
        }
    }

    /// Creates a new Output error
    pub fn output(command: impl Into<String>, message: impl Into<String>) -> Self {
        CommandError::Output {
            command: command.into(),
            message: message.into(),
        }
    }
}
