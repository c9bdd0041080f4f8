//! Error types for per-file renames and program startup.

use crate::config::ConfigError;
use crate::shape::FilenameShape;
use std::path::PathBuf;

/// Errors that affect a single file. The batch continues after any of them.
#[derive(Debug, thiserror::Error)]
pub enum RenameError {
    /// A shape pattern matched but its field rule could not be applied.
    ///
    /// This points at a mismatch between a pattern and its field rule, never
    /// at a foreign file; those are skipped as unrecognized instead.
    #[error("{file_name} matched {shape} but its fields could not be extracted: {reason}")]
    MalformedMatch {
        shape: FilenameShape,
        file_name: String,
        reason: String,
    },

    #[error("Refusing to rename {} to {}: target already exists", .from.display(), .to.display())]
    TargetExists { from: PathBuf, to: PathBuf },

    #[error("Failed to rename {} to {}: {error}", .from.display(), .to.display())]
    Filesystem {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

/// Errors that stop the program before any file is processed.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

pub type RenameResult<T> = Result<T, RenameError>;
