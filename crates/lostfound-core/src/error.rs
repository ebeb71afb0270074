//! Error types and exit codes for lostfound
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing or malformed snapshot, unknown report)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing snapshot, malformed rows (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading reports or running an analysis
#[derive(Error, Debug)]
pub enum LostFoundError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("snapshot not found: {path:?}")]
    SnapshotNotFound { path: PathBuf },

    #[error("invalid snapshot {path:?}: {reason}")]
    InvalidSnapshot { path: PathBuf, reason: String },

    #[error("report not found: {key}")]
    ReportNotFound { key: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl LostFoundError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LostFoundError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        LostFoundError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a snapshot that could not be parsed
    pub fn invalid_snapshot(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        LostFoundError::InvalidSnapshot {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LostFoundError::UnknownFormat(_)
            | LostFoundError::UsageError(_)
            | LostFoundError::InvalidValue { .. } => ExitCode::Usage,

            LostFoundError::SnapshotNotFound { .. }
            | LostFoundError::InvalidSnapshot { .. }
            | LostFoundError::ReportNotFound { .. } => ExitCode::Data,

            LostFoundError::Io(_)
            | LostFoundError::Json(_)
            | LostFoundError::Toml(_)
            | LostFoundError::FailedOperation { .. }
            | LostFoundError::Other(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier used in the JSON error envelope
    pub fn error_type(&self) -> &'static str {
        match self {
            LostFoundError::UnknownFormat(_) => "unknown_format",
            LostFoundError::UsageError(_) => "usage_error",
            LostFoundError::InvalidValue { .. } => "invalid_value",
            LostFoundError::SnapshotNotFound { .. } => "snapshot_not_found",
            LostFoundError::InvalidSnapshot { .. } => "invalid_snapshot",
            LostFoundError::ReportNotFound { .. } => "report_not_found",
            LostFoundError::Io(_) => "io_error",
            LostFoundError::Json(_) => "json_error",
            LostFoundError::Toml(_) => "toml_error",
            LostFoundError::FailedOperation { .. } => "failed_operation",
            LostFoundError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for lostfound operations
pub type Result<T> = std::result::Result<T, LostFoundError>;
