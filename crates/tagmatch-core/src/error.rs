//! Error types and exit codes for tagmatch
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (missing catalog, malformed rows, unknown item)
//!
//! A query item that is absent from the catalog is not an error inside the
//! engine; it produces an empty recommendation list.

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
    /// Data error - missing or malformed catalog (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a catalog or serving a request
#[derive(Error, Debug)]
pub enum TagmatchError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("catalog not found: {path:?}")]
    CatalogNotFound { path: PathBuf },

    #[error("invalid catalog {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },

    #[error("catalog is missing required column: {column}")]
    MissingColumn { column: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl TagmatchError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        TagmatchError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        TagmatchError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        TagmatchError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a catalog row that could not be interpreted
    pub fn invalid_catalog(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        TagmatchError::InvalidCatalog {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TagmatchError::UnknownFormat(_)
            | TagmatchError::UsageError(_)
            | TagmatchError::InvalidValue { .. } => ExitCode::Usage,

            TagmatchError::CatalogNotFound { .. }
            | TagmatchError::InvalidCatalog { .. }
            | TagmatchError::MissingColumn { .. }
            | TagmatchError::NotFound { .. } => ExitCode::Data,

            TagmatchError::Io(_)
            | TagmatchError::Csv(_)
            | TagmatchError::Json(_)
            | TagmatchError::Toml(_)
            | TagmatchError::FailedOperationWithTarget { .. }
            | TagmatchError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            TagmatchError::UnknownFormat(_) => "unknown_format",
            TagmatchError::UsageError(_) => "usage_error",
            TagmatchError::InvalidValue { .. } => "invalid_value",
            TagmatchError::CatalogNotFound { .. } => "catalog_not_found",
            TagmatchError::InvalidCatalog { .. } => "invalid_catalog",
            TagmatchError::MissingColumn { .. } => "missing_column",
            TagmatchError::NotFound { .. } => "not_found",
            TagmatchError::Io(_) => "io_error",
            TagmatchError::Csv(_) => "csv_error",
            TagmatchError::Json(_) => "json_error",
            TagmatchError::Toml(_) => "toml_error",
            TagmatchError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            TagmatchError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for tagmatch operations
pub type Result<T> = std::result::Result<T, TagmatchError>;
