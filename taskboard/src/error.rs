//! Error types for the board engine
//!
//! Domain outcomes (unknown ids, empty titles, deleting the last list) are
//! never errors: operations absorb them as no-ops. These variants cover the
//! boundaries around the model: command parsing, snapshot I/O and snapshot
//! validation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur around the board engine
#[derive(Debug, Error)]
pub enum BoardError {
    /// A board state without any list
    #[error("board has no lists")]
    NoLists,

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// A task refers to a list or user that does not exist
    #[error("task {task} references missing {target_type} {target}")]
    DanglingReference {
        target_type: String,
        task: String,
        target: String,
    },

    /// Snapshot file could not be used
    #[error("invalid snapshot at {path}: {message}")]
    InvalidSnapshot { path: PathBuf, message: String },

    /// Command input could not be understood
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Well-formed input naming an operation that does not exist
    #[error("unknown operation: {op}")]
    UnknownOperation { op: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create a dangling reference error
    pub fn dangling(
        target_type: impl Into<String>,
        task: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::DanglingReference {
            target_type: target_type.into(),
            task: task.into(),
            target: target.into(),
        }
    }

    /// Whether the caller sent something malformed (as opposed to an
    /// I/O or storage failure on our side)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::UnknownOperation { .. } | Self::InvalidValue { .. }
        )
    }
}
