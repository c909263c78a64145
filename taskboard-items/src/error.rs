//! Error types for the item store

use thiserror::Error;

/// Result type for item store operations
pub type Result<T> = std::result::Result<T, ItemError>;

/// Errors that can occur in the item store and its routes
#[derive(Debug, Error)]
pub enum ItemError {
    /// A required text field was missing or blank
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// An item identifier that is not an integer
    #[error("invalid item id for {field}: {value:?}")]
    InvalidId { field: &'static str, value: String },

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Listing template failed to parse or render
    #[error("template error: {0}")]
    Template(String),
}

impl ItemError {
    /// Create a template error
    pub fn template(message: impl ToString) -> Self {
        Self::Template(message.to_string())
    }

    /// Whether the request itself was at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::EmptyField { .. } | Self::InvalidId { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ItemError::EmptyField { field: "newItem" };
        assert_eq!(err.to_string(), "newItem must not be empty");

        let err = ItemError::InvalidId {
            field: "deleteItem",
            value: "abc".into(),
        };
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_client_errors() {
        assert!(ItemError::EmptyField { field: "newTitle" }.is_client_error());
        assert!(!ItemError::template("boom").is_client_error());
        assert!(!ItemError::from(rusqlite::Error::InvalidQuery).is_client_error());
    }
}
