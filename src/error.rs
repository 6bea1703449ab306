//! Error handling module for the configurator
//!
//! Provides the application-wide error type using thiserror. Domain modules
//! define their own narrow error enums (`SelectionError`, `CatalogError`,
//! `ReviewTransitionError`) which all convert into [`HotfixersError`].

use crate::catalog::CatalogError;
use crate::engine::SelectionError;
use crate::review::ReviewTransitionError;
use thiserror::Error;

/// Main error type for the configurator
#[derive(Error, Debug)]
pub enum HotfixersError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog construction or validation errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// A package or add-on id that is not in the catalog
    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    /// Review state machine contract violations
    #[error("Review error: {0}")]
    Review(#[from] ReviewTransitionError),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for configurator operations
pub type Result<T> = std::result::Result<T, HotfixersError>;

impl HotfixersError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PackageId;

    #[test]
    fn test_error_display() {
        let err = HotfixersError::terminal("raw mode unavailable");
        assert_eq!(err.to_string(), "Terminal error: raw mode unavailable");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HotfixersError = io_err.into();
        assert!(matches!(err, HotfixersError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: HotfixersError = json_err.into();
        assert!(matches!(err, HotfixersError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_selection_error_conversion() {
        let err: HotfixersError = SelectionError::UnknownPackage(PackageId::from("nope")).into();
        assert!(matches!(err, HotfixersError::InvalidSelection(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_review_error_conversion() {
        let err: HotfixersError = ReviewTransitionError::NotOpen.into();
        assert!(matches!(err, HotfixersError::Review(_)));
    }
}
