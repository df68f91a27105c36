//! # Error Types
//!
//! Structured errors for plan_core. The taxonomy is deliberately narrow:
//! almost everything in the editing core degrades silently (unknown ids are
//! no-ops, unreadable stored plans become "no stored plan"), so errors only
//! surface at the storage boundary.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::errors::{PlanError, PlanResult};
//!
//! fn check(path: &str) -> PlanResult<()> {
//!     Err(PlanError::file_error("open", path, "permission denied"))
//! }
//! assert!(check("plan.json").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for plan_core operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Structured error type for storage operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PlanError {
    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PlanError {
    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PlanError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        PlanError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PlanError::FileError { .. } => "FILE_ERROR",
            PlanError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PlanError::file_error("save", "/tmp/plan.json", "disk full");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: PlanError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PlanError::serialization("bad json").error_code(),
            "SERIALIZATION_ERROR"
        );
        assert_eq!(
            PlanError::file_error("open", "x", "y").error_code(),
            "FILE_ERROR"
        );
    }
}
