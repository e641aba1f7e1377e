//! Error handling and result types for BTree operations.
//!
//! Absent keys are not errors: `search` and `delete` report them through their
//! boolean results. Errors are reserved for invalid configuration and for the
//! checked `try_*` operations.

use thiserror::Error;

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BTreeError {
    /// Key not found in the tree (only produced by `try_remove`).
    #[error("Key not found in tree")]
    KeyNotFound,
    /// Invalid minimum degree specified.
    #[error("Invalid degree: {0}")]
    InvalidDegree(String),
    /// Internal data structure integrity violation.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
}

impl BTreeError {
    /// Create an InvalidDegree error with context
    pub fn invalid_degree(degree: usize, min_required: usize) -> Self {
        Self::InvalidDegree(format!(
            "Degree {} is invalid (minimum required: {})",
            degree, min_required
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error is a degree error
    pub fn is_degree_error(&self) -> bool {
        matches!(self, Self::InvalidDegree(_))
    }
}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, BTreeError>;
