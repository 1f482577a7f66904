//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Which file operation failed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FileOperation {
    Save,
    Load,
}

impl core::fmt::Display for FileOperation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FileOperation::Save => f.write_str("save"),
            FileOperation::Load => f.write_str("load"),
        }
    }
}

/// Domain-level error.
///
/// Raised at the point of violation and returned to the caller untouched; the
/// domain crates never log or swallow these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A price was negative (or not a finite number).
    #[error("price cannot be negative: {0}")]
    InvalidPrice(f64),

    /// A discount percentage fell outside `[0, 100]` after any variant adjustment.
    #[error("discount must be between 0-100: {0}")]
    InvalidDiscount(f64),

    /// A stock decrement would leave the product below zero.
    #[error("insufficient stock for {item}: requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: i64,
        available: i64,
    },

    /// An argument failed validation (e.g. non-positive order quantity).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced product does not exist in the inventory.
    #[error("product not found: {0}")]
    NotFound(String),

    /// A persistence file could not be opened, written or read.
    #[error("file operation failed: {operation} on {path}: {reason}")]
    FileIo {
        path: String,
        operation: FileOperation,
        reason: String,
    },
}

impl DomainError {
    pub fn insufficient_stock(item: impl Into<String>, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            requested,
            available,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn file_io(
        path: impl AsRef<std::path::Path>,
        operation: FileOperation,
        err: &std::io::Error,
    ) -> Self {
        Self::FileIo {
            path: path.as_ref().display().to_string(),
            operation,
            reason: err.to_string(),
        }
    }
}
