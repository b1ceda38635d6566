//! Error types for the transit-reach library.

use thiserror::Error;

/// All errors that can occur in the transit-reach library.
#[derive(Error, Debug)]
pub enum TransitError {
    /// Edge weight is negative, NaN, or infinite.
    #[error("Edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for transit-reach operations.
pub type TransitResult<T> = Result<T, TransitError>;
