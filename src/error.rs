//! Error types for vadd operations

use thiserror::Error;

use crate::Backend;

/// Result type for vadd operations
pub type Result<T> = std::result::Result<T, VaddError>;

/// Coarse classification of a [`VaddError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller broke the kernel contract (lengths, backend choice)
    InvalidArgument,
    /// Output buffer could not be allocated
    AllocationFailure,
}

/// Errors that can occur during vadd operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VaddError {
    /// Size mismatch between operands
    #[error("Size mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Expected size
        expected: usize,
        /// Actual size
        actual: usize,
    },

    /// Forced backend is not supported by this CPU
    #[error("Backend not supported on this platform: {0:?}")]
    UnsupportedBackend(Backend),

    /// Output buffer allocation failed
    #[error("Failed to allocate output buffer of {len} elements")]
    AllocationFailure {
        /// Requested element count
        len: usize,
    },
}

impl VaddError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            VaddError::SizeMismatch { .. } | VaddError::UnsupportedBackend(_) => {
                ErrorKind::InvalidArgument
            }
            VaddError::AllocationFailure { .. } => ErrorKind::AllocationFailure,
        }
    }
}
