//! Error types for Rosenbrock evaluation.
//!
//! The plain evaluators never fail. Only the strict entry points return
//! these errors, for inputs too short to contain a single adjacent pair.

use thiserror::Error;

/// Errors that can occur when evaluating the Rosenbrock function strictly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosenbrockError {
    /// Input vector has fewer elements than the function needs.
    #[error("invalid argument: input has {len} elements, need at least {min}")]
    InvalidArgument {
        /// Number of elements supplied
        len: usize,
        /// Minimum number of elements required
        min: usize,
    },
}

/// A specialized `Result` type for Rosenbrock operations.
pub type Result<T> = std::result::Result<T, RosenbrockError>;

impl RosenbrockError {
    /// Returns `true` if the input was rejected as an invalid argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RosenbrockError::InvalidArgument { .. })
    }
}
