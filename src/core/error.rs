//! Error types for observable collections
//!
//! Every fallible operation returns [`Result`]. Errors are raised before any
//! storage mutation, so a failed primitive leaves the collection untouched.

use thiserror::Error;

/// Result type alias for collection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised by an observable collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A malformed argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The referenced item is not in the collection
    #[error("The item provided is not in the collection")]
    NotFound,

    /// Index outside the current bounds
    #[error("Index {index} is out of range for a collection of length {len}")]
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Length at the time of the call
        len: usize,
    },

    /// Mutation attempted from inside one of this collection's change handlers
    #[error("Modification of this collection during execution of a change handler is not permitted")]
    Reentrancy,

    /// The instance's options forbid the attempted operation
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an index out of range error
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}
