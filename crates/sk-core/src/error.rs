//! Error types for the speckle statistics workspace.

use thiserror::Error;

/// Workspace error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error (caller supplied bad arguments).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
