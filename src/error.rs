//! Error types for plate

use thiserror::Error;

/// Result type alias using plate's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced while building a solver.
/// Running a solver never fails, non-convergence is reported
/// through [`crate::solver::Termination`] instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Interior dimensions are zero or the padded grid does not fit in memory indexing
    #[error("Invalid plate dimensions: {rows} x {cols}")]
    InvalidDimensions {
        /// Interior rows requested
        rows: usize,
        /// Interior columns requested
        cols: usize,
    },

    /// Grid buffer allocation failed
    #[error("Out of memory: failed to allocate {bytes} bytes for a grid buffer")]
    Allocation {
        /// Requested size in bytes
        bytes: usize,
    },

    /// A solver parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// The parameter name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Explicit row blocks do not tile the interior
    #[error("Invalid row partition: {reason}")]
    InvalidPartition {
        /// Why it was rejected
        reason: String,
    },
}
