//! Error types for linear system operations.

use thiserror::Error;

/// Failures escalated to the caller.
///
/// Size mismatches and degenerate determinants are ordinary outcomes and
/// never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SystemError {
    /// The input source could not produce a value
    #[error("Input aborted while reading `{prompt}`")]
    InputAborted { prompt: String },

    /// Only 2x2 and 3x3 systems exist
    #[error("Unsupported system size: {0}")]
    UnsupportedSize(usize),
}

pub type SystemResult<T> = Result<T, SystemError>;
