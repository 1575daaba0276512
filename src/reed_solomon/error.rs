//! Error types for Reed-Solomon decoding

use crate::galois::FieldError;
use thiserror::Error;

/// Errors that abort a decode. The codeword is never partially corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsError {
    /// A field inverse or logarithm was requested on zero
    #[error("Malformed field operation: {0}")]
    MalformedField(#[from] FieldError),

    /// The Euclidean algorithm hit a zero remainder before converging
    #[error("Euclidean algorithm broke down: remainder became zero while still at degree {degree}")]
    EuclideanBreakdown { degree: usize },

    /// The error locator's constant term is zero
    #[error("Degenerate error locator: sigma(0) is zero")]
    DegenerateLocator,

    /// Locator degree and root count disagree, too many errors for the capacity
    #[error("Too many errors: locator has degree {expected} but {found} roots were found")]
    UncorrectableErrorCount { expected: usize, found: usize },

    /// A computed error position lies outside the codeword
    #[error("Bad error location: position {position} is outside a codeword of length {length}")]
    LocationOutOfRange { position: isize, length: usize },

    /// The codeword length or error correction symbol count is unusable
    #[error("Invalid parameters (codeword length {length}, two_s {two_s}): {reason}")]
    InvalidParameters {
        two_s: usize,
        length: usize,
        reason: &'static str,
    },
}

/// Type alias for Result with RsError
pub type RsResult<T> = std::result::Result<T, RsError>;
