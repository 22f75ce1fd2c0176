use gf256::MathError;
use thiserror::Error;

use crate::params::{MAX_PARTS, MAX_THRESHOLD, MIN_THRESHOLD};

/// Result type specialized for secret sharing operations.
pub type Result<T, E = ShamirError> = std::result::Result<T, E>;

/// Errors that can arise while splitting or combining a secret.
///
/// Every variant is a final answer: none of them is worth retrying with the
/// same input, except [`ShamirError::RandomSourceFailure`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShamirError {
    #[error("number of parts ({parts}) cannot be less than the threshold ({threshold})")]
    PartsLessThanThreshold { parts: usize, threshold: usize },
    #[error("number of parts cannot exceed {max}, got {0}", max = MAX_PARTS)]
    PartsExceedLimit(usize),
    #[error("threshold must be at least {min}, got {0}", min = MIN_THRESHOLD)]
    ThresholdTooSmall(usize),
    #[error("threshold cannot exceed {max}, got {0}", max = MAX_THRESHOLD)]
    ThresholdExceedsLimit(usize),
    #[error("cannot split an empty secret")]
    EmptySecret,
    #[error("less than two shares cannot be used to reconstruct the secret, got {0}")]
    InsufficientShares(usize),
    #[error("shares must be at least two bytes long, got {0}")]
    SharesTooShort(usize),
    #[error("all shares must be the same length: share {index} has {found} bytes, expected {expected}")]
    InconsistentShareLength {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("division by zero: two shares carry the same x-coordinate")]
    DivisionByZero,
    #[error("failed to generate random coefficients")]
    RandomSourceFailure(#[source] rand::Error),
    #[error("share index must be in 1..=255, got {0}")]
    InvalidShareIndex(u8),
    #[error(transparent)]
    Field(MathError),
}

impl From<MathError> for ShamirError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => Self::DivisionByZero,
            MathError::RandomSource(source) => Self::RandomSourceFailure(source),
            other => Self::Field(other),
        }
    }
}
