use std::num::ParseIntError;

use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("failed to generate random coefficients")]
    RandomSource(#[source] rand::Error),
    #[error(
        "interpolation needs one y-sample per x-sample: {x_samples} != {y_samples}"
    )]
    SampleLengthMismatch { x_samples: usize, y_samples: usize },
    #[error(transparent)]
    ParseFieldElement(#[from] ParseFieldElementError),
}

pub type Error = MathError;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseFieldElementError {
    #[error("invalid `u8`")]
    ParseU8Error(#[source] ParseIntError),
}
