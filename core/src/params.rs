//! Limits on the sharing parameters.
//!
//! x-coordinates are single nonzero bytes, so at most 255 distinct shares
//! exist, and a threshold above that could never be met.

use crate::error::{Result, ShamirError};

/// Largest number of shares a single split can produce.
pub const MAX_PARTS: usize = u8::MAX as usize;

/// Smallest useful threshold; a threshold of one would hand the secret to
/// every share holder.
pub const MIN_THRESHOLD: usize = 2;

/// Largest supported threshold.
pub const MAX_THRESHOLD: usize = u8::MAX as usize;

/// Check a `(parts, threshold)` pair, reporting the first violated limit.
///
/// The checks run in a fixed order, so `(2, 1000)` is reported as too few
/// parts rather than as an oversized threshold.
pub fn validate_sharing_config(parts: usize, threshold: usize) -> Result<()> {
    if parts < threshold {
        return Err(ShamirError::PartsLessThanThreshold { parts, threshold });
    }
    if parts > MAX_PARTS {
        return Err(ShamirError::PartsExceedLimit(parts));
    }
    if threshold < MIN_THRESHOLD {
        return Err(ShamirError::ThresholdTooSmall(threshold));
    }
    if threshold > MAX_THRESHOLD {
        return Err(ShamirError::ThresholdExceedsLimit(threshold));
    }
    Ok(())
}
