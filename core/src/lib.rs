//! Shamir's secret sharing over GF(2^8).
//!
//! A secret byte string is split into `n` shares so that any `t` of them
//! reconstruct it exactly, while fewer than `t` reveal nothing about it.
//!
//! ```
//! let shares = sss::split(b"test", 5, 3).unwrap();
//! let secret = sss::combine(&shares[1..4]).unwrap();
//! assert_eq!(secret, b"test");
//! ```
//!
//! Shares are not authenticated: [`combine`] cannot tell a corrupted,
//! foreign or insufficient set of shares from a good one, and returns an
//! unrelated byte string in that case.

pub mod error;
pub mod params;
pub mod shamir;
pub mod share;

pub use error::{Result, ShamirError};
pub use shamir::{combine, reshare, split, split_with_rng, SecretSharing};
pub use share::Share;
