//! Error taxonomy for ring construction, sampling, and message encoding
//!
//! Every failure in this crate is a local input-validation failure detected
//! at the boundary of the offending operation, plus one external condition
//! (the OS randomness source). None are retryable. A failed [`open`] check is
//! deliberately *not* an error: it returns `false` through the normal path.
//!
//! [`open`]: crate::commit::rlwe::CommitKey::open

use thiserror::Error;

/// Errors produced by ring setup, sampling, and encoding operations
#[derive(Debug, Error)]
pub enum Error {
    /// Ring or sampler parameter outside its valid range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Encoder input has too many bits for the ring degree
    #[error("message of {len} bits does not fit in a ring of degree {n}")]
    MessageTooLong { len: usize, n: usize },

    /// Encoder input contains a character other than '0' or '1'
    #[error("invalid bit character {found:?} at position {pos}")]
    InvalidBitCharacter { found: char, pos: usize },

    /// The operating system randomness source failed
    #[error("randomness source unavailable")]
    RandomnessUnavailable(#[source] rand::Error),
}
