//! Errors raised while preparing or running a hash computation.
//!
//! Construction and configuration problems are returned to the caller. A failure
//! inside a timed iteration is fatal for that benchmark, see
//! [`Harness::iteration`](crate::Harness::iteration).

use thiserror::Error;

pub type HashResult<T> = Result<T, HashError>;

#[derive(Debug, Error)]
pub enum HashError {
    /// A fixed-size key of the wrong length.
    #[error("invalid key length {actual}, expected {expected}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// A variable-size key longer than the constructor accepts.
    #[error("key of {actual} bytes exceeds maximum of {max}")]
    KeyTooLong { max: usize, actual: usize },

    /// A computation accepted fewer bytes than it was given.
    #[error("short write: {written} of {expected} bytes accepted")]
    ShortWrite { written: usize, expected: usize },

    /// Digest does not fit into the fixed output buffer.
    #[error("digest of {0} bytes exceeds output capacity")]
    OutputTooLarge(usize),

    /// The input buffer could not be allocated.
    #[error("cannot allocate {len} byte input buffer")]
    Allocation { len: usize },

    #[error("i/o failure while hashing: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
