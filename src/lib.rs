//! Throughput comparison of hash function implementations.
//!
//! Each catalog entry is timed the same way: a zero-filled buffer allocated once,
//! then per iteration a fresh computation, a single write of the whole buffer and
//! a finalize. The criterion benches in `benches/` drive [`Harness`] over
//! [`catalog`].

pub mod catalog;
pub mod config;
pub mod error;
pub mod family;
pub mod harness;
pub mod hashers;
pub(crate) mod output;
#[cfg(feature = "rayon")]
pub mod parallel;
pub mod traits;

pub use config::{BenchConfig, HASH_BUFFER_SIZE, XXHASH32_SEED};
pub use error::{HashError, HashResult};
pub use harness::Harness;
pub use output::Output;
pub use traits::{Algorithm, Computation, Computation32, Computation64, Descriptor, HashFamily};
