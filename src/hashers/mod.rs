//! Adapters from third-party hash crates to [`Computation`](crate::Computation).

mod crypto;
mod fast;
mod simd;

pub use self::crypto::{DigestHasher, MacHasher, XofHasher};
pub use self::fast::{Murmur3, SipHash, XxHash32, XxHash64};
pub use self::simd::Blake2bSimd;
