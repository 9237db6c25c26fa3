use std::hash::Hasher;

use siphasher::sip::SipHasher24;
use smallvec::SmallVec;

use crate::error::HashResult;
use crate::output::Output;
use crate::traits::{Computation, Computation32, Computation64};

/// MurmurHash3 x64_128 reduced to its first 64-bit half.
///
/// The murmur3 crate hashes a reader in one pass. A single write followed by the
/// sum ([`Computation::digest`]) reads the caller's slice directly; separate
/// writes are staged until the sum is taken.
pub struct Murmur3 {
    buffer: SmallVec<[u8; 64]>,
    seed: u32,
}

impl Murmur3 {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u32) -> Self {
        Self {
            buffer: SmallVec::new(),
            seed,
        }
    }
}

impl Default for Murmur3 {
    fn default() -> Self {
        Self::new()
    }
}

impl Computation for Murmur3 {
    const OUTPUT_SIZE: usize = 8;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        self.buffer.extend_from_slice(data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        Output::from_u64(self.sum64()?)
    }

    fn digest(mut self, data: &[u8]) -> HashResult<Output> {
        if !self.buffer.is_empty() {
            self.write(data)?;
            return self.sum();
        }
        Output::from_u64(murmur3_h1(data, self.seed)?)
    }
}

impl Computation64 for Murmur3 {
    fn sum64(self) -> HashResult<u64> {
        murmur3_h1(&self.buffer, self.seed)
    }
}

fn murmur3_h1(mut data: &[u8], seed: u32) -> HashResult<u64> {
    let hash = murmur3::murmur3_x64_128(&mut data, seed)?;
    // h1 sits in the low half
    Ok(hash as u64)
}

/// SipHash-2-4 with a 128-bit key.
pub struct SipHash(SipHasher24);

impl SipHash {
    pub fn new(key: &[u8; 16]) -> Self {
        Self(SipHasher24::new_with_key(key))
    }
}

impl Computation for SipHash {
    const OUTPUT_SIZE: usize = 8;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        self.0.write(data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        Output::from_u64(self.sum64()?)
    }
}

impl Computation64 for SipHash {
    fn sum64(self) -> HashResult<u64> {
        Ok(self.0.finish())
    }
}

pub struct XxHash64(twox_hash::XxHash64);

impl XxHash64 {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self(twox_hash::XxHash64::with_seed(seed))
    }
}

impl Default for XxHash64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Computation for XxHash64 {
    const OUTPUT_SIZE: usize = 8;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        self.0.write(data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        Output::from_u64(self.sum64()?)
    }
}

impl Computation64 for XxHash64 {
    fn sum64(self) -> HashResult<u64> {
        Ok(self.0.finish())
    }
}

pub struct XxHash32(twox_hash::XxHash32);

impl XxHash32 {
    pub fn with_seed(seed: u32) -> Self {
        Self(twox_hash::XxHash32::with_seed(seed))
    }
}

impl Computation for XxHash32 {
    const OUTPUT_SIZE: usize = 4;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        self.0.write(data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        Output::from_u32(self.sum32()?)
    }
}

impl Computation32 for XxHash32 {
    fn sum32(self) -> HashResult<u32> {
        // the 32-bit state is widened by `Hasher::finish`
        Ok(self.0.finish() as u32)
    }
}
