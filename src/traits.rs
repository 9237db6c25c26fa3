use crate::error::{HashError, HashResult};
use crate::output::Output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFamily {
    Unkeyed,
    Unkeyed64,
    Seeded32,
    KeyedFallible,
    Keyed64,
    Keyed32,
}

impl HashFamily {
    pub fn is_keyed(&self) -> bool {
        matches!(
            self,
            HashFamily::KeyedFallible | HashFamily::Keyed64 | HashFamily::Keyed32
        )
    }
}

/// A single hash computation: fed with bytes, then consumed into a digest.
pub trait Computation: Sized {
    /// Digest length in bytes.
    const OUTPUT_SIZE: usize;

    /// Absorbs `data` and reports how many bytes were accepted.
    fn write(&mut self, data: &[u8]) -> HashResult<usize>;

    fn sum(self) -> HashResult<Output>;

    /// A single write of `data` followed by the sum. This is what a timed
    /// iteration runs; a partial write is an error.
    fn digest(mut self, data: &[u8]) -> HashResult<Output> {
        let written = self.write(data)?;
        if written != data.len() {
            return Err(HashError::ShortWrite {
                written,
                expected: data.len(),
            });
        }

        self.sum()
    }
}

pub trait Computation64: Computation {
    fn sum64(self) -> HashResult<u64>;
}

pub trait Computation32: Computation {
    fn sum32(self) -> HashResult<u32>;
}

/// Static description of a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    pub name: &'static str,
    pub family: HashFamily,
    pub key_len: usize,
    pub seed: Option<u32>,
    pub output_bits: usize,
}

/// A named way of producing fresh computations.
///
/// `instantiate` is called once per timed iteration with the harness key; unkeyed
/// families ignore it.
pub trait Algorithm: Clone + Send + Sync + 'static {
    type Computation: Computation;

    fn name(&self) -> &'static str;

    fn family(&self) -> HashFamily;

    fn key_len(&self) -> usize {
        0
    }

    fn seed(&self) -> Option<u32> {
        None
    }

    fn output_size(&self) -> usize {
        <Self::Computation as Computation>::OUTPUT_SIZE
    }

    fn instantiate(&self, key: &[u8]) -> HashResult<Self::Computation>;

    fn descriptor(&self) -> Descriptor {
        Descriptor {
            name: self.name(),
            family: self.family(),
            key_len: self.key_len(),
            seed: self.seed(),
            output_bits: self.output_size() * 8,
        }
    }
}
