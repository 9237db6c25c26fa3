use crate::error::HashResult;
use crate::output::Output;
use crate::traits::Computation;

const BLAKE2B_256_SIZE: usize = 32;

/// Unkeyed BLAKE2b-256 from the SIMD-dispatching `blake2b_simd` crate.
pub struct Blake2bSimd(blake2b_simd::State);

impl Blake2bSimd {
    pub fn new() -> Self {
        Self(
            blake2b_simd::Params::new()
                .hash_length(BLAKE2B_256_SIZE)
                .to_state(),
        )
    }
}

impl Default for Blake2bSimd {
    fn default() -> Self {
        Self::new()
    }
}

impl Computation for Blake2bSimd {
    const OUTPUT_SIZE: usize = BLAKE2B_256_SIZE;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        self.0.update(data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        Output::from_slice(self.0.finalize().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_portable_blake2b() {
        use digest::{consts::U32, Digest};

        let mut simd = Blake2bSimd::new();
        simd.write(b"hash comparison").unwrap();

        let portable = blake2::Blake2b::<U32>::digest(b"hash comparison");
        assert_eq!(simd.sum().unwrap().as_bytes(), portable.as_slice());
    }
}
