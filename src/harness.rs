use crate::error::{HashError, HashResult};
use crate::output::Output;
use crate::traits::{Algorithm, Computation};

/// Drives one algorithm over one zero-filled input buffer.
///
/// The buffer and the key are allocated once; every iteration builds a fresh
/// computation, writes the whole buffer in a single call and finalizes it.
pub struct Harness<A: Algorithm> {
    algorithm: A,
    input: Vec<u8>,
    key: Vec<u8>,
}

impl<A: Algorithm> Harness<A> {
    /// Prepares a harness with a zero key of the algorithm's declared length.
    pub fn new(algorithm: A, len: usize) -> HashResult<Self> {
        let key = vec![0u8; algorithm.key_len()];
        Self::with_key(algorithm, len, key)
    }

    /// Construction is attempted once here so a rejected key surfaces before any
    /// timing starts. An input buffer that cannot be allocated is an error, not
    /// an abort.
    pub fn with_key(algorithm: A, len: usize, key: Vec<u8>) -> HashResult<Self> {
        algorithm.instantiate(&key)?;
        let mut input = Vec::new();
        input
            .try_reserve_exact(len)
            .map_err(|_| HashError::Allocation { len })?;
        input.resize(len, 0u8);

        log::debug!(
            "prepared {} ({:?}) over {} bytes with {} byte key",
            algorithm.name(),
            algorithm.family(),
            len,
            key.len()
        );

        Ok(Self {
            algorithm,
            input,
            key,
        })
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn bytes_per_iteration(&self) -> u64 {
        self.input.len() as u64
    }

    pub fn digest_once(&self) -> HashResult<Output> {
        self.algorithm.instantiate(&self.key)?.digest(&self.input)
    }

    /// One timed iteration.
    ///
    /// # Panics
    /// Panics if the computation fails. A broken in-memory hash must abort the
    /// benchmark instead of producing timings.
    pub fn iteration(&self) -> Output {
        match self.digest_once() {
            Ok(digest) => digest,
            Err(err) => {
                log::error!("{} failed during a timed iteration: {}", self.name(), err);
                panic!("benchmark {} aborted: {}", self.name(), err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family::Unkeyed;
    use crate::traits::HashFamily;

    // Accepts at most four bytes per write.
    struct Truncating(Vec<u8>);

    impl Computation for Truncating {
        const OUTPUT_SIZE: usize = 4;

        fn write(&mut self, data: &[u8]) -> HashResult<usize> {
            let accepted = data.len().min(4);
            self.0.extend_from_slice(&data[..accepted]);
            Ok(accepted)
        }

        fn sum(self) -> HashResult<Output> {
            Output::from_slice(&self.0)
        }
    }

    fn truncating() -> Unkeyed<Truncating> {
        Unkeyed::new("truncating", || Truncating(Vec::new()))
    }

    #[test]
    fn test_buffer_is_zero_filled() {
        let harness = Harness::new(truncating(), 3).unwrap();
        assert_eq!(harness.input(), &[0u8; 3]);
        assert!(harness.key().is_empty());
        assert_eq!(harness.bytes_per_iteration(), 3);
        assert_eq!(harness.algorithm().family(), HashFamily::Unkeyed);
    }

    #[test]
    fn test_short_write_is_an_error() {
        let harness = Harness::new(truncating(), 8).unwrap();
        match harness.digest_once() {
            Err(HashError::ShortWrite { written, expected }) => {
                assert_eq!(written, 4);
                assert_eq!(expected, 8);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    #[should_panic(expected = "benchmark truncating aborted")]
    fn test_iteration_aborts_on_short_write() {
        let harness = Harness::new(truncating(), 8).unwrap();
        harness.iteration();
    }

    #[test]
    fn test_unallocatable_input_is_an_error() {
        match Harness::new(truncating(), usize::MAX) {
            Err(HashError::Allocation { len }) => assert_eq!(len, usize::MAX),
            Err(err) => panic!("unexpected error {}", err),
            Ok(_) => panic!("allocated usize::MAX bytes"),
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_oversized_sweep_size_is_an_error() {
        let sizes = crate::config::parse_sizes("8,1152921504606846976").unwrap();
        assert!(Harness::new(truncating(), sizes[0]).is_ok());
        assert!(matches!(
            Harness::new(crate::catalog::md5(), sizes[1]),
            Err(HashError::Allocation { .. })
        ));
    }

    #[test]
    fn test_zero_length_input() {
        let harness = Harness::new(truncating(), 0).unwrap();
        assert!(harness.iteration().is_empty());
    }
}
