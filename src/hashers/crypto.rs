use digest::typenum::Unsigned;
use digest::{Digest, ExtendableOutput, KeyInit, Mac, Update};

use crate::error::{HashError, HashResult};
use crate::output::Output;
use crate::traits::Computation;

/// Any RustCrypto [`Digest`], finalized at its native size.
pub struct DigestHasher<D>(D);

impl<D: Digest> DigestHasher<D> {
    pub fn new() -> Self {
        Self(D::new())
    }
}

impl<D: Digest> Default for DigestHasher<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Digest> Computation for DigestHasher<D> {
    const OUTPUT_SIZE: usize = <D::OutputSize as Unsigned>::USIZE;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        Digest::update(&mut self.0, data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        Output::from_slice(&self.0.finalize())
    }
}

/// Keyed construction over a RustCrypto [`Mac`]; the key is validated by the
/// underlying crate.
pub struct MacHasher<M>(M);

impl<M: Mac + KeyInit> MacHasher<M> {
    pub fn new(key: &[u8]) -> HashResult<Self> {
        <M as KeyInit>::new_from_slice(key)
            .map(Self)
            .map_err(|_| HashError::KeyTooLong {
                max: <M::KeySize as Unsigned>::USIZE,
                actual: key.len(),
            })
    }
}

impl<M: Mac + KeyInit> Computation for MacHasher<M> {
    const OUTPUT_SIZE: usize = <M::OutputSize as Unsigned>::USIZE;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        Mac::update(&mut self.0, data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        Output::from_slice(&self.0.finalize().into_bytes())
    }
}

/// Extendable-output function truncated to `N` bytes.
pub struct XofHasher<X, const N: usize>(X);

impl<X: ExtendableOutput + Update + Default, const N: usize> XofHasher<X, N> {
    pub fn new() -> Self {
        Self(X::default())
    }
}

impl<X: ExtendableOutput + Update + Default, const N: usize> Default for XofHasher<X, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<X: ExtendableOutput + Update + Default, const N: usize> Computation for XofHasher<X, N> {
    const OUTPUT_SIZE: usize = N;

    fn write(&mut self, data: &[u8]) -> HashResult<usize> {
        Update::update(&mut self.0, data);
        Ok(data.len())
    }

    fn sum(self) -> HashResult<Output> {
        let mut out = [0u8; N];
        self.0.finalize_xof_into(&mut out);
        Output::from_slice(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest::consts::U32;

    #[test]
    fn test_digest_output_size() {
        assert_eq!(DigestHasher::<sha2::Sha256>::OUTPUT_SIZE, 32);
        assert_eq!(DigestHasher::<sha3::Sha3_224>::OUTPUT_SIZE, 28);
        assert_eq!(MacHasher::<blake2::Blake2bMac<U32>>::OUTPUT_SIZE, 32);
    }

    #[test]
    fn test_split_writes_match_single_write() {
        let mut single = DigestHasher::<sha1::Sha1>::new();
        single.write(b"abcdef").unwrap();

        let mut split = DigestHasher::<sha1::Sha1>::new();
        split.write(b"abc").unwrap();
        split.write(b"def").unwrap();

        assert_eq!(single.sum().unwrap(), split.sum().unwrap());
    }

    #[test]
    fn test_truncated_xof() {
        let mut hasher = XofHasher::<sha3::Shake256, 32>::new();
        assert_eq!(hasher.write(&[0u8; 8]).unwrap(), 8);
        assert_eq!(
            hasher.sum().unwrap().to_hex(),
            "119141dce89807096095d9729b0da80481a492498e235346efc58aa73335a351"
        );

        let mut hasher = XofHasher::<sha3::Shake128, 16>::new();
        hasher.write(&[0u8; 8]).unwrap();
        assert_eq!(hasher.sum().unwrap().to_hex(), "7a24b666da345c98c3a400aafd14a51a");
    }

    #[test]
    fn test_mac_key_validation() {
        type Blake2bMac256 = blake2::Blake2bMac<U32>;

        assert!(MacHasher::<Blake2bMac256>::new(&[0u8; 16]).is_ok());
        assert!(MacHasher::<Blake2bMac256>::new(&[0u8; 64]).is_ok());
        match MacHasher::<Blake2bMac256>::new(&[0u8; 65]) {
            Err(HashError::KeyTooLong { max, actual }) => {
                assert_eq!(max, 64);
                assert_eq!(actual, 65);
            }
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("65 byte key accepted"),
        }
    }
}
