use std::fmt;

use arrayvec::ArrayVec;
use byteorder::{BigEndian, WriteBytesExt};

use crate::config::MAX_OUTPUT_SIZE;
use crate::error::{HashError, HashResult};

/// Digest bytes of a single computation, stored inline.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Output(ArrayVec<u8, MAX_OUTPUT_SIZE>);

impl Output {
    pub fn from_slice(bytes: &[u8]) -> HashResult<Self> {
        let mut out = ArrayVec::<u8, MAX_OUTPUT_SIZE>::new();
        out.try_extend_from_slice(bytes)
            .map_err(|_| HashError::OutputTooLarge(bytes.len()))?;
        Ok(Self(out))
    }

    /// Big-endian, matching how 64-bit sums are appended to a byte digest.
    pub fn from_u64(value: u64) -> HashResult<Self> {
        let mut out = ArrayVec::<u8, MAX_OUTPUT_SIZE>::new();
        out.write_u64::<BigEndian>(value)?;
        Ok(Self(out))
    }

    pub fn from_u32(value: u32) -> HashResult<Self> {
        let mut out = ArrayVec::<u8, MAX_OUTPUT_SIZE>::new();
        out.write_u32::<BigEndian>(value)?;
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output({})", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_outputs_are_big_endian() {
        let out = Output::from_u64(0x0102030405060708).unwrap();
        assert_eq!(out.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);

        let out = Output::from_u32(0xd42fbfa2).unwrap();
        assert_eq!(out.to_string(), "d42fbfa2");
    }

    #[test]
    fn test_oversized_digest() {
        assert!(Output::from_slice(&[0u8; MAX_OUTPUT_SIZE]).is_ok());
        match Output::from_slice(&[0u8; MAX_OUTPUT_SIZE + 1]) {
            Err(HashError::OutputTooLarge(len)) => assert_eq!(len, MAX_OUTPUT_SIZE + 1),
            other => panic!("unexpected {:?}", other),
        }
    }
}
