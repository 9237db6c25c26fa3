//! The six factory shapes a catalog entry can take.
//!
//! Each family wraps a plain function pointer and carries no state besides its
//! name, key length and (for the seeded family) the seed, so entries are `Copy`
//! whatever the computation type.

use crate::error::{HashError, HashResult};
use crate::traits::{Algorithm, Computation, Computation32, Computation64, HashFamily};

pub struct Unkeyed<C> {
    name: &'static str,
    factory: fn() -> C,
}

impl<C> Clone for Unkeyed<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Unkeyed<C> {}

impl<C: Computation + 'static> Unkeyed<C> {
    pub fn new(name: &'static str, factory: fn() -> C) -> Self {
        Self { name, factory }
    }
}

impl<C: Computation + 'static> Algorithm for Unkeyed<C> {
    type Computation = C;

    fn name(&self) -> &'static str {
        self.name
    }

    fn family(&self) -> HashFamily {
        HashFamily::Unkeyed
    }

    fn instantiate(&self, _key: &[u8]) -> HashResult<C> {
        Ok((self.factory)())
    }
}

pub struct Unkeyed64<C> {
    name: &'static str,
    factory: fn() -> C,
}

impl<C> Clone for Unkeyed64<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Unkeyed64<C> {}

impl<C: Computation64 + 'static> Unkeyed64<C> {
    pub fn new(name: &'static str, factory: fn() -> C) -> Self {
        Self { name, factory }
    }
}

impl<C: Computation64 + 'static> Algorithm for Unkeyed64<C> {
    type Computation = C;

    fn name(&self) -> &'static str {
        self.name
    }

    fn family(&self) -> HashFamily {
        HashFamily::Unkeyed64
    }

    fn instantiate(&self, _key: &[u8]) -> HashResult<C> {
        Ok((self.factory)())
    }
}

pub struct Seeded32<C> {
    name: &'static str,
    seed: u32,
    factory: fn(u32) -> C,
}

impl<C> Clone for Seeded32<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Seeded32<C> {}

impl<C: Computation32 + 'static> Seeded32<C> {
    pub fn new(name: &'static str, seed: u32, factory: fn(u32) -> C) -> Self {
        Self {
            name,
            seed,
            factory,
        }
    }

    /// Same factory under another seed.
    pub fn with_seed(self, seed: u32) -> Self {
        Self { seed, ..self }
    }
}

impl<C: Computation32 + 'static> Algorithm for Seeded32<C> {
    type Computation = C;

    fn name(&self) -> &'static str {
        self.name
    }

    fn family(&self) -> HashFamily {
        HashFamily::Seeded32
    }

    fn seed(&self) -> Option<u32> {
        Some(self.seed)
    }

    fn instantiate(&self, _key: &[u8]) -> HashResult<C> {
        Ok((self.factory)(self.seed))
    }
}

/// Keyed construction that may reject the key. The error is returned, never
/// swallowed.
pub struct KeyedFallible<C> {
    name: &'static str,
    key_len: usize,
    factory: fn(&[u8]) -> HashResult<C>,
}

impl<C> Clone for KeyedFallible<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for KeyedFallible<C> {}

impl<C: Computation + 'static> KeyedFallible<C> {
    pub fn new(name: &'static str, key_len: usize, factory: fn(&[u8]) -> HashResult<C>) -> Self {
        Self {
            name,
            key_len,
            factory,
        }
    }
}

impl<C: Computation + 'static> Algorithm for KeyedFallible<C> {
    type Computation = C;

    fn name(&self) -> &'static str {
        self.name
    }

    fn family(&self) -> HashFamily {
        HashFamily::KeyedFallible
    }

    fn key_len(&self) -> usize {
        self.key_len
    }

    fn instantiate(&self, key: &[u8]) -> HashResult<C> {
        (self.factory)(key)
    }
}

pub struct Keyed64<C, const K: usize> {
    name: &'static str,
    factory: fn(&[u8; K]) -> C,
}

impl<C, const K: usize> Clone for Keyed64<C, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const K: usize> Copy for Keyed64<C, K> {}

impl<C: Computation64 + 'static, const K: usize> Keyed64<C, K> {
    pub fn new(name: &'static str, factory: fn(&[u8; K]) -> C) -> Self {
        Self { name, factory }
    }
}

impl<C: Computation64 + 'static, const K: usize> Algorithm for Keyed64<C, K> {
    type Computation = C;

    fn name(&self) -> &'static str {
        self.name
    }

    fn family(&self) -> HashFamily {
        HashFamily::Keyed64
    }

    fn key_len(&self) -> usize {
        K
    }

    fn instantiate(&self, key: &[u8]) -> HashResult<C> {
        Ok((self.factory)(sized_key(key)?))
    }
}

pub struct Keyed32<C, const K: usize> {
    name: &'static str,
    factory: fn(&[u8; K]) -> C,
}

impl<C, const K: usize> Clone for Keyed32<C, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, const K: usize> Copy for Keyed32<C, K> {}

impl<C: Computation32 + 'static, const K: usize> Keyed32<C, K> {
    pub fn new(name: &'static str, factory: fn(&[u8; K]) -> C) -> Self {
        Self { name, factory }
    }
}

impl<C: Computation32 + 'static, const K: usize> Algorithm for Keyed32<C, K> {
    type Computation = C;

    fn name(&self) -> &'static str {
        self.name
    }

    fn family(&self) -> HashFamily {
        HashFamily::Keyed32
    }

    fn key_len(&self) -> usize {
        K
    }

    fn instantiate(&self, key: &[u8]) -> HashResult<C> {
        Ok((self.factory)(sized_key(key)?))
    }
}

// Infallible families take a fixed-size key; only the slice length is checked.
fn sized_key<const K: usize>(key: &[u8]) -> HashResult<&[u8; K]> {
    key.try_into()
        .map_err(|_| HashError::InvalidKeyLength {
            expected: K,
            actual: key.len(),
        })
}
