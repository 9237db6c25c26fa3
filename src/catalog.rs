//! The fixed set of compared algorithms.
//!
//! Every entry is a plain constructor returning its family type. [`visit`] walks
//! them in catalog order so callers (benches, tests) stay generic over the
//! concrete computation types.

use digest::consts::U32;

use crate::config::{MAC_KEY_SIZE, XXHASH32_SEED};
use crate::error::{HashError, HashResult};
use crate::family::{KeyedFallible, Keyed64, Seeded32, Unkeyed, Unkeyed64};
use crate::harness::Harness;
use crate::hashers::{Blake2bSimd, DigestHasher, MacHasher, Murmur3, SipHash, XxHash32, XxHash64};
use crate::output::Output;
use crate::traits::{Algorithm, Descriptor};

pub type Blake2bMac256 = blake2::Blake2bMac<U32>;

pub const ENTRY_NAMES: [&str; 12] = [
    "message-digest-5",
    "secure-hash-1",
    "secure-hash-256",
    "secure-hash-3-224",
    "secure-hash-3-256",
    "ripemd-160",
    "blake2b-256",
    "blake2b-256-optimized",
    "murmur3",
    "siphash",
    "xxhash-64",
    "xxhash-32",
];

pub fn md5() -> Unkeyed<DigestHasher<md5::Md5>> {
    Unkeyed::new(ENTRY_NAMES[0], DigestHasher::new)
}

pub fn sha1() -> Unkeyed<DigestHasher<sha1::Sha1>> {
    Unkeyed::new(ENTRY_NAMES[1], DigestHasher::new)
}

pub fn sha256() -> Unkeyed<DigestHasher<sha2::Sha256>> {
    Unkeyed::new(ENTRY_NAMES[2], DigestHasher::new)
}

pub fn sha3_224() -> Unkeyed<DigestHasher<sha3::Sha3_224>> {
    Unkeyed::new(ENTRY_NAMES[3], DigestHasher::new)
}

pub fn sha3_256() -> Unkeyed<DigestHasher<sha3::Sha3_256>> {
    Unkeyed::new(ENTRY_NAMES[4], DigestHasher::new)
}

pub fn ripemd160() -> Unkeyed<DigestHasher<ripemd::Ripemd160>> {
    Unkeyed::new(ENTRY_NAMES[5], DigestHasher::new)
}

/// Keyed BLAKE2b-256. The key is checked by the constructor.
pub fn blake2b256() -> KeyedFallible<MacHasher<Blake2bMac256>> {
    KeyedFallible::new(ENTRY_NAMES[6], MAC_KEY_SIZE, MacHasher::new)
}

pub fn blake2b256_optimized() -> Unkeyed<Blake2bSimd> {
    Unkeyed::new(ENTRY_NAMES[7], Blake2bSimd::new)
}

pub fn murmur3() -> Unkeyed64<Murmur3> {
    Unkeyed64::new(ENTRY_NAMES[8], Murmur3::new)
}

pub fn siphash() -> Keyed64<SipHash, MAC_KEY_SIZE> {
    Keyed64::new(ENTRY_NAMES[9], SipHash::new)
}

pub fn xxhash64() -> Unkeyed64<XxHash64> {
    Unkeyed64::new(ENTRY_NAMES[10], XxHash64::new)
}

pub fn xxhash32() -> Seeded32<XxHash32> {
    Seeded32::new(ENTRY_NAMES[11], XXHASH32_SEED, XxHash32::with_seed)
}

pub trait Visitor {
    fn visit<A: Algorithm>(&mut self, algorithm: A);
}

pub fn visit<V: Visitor>(visitor: &mut V) {
    visitor.visit(md5());
    visitor.visit(sha1());
    visitor.visit(sha256());
    visitor.visit(sha3_224());
    visitor.visit(sha3_256());
    visitor.visit(ripemd160());
    visitor.visit(blake2b256());
    visitor.visit(blake2b256_optimized());
    visitor.visit(murmur3());
    visitor.visit(siphash());
    visitor.visit(xxhash64());
    visitor.visit(xxhash32());
}

/// Receives the entries whose harness could be prepared.
pub trait HarnessVisitor {
    fn visit_harness<A: Algorithm>(&mut self, harness: Harness<A>);
}

/// Prepares a harness over `len` zero bytes for every visited entry. Entries
/// that cannot be prepared are logged and skipped; the rest still reach the
/// inner visitor.
pub struct Prepare<'v, V> {
    len: usize,
    visitor: &'v mut V,
    skipped: Vec<(&'static str, HashError)>,
}

impl<'v, V: HarnessVisitor> Prepare<'v, V> {
    pub fn new(len: usize, visitor: &'v mut V) -> Self {
        Self {
            len,
            visitor,
            skipped: Vec::new(),
        }
    }

    pub fn into_skipped(self) -> Vec<(&'static str, HashError)> {
        self.skipped
    }
}

impl<'v, V: HarnessVisitor> Visitor for Prepare<'v, V> {
    fn visit<A: Algorithm>(&mut self, algorithm: A) {
        let name = algorithm.name();
        match Harness::new(algorithm, self.len) {
            Ok(harness) => self.visitor.visit_harness(harness),
            Err(err) => {
                log::error!("skipping {} over {} bytes: {}", name, self.len, err);
                self.skipped.push((name, err));
            }
        }
    }
}

/// Walks the catalog through [`Prepare`] and returns the skipped entries.
pub fn visit_prepared<V: HarnessVisitor>(len: usize, visitor: &mut V) -> Vec<(&'static str, HashError)> {
    let mut prepare = Prepare::new(len, visitor);
    visit(&mut prepare);
    prepare.into_skipped()
}

pub fn descriptors() -> Vec<Descriptor> {
    struct Collect(Vec<Descriptor>);

    impl Visitor for Collect {
        fn visit<A: Algorithm>(&mut self, algorithm: A) {
            self.0.push(algorithm.descriptor());
        }
    }

    let mut collect = Collect(Vec::with_capacity(ENTRY_NAMES.len()));
    visit(&mut collect);
    collect.0
}

/// Runs a single untimed iteration of every entry over `len` zero bytes.
pub fn digest_all(len: usize) -> Vec<(&'static str, HashResult<Output>)> {
    struct Digests {
        len: usize,
        out: Vec<(&'static str, HashResult<Output>)>,
    }

    impl Visitor for Digests {
        fn visit<A: Algorithm>(&mut self, algorithm: A) {
            let name = algorithm.name();
            let digest = Harness::new(algorithm, self.len).and_then(|h| h.digest_once());
            self.out.push((name, digest));
        }
    }

    let mut digests = Digests {
        len,
        out: Vec::with_capacity(ENTRY_NAMES.len()),
    };
    visit(&mut digests);
    digests.out
}
