// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Key hashing.
//!
//! A filter hashes each key exactly once and reduces that single value
//! modulo every slot capacity. Anything implementing [`KeyHasher`] can be
//! plugged in; the default is the polynomial [`RollingHash`].
use std::fmt::Debug;
use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::error::{Error, Result};

/// Default rolling hash base. Larger than the alphabet it was chosen for.
pub const DEFAULT_BASE: u64 = 53;

/// Default rolling hash modulus, a large prime.
pub const DEFAULT_MODULUS: u64 = 1_000_000_009;

/// Seeds used for SipHash.
const SIP_SEED: [u8; 16] = [
    136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
];

/// Maps a string key to a single hash value.
///
/// Implementations must be pure: the same key always yields the same value,
/// otherwise keys that were added could be reported absent.
pub trait KeyHasher: Clone + Debug + PartialEq {
    /// Hash a key.
    fn hash_key(&self, key: &str) -> u64;
}

/// How the rolling hash turns a key into per-character values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CharMapping {
    /// Each UTF-8 byte `b` contributes `b - 'a' + 1`, reduced into `[0, m)`.
    ///
    /// Lowercase ASCII letters map to `1..=26`. Every other byte still
    /// contributes a well-defined value, but may collide with letters.
    #[default]
    Lowercase,
    /// Each Unicode scalar value `c` contributes `c + 1`.
    Ordinal,
}

/// Polynomial rolling hash: `sum(v_i * p^i) mod m` over the key's characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RollingHash {
    base: u64,
    modulus: u64,
    mapping: CharMapping,
}

impl RollingHash {
    /// Create a rolling hash with the given base and modulus.
    pub fn new(base: u64, modulus: u64) -> Result<Self> {
        if base < 2 {
            return Err(Error::InvalidBase { base });
        }
        if modulus < 2 {
            return Err(Error::InvalidModulus { modulus });
        }
        Ok(Self {
            base,
            modulus,
            mapping: CharMapping::default(),
        })
    }

    /// Use a different character mapping.
    pub fn with_mapping(mut self, mapping: CharMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// The base `p`.
    pub fn base(&self) -> u64 {
        self.base
    }

    /// The modulus `m`.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// The character mapping.
    pub fn mapping(&self) -> CharMapping {
        self.mapping
    }

    fn fold(&self, values: impl Iterator<Item = u64>) -> u64 {
        let m = self.modulus as u128;
        let p = self.base as u128;
        let (mut hash, mut power) = (0u128, 1u128);

        // Values are already below `m`, so every product fits in a `u128`.
        for v in values {
            hash = (hash + v as u128 * power) % m;
            power = (power * p) % m;
        }
        hash as u64
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: DEFAULT_MODULUS,
            mapping: CharMapping::Lowercase,
        }
    }
}

impl KeyHasher for RollingHash {
    fn hash_key(&self, key: &str) -> u64 {
        let m = self.modulus;

        match self.mapping {
            CharMapping::Lowercase => self.fold(
                key.bytes()
                    .map(|b| (b as i128 - b'a' as i128 + 1).rem_euclid(m as i128) as u64),
            ),
            CharMapping::Ordinal => self.fold(key.chars().map(|c| (c as u64 + 1) % m)),
        }
    }
}

/// SipHash-1-3 with a fixed key, for arbitrary text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SipHash {
    seed: [u8; 16],
}

impl SipHash {
    /// Create a SipHash hasher keyed with the given seed.
    pub fn with_seed(seed: [u8; 16]) -> Self {
        Self { seed }
    }
}

impl Default for SipHash {
    fn default() -> Self {
        Self::with_seed(SIP_SEED)
    }
}

impl KeyHasher for SipHash {
    fn hash_key(&self, key: &str) -> u64 {
        let mut sip = SipHasher13::new_with_key(&self.seed);
        sip.write(key.as_bytes());
        sip.finish()
    }
}
