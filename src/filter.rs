// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter partitioned into independently sized slots.
//!
//! Each key is hashed once. The hash is reduced modulo the capacity of every
//! slot, and the resulting position is set in that slot. A key is reported
//! present only if its position is set in all slots.

use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::hash::{KeyHasher, RollingHash};
use crate::slot::Slot;

/// Slot capacities used by [`FilterBuilder::default`]: the primes from 11 to 37.
pub const DEFAULT_CAPACITIES: [usize; 8] = [11, 13, 17, 19, 23, 29, 31, 37];

/// Configuration for a [`Filter`].
#[derive(Clone, Debug)]
pub struct FilterBuilder<H = RollingHash> {
    capacities: Vec<usize>,
    hasher: H,
}

impl FilterBuilder<RollingHash> {
    /// Start a filter with the given slot capacities and the default rolling hash.
    ///
    /// Distinct primes are recommended, since capacities sharing a factor
    /// map keys to correlated positions.
    pub fn new(capacities: impl Into<Vec<usize>>) -> Self {
        Self {
            capacities: capacities.into(),
            hasher: RollingHash::default(),
        }
    }
}

impl Default for FilterBuilder<RollingHash> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITIES)
    }
}

impl<H: KeyHasher> FilterBuilder<H> {
    /// Hash keys with a different hasher.
    pub fn hasher<G: KeyHasher>(self, hasher: G) -> FilterBuilder<G> {
        FilterBuilder {
            capacities: self.capacities,
            hasher,
        }
    }

    /// Validate the configuration and allocate every slot.
    pub fn build(self) -> Result<Filter<H>> {
        if self.capacities.is_empty() {
            return Err(Error::NoSlots);
        }
        if let Some(index) = self.capacities.iter().position(|c| *c == 0) {
            return Err(Error::ZeroCapacity { index });
        }
        if let Some((a, b)) = shared_factor(&self.capacities) {
            warn!(a, b, "slot capacities share a common factor");
        }
        let slots: Box<[Slot]> = self.capacities.iter().map(|c| Slot::new(*c)).collect();

        debug!(
            slots = slots.len(),
            bits = self.capacities.iter().sum::<usize>(),
            hasher = ?self.hasher,
            "filter built"
        );

        Ok(Filter {
            slots,
            hasher: self.hasher,
        })
    }
}

/// A probabilistic set of string keys.
///
/// Never reports an added key as absent. May report a key that was never
/// added as present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter<H = RollingHash> {
    slots: Box<[Slot]>,
    hasher: H,
}

impl Filter<RollingHash> {
    /// Return a new filter with one slot per capacity, hashing keys with the
    /// default [`RollingHash`].
    pub fn new(capacities: &[usize]) -> Result<Self> {
        FilterBuilder::new(capacities).build()
    }
}

impl<H: KeyHasher> Filter<H> {
    /// Add a key. Adding the same key again has no effect.
    pub fn add(&mut self, key: &str) {
        let hash = self.hasher.hash_key(key);
        trace!(key, hash, "add");

        for slot in self.slots.iter_mut() {
            let index = slot.index_of(hash);
            slot.set(index);
        }
    }

    /// Add every key of an iterator.
    pub fn add_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        for key in keys {
            self.add(key);
        }
    }

    /// Return whether a key was possibly added. A `false` is always correct.
    pub fn contains(&self, key: &str) -> bool {
        let hash = self.hasher.hash_key(key);

        self.slots.iter().all(|slot| slot.is_set(slot.index_of(hash)))
    }

    /// Position a key maps to in each slot, in slot order.
    pub fn fingerprint(&self, key: &str) -> Vec<usize> {
        let hash = self.hasher.hash_key(key);

        self.slots.iter().map(|slot| slot.index_of(hash)).collect()
    }

    /// The slots, in the order their capacities were configured.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Capacity of each slot.
    pub fn capacities(&self) -> Vec<usize> {
        self.slots.iter().map(Slot::capacity).collect()
    }

    /// Total number of positions across all slots.
    pub fn bits(&self) -> usize {
        self.slots.iter().map(Slot::capacity).sum()
    }

    /// The hasher keys are mapped with.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Whether nothing was added yet.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.count_ones() == 0)
    }

    /// Probability that a key never added is reported present, given the
    /// current fill of every slot.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.slots.iter().map(Slot::fill_ratio).product()
    }

    /// Approximate number of distinct keys added.
    ///
    /// Each slot yields an estimate from its fill, `-c ln(1 - x/c)`; the
    /// result is their mean. Single-position and saturated slots carry no
    /// information and are skipped.
    pub fn count(&self) -> usize {
        let estimates: Vec<f64> = self
            .slots
            .iter()
            .filter(|slot| slot.capacity() > 1 && slot.count_zeros() > 0)
            .map(|slot| {
                let capacity = slot.capacity() as f64;
                -capacity * (1. - slot.fill_ratio()).ln()
            })
            .collect();

        if estimates.is_empty() {
            return 0;
        }
        let mean = estimates.iter().sum::<f64>() / estimates.len() as f64;

        mean.round() as usize
    }

    /// Check whether two filters can be unioned and intersected.
    pub fn is_comparable(&self, other: &Self) -> bool {
        self.hasher == other.hasher
            && self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .zip(other.slots.iter())
                .all(|(a, b)| a.capacity() == b.capacity())
    }

    /// Compute the union of two filters. Contains every key added to either.
    pub fn union(&self, other: &Self) -> Result<Self> {
        self.combine(other, Slot::union)
    }

    /// Compute the intersection of two filters.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        self.combine(other, Slot::intersection)
    }

    fn combine(&self, other: &Self, f: impl Fn(&Slot, &Slot) -> Slot) -> Result<Self> {
        if !self.is_comparable(other) {
            return Err(Error::Incompatible);
        }
        Ok(Self {
            slots: self
                .slots
                .iter()
                .zip(other.slots.iter())
                .map(|(a, b)| f(a, b))
                .collect(),
            hasher: self.hasher.clone(),
        })
    }
}

/// Return the first pair of capacities with a common factor above one.
fn shared_factor(capacities: &[usize]) -> Option<(usize, usize)> {
    fn gcd(a: usize, b: usize) -> usize {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }

    capacities.iter().enumerate().find_map(|(i, a)| {
        capacities[i + 1..]
            .iter()
            .find(|b| gcd(*a, **b) > 1)
            .map(|b| (*a, *b))
    })
}
