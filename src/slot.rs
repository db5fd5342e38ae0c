// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Fixed-capacity bit arrays, one per filter slot.
use std::fmt::Debug;

/// A packed array of presence flags with a capacity fixed at construction.
///
/// Bits only ever go from unset to set: there is no way to clear a position.
#[derive(Clone, PartialEq, Eq)]
pub struct Slot {
    bytes: Box<[u8]>,
    capacity: usize,
}

impl Slot {
    /// Create a slot of the given capacity, in bits, with every position unset.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            bytes: vec![0; capacity.div_ceil(8)].into_boxed_slice(),
        }
    }

    /// Number of positions in this slot.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Position a hash value maps to in this slot.
    pub fn index_of(&self, hash: u64) -> usize {
        (hash % self.capacity as u64) as usize
    }

    /// Mark a position as present.
    pub(crate) fn set(&mut self, index: usize) {
        if index >= self.capacity {
            panic!(
                "index out of bounds: the capacity is {} but the index is {}",
                self.capacity, index,
            )
        }
        self.bytes[index / 8] |= 0x01 << (index % 8);
    }

    /// Check whether a position is present.
    pub fn is_set(&self, index: usize) -> bool {
        if index >= self.capacity {
            panic!(
                "index out of bounds: the capacity is {} but the index is {}",
                self.capacity, index,
            )
        }
        let mask = 0x01 << (index % 8);

        self.bytes[index / 8] & mask == mask
    }

    /// Count the positions marked present.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the positions still absent.
    pub fn count_zeros(&self) -> usize {
        self.capacity - self.count_ones()
    }

    /// Fraction of positions marked present, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f64 {
        self.count_ones() as f64 / self.capacity as f64
    }

    pub(crate) fn union(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a | b)
    }

    pub(crate) fn intersection(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a & b)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(u8, u8) -> u8) -> Self {
        debug_assert_eq!(self.capacity, other.capacity);

        Self {
            bytes: self
                .bytes
                .iter()
                .zip(other.bytes.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
            capacity: self.capacity,
        }
    }
}

impl Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.capacity)
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "Slot({})", bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_with_capacity() {
        let slot = Slot::new(1);
        assert_eq!(1, slot.capacity());
        assert_eq!(1, slot.bytes.len());

        let slot = Slot::new(8);
        assert_eq!(8, slot.capacity());
        assert_eq!(1, slot.bytes.len());

        let slot = Slot::new(11);
        assert_eq!(11, slot.capacity());
        assert_eq!(2, slot.bytes.len());
    }

    #[test]
    fn starts_absent() {
        let slot = Slot::new(37);
        assert!((0..37).all(|i| !slot.is_set(i)));
        assert_eq!(0, slot.count_ones());
        assert_eq!(37, slot.count_zeros());
        assert_eq!(0.0, slot.fill_ratio());
    }

    #[test]
    fn set_last_position_only() {
        let mut slot = Slot::new(13);
        slot.set(12);
        for i in 0..12 {
            assert_eq!(false, slot.is_set(i));
        }
        assert_eq!(true, slot.is_set(12));
        assert_eq!(1, slot.count_ones());
    }

    #[test]
    fn set_is_idempotent() {
        let mut slot = Slot::new(17);
        slot.set(4);
        slot.set(4);
        assert_eq!(1, slot.count_ones());
        assert_eq!(16, slot.count_zeros());
    }

    #[test]
    fn index_of_reduces_modulo_capacity() {
        let slot = Slot::new(11);
        assert_eq!(0, slot.index_of(0));
        assert_eq!(10, slot.index_of(10));
        assert_eq!(0, slot.index_of(11));
        assert_eq!(1, slot.index_of(12));
        assert!(slot.index_of(u64::MAX) < 11);
    }

    #[test]
    fn single_position_slot() {
        let mut slot = Slot::new(1);
        assert_eq!(0, slot.index_of(123_456));
        slot.set(0);
        assert_eq!(1.0, slot.fill_ratio());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_set_with_correct_index() {
        Slot::new(5).set(5);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn must_get_with_correct_index() {
        Slot::new(12).is_set(12);
    }

    #[test]
    fn slot_union_and_intersection() {
        let mut a = Slot::new(6);
        a.set(0);
        a.set(3);

        let mut b = Slot::new(6);
        b.set(2);
        b.set(3);
        b.set(5);

        let union = a.union(&b);
        assert_eq!(4, union.count_ones());
        assert!([0, 2, 3, 5].iter().all(|i| union.is_set(*i)));

        let intersection = a.intersection(&b);
        assert_eq!(1, intersection.count_ones());
        assert_eq!(true, intersection.is_set(3));
    }

    #[test]
    fn debug_as_bits() {
        let mut slot = Slot::new(5);
        slot.set(1);
        slot.set(4);
        assert_eq!("Slot(01001)", format!("{:?}", slot));
    }
}
