//! A Bloom filter made of several independently sized bit arrays.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives.
//!
//! # Slots
//!
//! Instead of deriving `k` positions in one bit vector, this filter owns `k`
//! separate bit arrays ("slots") of fixed, caller-chosen capacities. A key is
//! hashed once, and that hash is reduced modulo each slot's capacity:
//!
//! g<sub>i</sub>(x) = H(x) mod c<sub>i</sub>
//!
//! Capacities that are distinct primes keep the positions in different slots
//! from being correlated.
//!
//! # Rolling Hash
//!
//! The default hash is a polynomial rolling hash over the key's characters,
//! H(x) = &sum; v(x<sub>j</sub>) p<sup>j</sup> mod m, with p = 53 and
//! m = 1 000 000 009. Other hashers can be plugged in through [`KeyHasher`].
//!
//! # Example
//!
//! ```
//! use slotbloom::Filter;
//!
//! let mut filter = Filter::new(&[11, 13, 17, 19, 23, 29, 31, 37]).unwrap();
//!
//! filter.add("patrick");
//! filter.add("cody");
//!
//! assert!(filter.contains("patrick"));
//! assert!(filter.contains("cody"));
//! assert!(!filter.contains("loner"));
//!
//! assert!(Filter::new(&[0]).is_err());
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod error;
pub mod filter;
pub mod hash;
pub mod slot;

pub use error::{Error, Result};
pub use filter::{Filter, FilterBuilder, DEFAULT_CAPACITIES};
pub use hash::{CharMapping, KeyHasher, RollingHash, SipHash};
pub use slot::Slot;
