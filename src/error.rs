// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Errors returned when configuring or combining filters.
use thiserror::Error;

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors. Adding and querying keys never fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The capacity sequence was empty.
    #[error("a filter needs at least one slot")]
    NoSlots,

    /// A slot was configured with no positions.
    #[error("slot {index} has a capacity of zero")]
    ZeroCapacity {
        /// Position of the offending capacity.
        index: usize,
    },

    /// The rolling hash base is too small to separate characters.
    #[error("rolling hash base must be at least 2, got {base}")]
    InvalidBase {
        /// The rejected base.
        base: u64,
    },

    /// The rolling hash modulus is below 2.
    #[error("rolling hash modulus {modulus} is out of range")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: u64,
    },

    /// Two filters cannot be combined.
    #[error("filters have different slot capacities or hashers")]
    Incompatible,
}
