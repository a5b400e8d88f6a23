// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StaticVec`.
//!
//! Only checked access and fallible conversions report errors. Capacity and
//! index violations on the ordinary mutators are programming errors and panic.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by checked operations on [`StaticVec`](crate::StaticVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// [`at`](crate::StaticVec::at) was given an index `>= len`.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// The length at the time of the call.
        len: usize,
    },
    /// A fallible conversion had more elements than the capacity.
    CapacityExceeded {
        /// The fixed capacity `N`.
        capacity: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::CapacityExceeded { capacity } => write!(f, "capacity {capacity} exceeded"),
        }
    }
}

impl CoreError for Error {}
