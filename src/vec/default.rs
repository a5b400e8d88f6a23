// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> Default for StaticVec<T, N> {
    /// Returns an empty vector; no element is constructed.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
