// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Replaces the contents of `self` with those of `src`.
    ///
    /// The new contents are swapped in first; the displaced old contents are
    /// dropped afterwards, so `self` already holds the new elements if one of
    /// the old destructors panics.
    #[inline]
    pub fn assign(&mut self, mut src: Self) {
        self.swap(&mut src);
        drop(src);
    }

    /// Replaces the contents of `self` with clones of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > N`. A panicking clone leaves `self` unchanged.
    #[track_caller]
    pub fn assign_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        let mut tmp = Self::new();
        tmp.extend_from_slice(src);
        self.assign(tmp);
    }
}
