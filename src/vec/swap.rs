// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{cmp::Ordering, mem};

impl<T, const N: usize> StaticVec<T, N> {
    /// Exchanges the contents of `self` and `other`.
    ///
    /// The common prefix is swapped element by element, then the longer side's
    /// tail is moved into the shorter side's free slots, then the lengths are
    /// swapped. Costs `O(max(len, other.len))`, not `O(N)` like
    /// [`core::mem::swap`] on the whole buffers.
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut a: StaticVec<u8, 4> = StaticVec::from_array([1, 2]);
    /// let mut b: StaticVec<u8, 4> = StaticVec::from_array([9, 8, 7]);
    /// a.swap(&mut b);
    /// assert_eq!(a, [9, 8, 7]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    pub fn swap(&mut self, other: &mut Self) {
        let self_len = self.len;
        let other_len = other.len;
        let common = self_len.min(other_len);

        self.as_mut_slice()[..common].swap_with_slice(&mut other.as_mut_slice()[..common]);

        // SAFETY: the tail `[common, longer)` is live on the longer side and
        // empty on the shorter side. Nothing between here and the length swap
        // can panic.
        match self_len.cmp(&other_len) {
            Ordering::Less => unsafe { other.relocate_to(self, common, other_len) },
            Ordering::Greater => unsafe { self.relocate_to(other, common, self_len) },
            Ordering::Equal => {}
        }

        mem::swap(&mut self.len, &mut other.len);
    }

    /// Moves the contents out, leaving `self` empty.
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut a: StaticVec<u8, 4> = StaticVec::from_array([1, 2]);
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b, [1, 2]);
    /// ```
    #[inline]
    #[must_use = "the moved-out contents are dropped if unused; use `clear` instead"]
    pub fn take(&mut self) -> Self {
        let mut out = Self::new();
        self.swap(&mut out);
        out
    }
}
