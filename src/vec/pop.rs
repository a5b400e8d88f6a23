// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Pops the last element if any.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // SAFETY: the vector is non-empty.
            Some(unsafe { self.pop_unchecked() })
        }
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        match self.pop() {
            Some(value) => value,
            None => panic!("pop_back() called on an empty StaticVec"),
        }
    }

    /// Removes and returns the last element without checking for emptiness.
    ///
    /// # Safety
    ///
    /// `!self.is_empty()`. Only checked with `debug_assert!`.
    #[inline]
    pub unsafe fn pop_unchecked(&mut self) -> T {
        debug_assert!(self.len > 0, "pop_unchecked on an empty StaticVec");
        self.len -= 1;
        // SAFETY: before the decrement slot `len` was the last live value; it is
        // no longer covered by `len`, so ownership moves to the caller.
        unsafe { self.read_at(self.len) }
    }
}
