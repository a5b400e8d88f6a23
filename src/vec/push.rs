// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends `value` at the back.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, value: T) {
        if self.len == N {
            panic!("push on a full StaticVec (capacity is {N})");
        }
        // SAFETY: `len < N` was just checked.
        unsafe { self.push_unchecked(value) }
    }

    /// Same as [`push`](Self::push).
    #[inline]
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        self.push(value);
    }

    /// Appends `value` without checking the capacity.
    ///
    /// # Safety
    ///
    /// `self.len() < N`. Only checked with `debug_assert!`.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < N, "push_unchecked on a full StaticVec");
        let len = self.len;
        // SAFETY: `len < N` per the caller, and slot `len` is past every live value.
        unsafe { self.construct_at(len, value) };
        self.len = len + 1;
    }

    /// Constructs a value with `f` directly at the back and returns a
    /// reference to it.
    ///
    /// The capacity is checked before `f` runs, and a panic in `f` leaves the
    /// vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[inline]
    #[track_caller]
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            panic!("emplace_back on a full StaticVec (capacity is {N})");
        }
        let value = f();
        let len = self.len;
        // SAFETY: `len < N` was checked and `f` cannot change `len`.
        unsafe {
            self.push_unchecked(value);
            self.as_mut_slice().get_unchecked_mut(len)
        }
    }
}
