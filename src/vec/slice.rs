// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::slice;

impl<T, const N: usize> StaticVec<T, N> {
    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { slice::from_raw_parts(self.slot_ptr(0), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        // SAFETY: By invariant, all elements in `buf[..len]` are initialized,
        // and `len <= N`. We have exclusive access via `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.slot_ptr_mut(0), len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Reading `ptr.add(i)` for
    /// `i >= len` is undefined behavior, and the pointer is invalidated by any
    /// mutation of the vector.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.slot_ptr(0)
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Same rules as [`as_ptr`](Self::as_ptr). Writing past `len` does **not**
    /// change `len`; values written there are neither visible nor dropped.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.slot_ptr_mut(0)
    }
}
