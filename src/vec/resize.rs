// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{SetLenOnDrop, StaticVec};

// Core imports
use core::mem;

impl<T, const N: usize> StaticVec<T, N> {
    /// Drops every element and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Drops `[count, len)` if `count < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, count: usize) {
        if count >= self.len {
            return;
        }
        let old_len = mem::replace(&mut self.len, count);
        // SAFETY: `[count, old_len)` was live and is no longer covered by `len`,
        // so a panicking destructor cannot lead to a second drop.
        unsafe { self.destroy_range(count, old_len) }
    }

    /// Resizes to `count`, filling new slots with clones of `value`.
    ///
    /// Shrinking drops the surplus elements. If a clone panics, `len` covers
    /// exactly the elements built so far.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`.
    #[track_caller]
    pub fn resize(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        if count <= self.len {
            self.truncate(count);
            return;
        }
        check_grow::<N>(count);

        let mut guard = SetLenOnDrop::new(self);
        while guard.len() + 1 < count {
            // SAFETY: `guard.len() < count - 1 < N`.
            unsafe { guard.push(value.clone()) };
        }
        // SAFETY: `guard.len() == count - 1 < N`.
        unsafe { guard.push(value) };
    }

    /// Resizes to `count`, filling new slots with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`.
    #[inline]
    #[track_caller]
    pub fn resize_default(&mut self, count: usize)
    where
        T: Default,
    {
        self.resize_with(count, T::default);
    }

    /// Resizes to `count`, filling new slots with values returned by `f`.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`.
    #[track_caller]
    pub fn resize_with<F>(&mut self, count: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if count <= self.len {
            self.truncate(count);
            return;
        }
        check_grow::<N>(count);

        let mut guard = SetLenOnDrop::new(self);
        while guard.len() < count {
            let value = f();
            // SAFETY: `guard.len() < count <= N`.
            unsafe { guard.push(value) };
        }
    }
}

#[inline]
#[track_caller]
fn check_grow<const N: usize>(count: usize) {
    if count > N {
        panic!("resize length (is {count}) should be <= capacity (is {N})");
    }
}
