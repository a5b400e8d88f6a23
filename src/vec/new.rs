// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{SetLenOnDrop, StaticVec};

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> StaticVec<T, N> {
    /// Constructs an empty vector. No element is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a vector of `count` default values.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`.
    #[inline]
    #[track_caller]
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::new();
        v.resize_default(count);
        v
    }

    /// Constructs a vector of `count` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `count > N`.
    #[inline]
    #[track_caller]
    pub fn from_elem(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.resize_with(count, || value.clone());
        v
    }

    /// Constructs a vector holding the elements of `src`, in order.
    ///
    /// `M <= N` is checked at compile time.
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let v: StaticVec<char, 8> = StaticVec::from_array(['a', 'b']);
    /// assert_eq!(v.len(), 2);
    /// assert_eq!(v.capacity(), 8);
    /// ```
    pub fn from_array<const M: usize>(src: [T; M]) -> Self {
        const { assert!(M <= N, "array length exceeds StaticVec capacity") };
        let mut v = Self::new();
        let mut guard = SetLenOnDrop::new(&mut v);
        for item in src {
            // SAFETY: at most `M <= N` values are pushed.
            unsafe { guard.push(item) };
        }
        drop(guard);
        v
    }
}
