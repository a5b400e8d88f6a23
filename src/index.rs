// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`StaticVec`](crate::StaticVec).
//!
//! `Index` and `IndexMut` forward to the live slice `[0..len)`, so they accept
//! every index form a slice does (`usize`, all range types) and panic on
//! out-of-bounds exactly like slices. For a recoverable check use
//! [`StaticVec::at`](crate::StaticVec::at); to skip the check use
//! `get_unchecked` through `Deref<Target = [T]>`.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for StaticVec<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for StaticVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
