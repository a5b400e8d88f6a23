// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{SetLenOnDrop, StaticVec};

impl<T, const N: usize> Extend<T> for StaticVec<T, N> {
    /// Pushes every item of `iter`.
    ///
    /// # Panics
    ///
    /// Panics when an item does not fit; the items pushed before it stay.
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a, const N: usize> Extend<&'a T> for StaticVec<T, N> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T, const N: usize> FromIterator<T> for StaticVec<T, N> {
    /// Collects into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields more than `N` items. Use
    /// [`StaticVec::try_from_iter`] for a fallible version.
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Appends clones of every element of `src`.
    ///
    /// The capacity is checked up front. If a clone panics, the clones made so
    /// far stay in the vector.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > self.spare_capacity()`.
    #[track_caller]
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        let spare = N - self.len;
        if src.len() > spare {
            panic!(
                "extend_from_slice of {} elements exceeds spare capacity {}",
                src.len(),
                spare
            );
        }
        let mut guard = SetLenOnDrop::new(self);
        for item in src {
            // SAFETY: `src.len() <= spare` was checked above.
            unsafe { guard.push(item.clone()) };
        }
    }
}
