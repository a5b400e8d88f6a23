// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

impl<T, const N: usize> StaticVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// Returns a reference to the inserted element. The relative order of all
    /// other elements is preserved.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or the vector is full.
    #[inline]
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace(index, || value)
    }

    /// Constructs a value with `f` and inserts it at `index`.
    ///
    /// Preconditions are checked and the value is built before any element is
    /// moved, so a panic in `f` leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or the vector is full.
    ///
    /// ```rust
    /// use static_vec::StaticVec;
    ///
    /// let mut v: StaticVec<u32, 4> = StaticVec::from_array([1, 3]);
    /// *v.emplace(1, || 2) *= 10;
    /// assert_eq!(v, [1, 20, 3]);
    /// ```
    #[track_caller]
    pub fn emplace<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }
        if len == N {
            panic!("insert on a full StaticVec (capacity is {N})");
        }
        let value = f();
        // SAFETY: both preconditions were checked above.
        unsafe { self.insert_unchecked(index, value) }
    }

    /// Inserts `value` at `index` without checking the preconditions.
    ///
    /// # Safety
    ///
    /// `index <= self.len()` and `self.len() < N`. Only checked with
    /// `debug_assert!`.
    pub unsafe fn insert_unchecked(&mut self, index: usize, value: T) -> &mut T {
        let len = self.len;
        debug_assert!(index <= len, "insertion index past len");
        debug_assert!(len < N, "insert_unchecked on a full StaticVec");

        // SAFETY: `[index, len)` is live and `[index + 1, len + 1)` is within
        // `N`. Afterwards slot `index` holds a stale bit copy, which
        // `construct_at` overwrites without dropping.
        unsafe {
            self.relocate(index, index + 1, len - index);
            self.construct_at(index, value);
        }
        self.len = len + 1;

        // SAFETY: `index < len + 1`.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }
}
