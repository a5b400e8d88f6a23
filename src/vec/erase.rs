// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T, const N: usize> StaticVec<T, N> {
    /// Removes and returns the element at `index`, shifting `(index, len)` one
    /// slot to the left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }
        // SAFETY: `index < len`. After the read, slot `index` is logically
        // empty and the relocation refills it from `index + 1`; the old last
        // slot is then a stale copy no longer covered by `len`.
        unsafe {
            let value = self.read_at(index);
            self.relocate(index + 1, index, len - index - 1);
            self.len = len - 1;
            value
        }
    }

    /// Drops the element at `index`, shifting the followers left.
    ///
    /// Returns `index`, which now holds the element that followed the erased
    /// one (or equals `len()` if it was the last).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[inline]
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        let removed = self.remove(index);
        // `len` is already consistent when the destructor runs.
        drop(removed);
        index
    }

    /// Drops the elements in `range` and shifts the tail left to close the gap.
    ///
    /// Returns the start of the range, which now holds the first element after
    /// the erased ones (or equals `len()`). An empty range is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends past `len`.
    #[track_caller]
    pub fn erase_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let start = match range.start_bound() {
            Bound::Included(&i) => i,
            Bound::Excluded(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("erase range start is after usize::MAX")),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&i) => i
                .checked_add(1)
                .unwrap_or_else(|| panic!("erase range end is past usize::MAX")),
            Bound::Excluded(&i) => i,
            Bound::Unbounded => len,
        };

        if start > end {
            panic!("erase range start > end: {} > {}", start, end);
        }
        if end > len {
            panic!("erase range end {} exceeds length {}", end, len);
        }
        if start == end {
            return start;
        }

        // Hide the erased range and the tail while destructors run; the guard
        // moves the tail down and republishes `len` even if one of them panics.
        self.len = start;
        let guard = BackshiftOnDrop {
            vec: self,
            src: end,
            dst: start,
            tail: len - end,
        };
        // SAFETY: `[start, end)` is live and no longer covered by `len`.
        unsafe { guard.vec.destroy_range(start, end) };
        drop(guard);
        start
    }
}

/// Closes the gap left by [`StaticVec::erase_range`].
struct BackshiftOnDrop<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    src: usize,
    dst: usize,
    tail: usize,
}

impl<T, const N: usize> Drop for BackshiftOnDrop<'_, T, N> {
    fn drop(&mut self) {
        // SAFETY: `[src, src + tail)` is the live tail and `[dst, dst + tail)`
        // holds only dropped or moved-from slots.
        unsafe { self.vec.relocate(self.src, self.dst, self.tail) };
        self.vec.len = self.dst + self.tail;
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{DropCounter, Tracked};
    use crate::vec::StaticVec;
    use core::ops::Bound;

    #[test]
    fn test_remove_first_and_last() {
        let mut v: StaticVec<i32, 5> = [1, 2, 3, 4, 5].into();
        assert_eq!(v.remove(0), 1);
        assert_eq!(v.remove(v.len() - 1), 5);
        assert_eq!(v, [2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn test_remove_out_of_range_panics() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1]);
        v.remove(1);
    }

    #[test]
    fn test_erase_returns_position_of_follower() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
        let at = v.erase(1);
        assert_eq!(at, 1);
        assert_eq!(v[at], 3);
        let at = v.erase(1);
        assert_eq!(at, v.len());
        assert_eq!(v, [1]);
    }

    #[test]
    fn test_erase_drops_exactly_one() {
        let drops = DropCounter::new();
        let mut v: StaticVec<Tracked, 4> = StaticVec::new();
        for i in 0..4 {
            v.push(drops.track(i));
        }
        v.erase(1);
        assert_eq!(drops.count(), 1);
        let values: alloc::vec::Vec<_> = v.iter().map(|t| t.value).collect();
        assert_eq!(values, [0, 2, 3]);
        drop(v);
        assert_eq!(drops.count(), 4);
    }

    #[test]
    fn test_erase_range_middle() {
        let mut v: StaticVec<i32, 8> = StaticVec::from_array([1, 2, 3, 4, 5]);
        assert_eq!(v.erase_range(1..4), 1);
        assert_eq!(v, [1, 5]);
    }

    #[test]
    fn test_erase_range_prefix_suffix_and_full() {
        let mut v: StaticVec<i32, 6> = StaticVec::from_array([1, 2, 3, 4, 5]);
        v.erase_range(..2);
        assert_eq!(v, [3, 4, 5]);
        assert_eq!(v.erase_range(1..), 1);
        assert_eq!(v, [3]);
        v.erase_range(..);
        assert!(v.is_empty());
    }

    #[test]
    fn test_erase_range_empty_is_noop() {
        let drops = DropCounter::new();
        let mut v: StaticVec<Tracked, 4> = StaticVec::new();
        v.push(drops.track(1));
        v.push(drops.track(2));
        assert_eq!(v.erase_range(1..1), 1);
        assert_eq!(v.len(), 2);
        assert_eq!(drops.count(), 0);
    }

    #[test]
    fn test_erase_range_inclusive_end() {
        let mut v: StaticVec<i32, 8> = StaticVec::from_array([1, 2, 3, 4, 5]);
        v.erase_range(..=2);
        assert_eq!(v, [4, 5]);
    }

    #[test]
    fn test_erase_range_drop_accounting() {
        let drops = DropCounter::new();
        let mut v: StaticVec<Tracked, 8> = StaticVec::new();
        for i in 0..6 {
            v.push(drops.track(i));
        }
        v.erase_range(2..5);
        assert_eq!(drops.count(), 3);
        let values: alloc::vec::Vec<_> = v.iter().map(|t| t.value).collect();
        assert_eq!(values, [0, 1, 5]);
        drop(v);
        assert_eq!(drops.count(), 6);
    }

    #[test]
    fn test_erase_range_with_panicking_destructor_keeps_tail() {
        use alloc::rc::Rc;
        use core::cell::Cell;

        struct Fragile {
            value: i32,
            explode: bool,
            drops: Rc<Cell<usize>>,
        }
        impl Drop for Fragile {
            fn drop(&mut self) {
                self.drops.set(self.drops.get() + 1);
                if self.explode {
                    panic!("destructor failed");
                }
            }
        }

        let drops = Rc::new(Cell::new(0));
        let mut v: StaticVec<Fragile, 6> = StaticVec::new();
        for i in 0..5 {
            v.push(Fragile {
                value: i,
                explode: i == 1,
                drops: Rc::clone(&drops),
            });
        }

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            v.erase_range(1..3);
        }));
        assert!(result.is_err());
        // Both erased elements were dropped, the tail slid down.
        assert_eq!(drops.get(), 2);
        let values: alloc::vec::Vec<_> = v.iter().map(|f| f.value).collect();
        assert_eq!(values, [0, 3, 4]);
        drop(v);
        assert_eq!(drops.get(), 5);
    }

    #[test]
    #[should_panic(expected = "exceeds length")]
    fn test_erase_range_end_out_of_bounds_panics() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3, 4]);
        v.erase_range(2..10);
    }

    #[test]
    fn test_erase_range_excluded_start() {
        let mut v: StaticVec<i32, 5> = StaticVec::from_array([1, 2, 3, 4]);
        assert_eq!(v.erase_range((Bound::Excluded(0), Bound::Included(1))), 1);
        assert_eq!(v, [1, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "after usize::MAX")]
    fn test_erase_range_excluded_max_start_panics() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
        v.erase_range((Bound::Excluded(usize::MAX), Bound::Unbounded));
    }

    #[test]
    #[should_panic(expected = "past usize::MAX")]
    fn test_erase_range_included_max_end_panics() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3]);
        v.erase_range(0..=usize::MAX);
    }

    #[test]
    #[should_panic(expected = "start > end")]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_erase_range_inverted_panics() {
        let mut v: StaticVec<i32, 4> = StaticVec::from_array([1, 2, 3, 4]);
        v.erase_range(3..1);
    }
}
