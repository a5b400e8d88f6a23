// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Slot-level lifetime primitives. These are the only places where a slot of
// `buf` gains or loses a live value. None of them touch `len`: callers publish
// the new length once the slots agree with it.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::ptr;

impl<T, const N: usize> StaticVec<T, N> {
    /// Pointer to slot `i`. Valid for `i <= N`; says nothing about initialization.
    #[inline]
    pub(crate) fn slot_ptr(&self, i: usize) -> *const T {
        debug_assert!(i <= N);
        self.buf.as_ptr().cast::<T>().wrapping_add(i)
    }

    #[inline]
    pub(crate) fn slot_ptr_mut(&mut self, i: usize) -> *mut T {
        debug_assert!(i <= N);
        self.buf.as_mut_ptr().cast::<T>().wrapping_add(i)
    }

    /// Writes `value` into slot `i`.
    ///
    /// # Safety
    ///
    /// `i < N`, and slot `i` holds no live value (it would be overwritten
    /// without being dropped).
    #[inline]
    pub(crate) unsafe fn construct_at(&mut self, i: usize, value: T) {
        debug_assert!(i < N, "construct_at({i}) past capacity {N}");
        // SAFETY: the caller guarantees `i < N`.
        let slot = unsafe { self.buf.get_unchecked_mut(i) };
        slot.write(value);
    }

    /// Moves the value out of slot `i`, leaving the slot logically empty.
    ///
    /// # Safety
    ///
    /// Slot `i` holds a live value, and the caller stops treating it as live.
    #[inline]
    pub(crate) unsafe fn read_at(&self, i: usize) -> T {
        debug_assert!(i < N);
        // SAFETY: the caller guarantees slot `i` is initialized.
        unsafe { self.buf.get_unchecked(i).assume_init_read() }
    }

    /// Drops the values in slots `start..end`.
    ///
    /// Does nothing for types without drop glue. If a destructor panics the
    /// remaining values in the range are still dropped while unwinding.
    ///
    /// # Safety
    ///
    /// `start <= end <= N`, every slot in the range holds a live value, and the
    /// caller stops treating them as live.
    #[inline]
    pub(crate) unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= N);
        if !Self::NEEDS_DROP {
            return;
        }
        let first = self.slot_ptr_mut(start);
        // SAFETY: the range is in bounds and initialized per the caller.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start)) }
    }

    /// Moves `count` values from slots `src..` to slots `dst..`. The ranges may
    /// overlap.
    ///
    /// # Safety
    ///
    /// Both ranges lie within `0..N` and the source slots are live. Afterwards
    /// the destination slots own the values; source slots outside the
    /// destination range are logically empty. Live values previously in the
    /// destination are overwritten without being dropped.
    #[inline]
    pub(crate) unsafe fn relocate(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(src + count <= N && dst + count <= N);
        let base = self.slot_ptr_mut(0);
        // SAFETY: both ranges are inside `buf` per the caller; `ptr::copy`
        // handles the overlap.
        unsafe { ptr::copy(base.add(src), base.add(dst), count) }
    }

    /// Moves the values in slots `start..end` into the same slots of `other`.
    ///
    /// # Safety
    ///
    /// `start <= end <= N`, the slots are live in `self` and empty in `other`.
    /// Afterwards they are live in `other` and empty in `self`.
    #[inline]
    pub(crate) unsafe fn relocate_to(&mut self, other: &mut Self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= N);
        let src = self.slot_ptr(start);
        let dst = other.slot_ptr_mut(start);
        // SAFETY: distinct buffers, both ranges in bounds per the caller.
        unsafe { ptr::copy_nonoverlapping(src, dst, end - start) }
    }
}

/// Appends values past `len` and publishes the length when dropped.
///
/// While values are being produced by user code (`Clone`, `Default`, a
/// closure) the vector's `len` is left alone; if that code panics, the guard
/// publishes exactly the slots that were filled.
pub(crate) struct SetLenOnDrop<'a, T, const N: usize> {
    vec: &'a mut StaticVec<T, N>,
    local_len: usize,
}

impl<'a, T, const N: usize> SetLenOnDrop<'a, T, N> {
    #[inline]
    pub(crate) fn new(vec: &'a mut StaticVec<T, N>) -> Self {
        let local_len = vec.len;
        Self { vec, local_len }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.local_len
    }

    /// # Safety
    ///
    /// `self.len() < N`.
    #[inline]
    pub(crate) unsafe fn push(&mut self, value: T) {
        // SAFETY: slot `local_len` is past every live value and below `N`.
        unsafe { self.vec.construct_at(self.local_len, value) };
        self.local_len += 1;
    }
}

impl<T, const N: usize> Drop for SetLenOnDrop<'_, T, N> {
    #[inline]
    fn drop(&mut self) {
        self.vec.len = self.local_len;
    }
}
