// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StaticVec` type and its inherent API.
//!
//! `StaticVec<T, N>` is a fixed-capacity vector for arbitrary element types.
//! It stores elements inline in a `[MaybeUninit<T>; N]` buffer and tracks how
//! many leading slots are initialized. Methods mirror `Vec` semantics where they
//! make sense; exceeding the capacity is a caller bug and panics.
//!
//! No heap allocations are performed.

mod assign;
mod default;
mod erase;
mod extend;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod raw;
mod resize;
mod slice;
mod swap;

pub(crate) use raw::SetLenOnDrop;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Deref, DerefMut},
};

/// A fixed-capacity vector whose elements live inline.
///
/// `StaticVec<T, N>` owns up to `N` values of `T` inside the struct itself. It
/// never allocates, never reallocates, and never grows past `N`.
///
/// # Layout and invariants
///
/// - `buf` is `N` uninitialized, correctly aligned slots for `T`;
/// - `len` counts the leading slots that hold live values, `0 <= len <= N`;
/// - slots `buf[len..]` never hold a live value.
///
/// Every method that constructs or drops an element does so through the slot
/// primitives in `vec/raw.rs`, and publishes the new `len` only once the slots
/// agree with it.
///
/// # Preconditions vs errors
///
/// Pushing onto a full vector, inserting or removing at a bad index, or popping
/// from an empty vector are programming errors and **panic**. Where a hot path
/// wants to skip the check, an `unsafe` `*_unchecked` sibling exists whose
/// check is a `debug_assert!` only.
///
/// The only recoverable errors are [`at`](StaticVec::at) /
/// [`at_mut`](StaticVec::at_mut), which return [`Error::OutOfRange`], and the
/// fallible conversions that return [`Error::CapacityExceeded`].
///
/// # Panic safety
///
/// Moving a value in Rust cannot fail, so `insert`, `erase`, and `swap` never
/// stop halfway. User code that can panic (`Clone`, `Default`, closures passed
/// to `emplace`/`resize_with`, `Drop`) leaves the vector in a valid state with
/// `len` covering exactly the live elements. See [`StaticVec::guarantee`] for
/// the per-operation guarantee.
///
/// # Invalidation
///
/// References into the vector are tied to a borrow of it, so the compiler
/// rejects using them across a mutation. Indices are plain `usize` values and
/// must be re-derived by the caller after an insert, erase, resize, or swap.
///
/// # Examples
///
/// ```rust
/// use static_vec::StaticVec;
///
/// let mut v: StaticVec<String, 4> = StaticVec::new();
/// v.push("a".to_string());
/// v.push("c".to_string());
/// v.insert(1, "b".to_string());
/// assert_eq!(v, ["a", "b", "c"]);
/// assert_eq!(v.erase(0), 0);
/// assert_eq!(v, ["b", "c"]);
/// ```
pub struct StaticVec<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](Self::capacity).
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the number of live elements (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked access: returns [`Error::OutOfRange`] when `i >= len`.
    ///
    /// ```rust
    /// use static_vec::{Error, StaticVec};
    ///
    /// let v: StaticVec<u8, 4> = StaticVec::from_array([1, 2]);
    /// assert_eq!(v.at(1), Ok(&2));
    /// assert_eq!(v.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(i)
            .ok_or(Error::OutOfRange { index: i, len })
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(i)
            .ok_or(Error::OutOfRange { index: i, len })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(x) => x,
            None => panic!("front() called on an empty StaticVec"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(x) => x,
            None => panic!("front_mut() called on an empty StaticVec"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(x) => x,
            None => panic!("back() called on an empty StaticVec"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(x) => x,
            None => panic!("back_mut() called on an empty StaticVec"),
        }
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`. Use `.rev()` for reverse order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns `true` if the vector contains `x`.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T, const N: usize> Drop for StaticVec<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone, const N: usize> Clone for StaticVec<T, N> {
    fn clone(&self) -> Self {
        let mut out = Self::new();
        out.extend_from_slice(self.as_slice());
        out
    }

    /// Clones `source` into a temporary first, so a panicking `T::clone`
    /// leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        self.assign(source.clone());
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StaticVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for StaticVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_slice() == other.as_slice()
    }
}
impl<T: Eq, const N: usize> Eq for StaticVec<T, N> {}

impl<T, U, const N: usize> PartialEq<[U]> for StaticVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}
impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for StaticVec<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; M]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T: Ord, const N: usize> Ord for StaticVec<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for StaticVec<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for StaticVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for StaticVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StaticVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StaticVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StaticVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StaticVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StaticVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
