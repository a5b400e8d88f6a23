// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `static-vec`
//!
//! A `no_std`, fixed-capacity vector that stores any element type inline.
//!
//! The core type, [`StaticVec<T, N>`], owns a `[MaybeUninit<T>; N]` buffer and
//! a live count `len ∈ 0..=N`. Only the `[0..len)` prefix holds values; the
//! remaining slots are raw storage. Elements are built in place when added and
//! dropped exactly once when removed, so `T` may be any type: non-`Copy`,
//! non-`Default`, or holding resources.
//!
//! ## When to use this crate
//!
//! - You are in a `no_std` or embedded environment, or on a hot path that must
//!   not allocate.
//! - You know a hard upper bound on the element count at compile time.
//! - You want `Vec`-like editing (push, insert, erase, resize) on that bound.
//!
//! Moving a `StaticVec` moves the whole `N`-slot buffer, not just the live
//! prefix, so prefer passing it by reference when `N` is large.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`StaticVec::<T, N>::CAPACITY == N`).
//! - Exceeding the capacity is a caller bug: [`StaticVec::push`],
//!   [`StaticVec::insert`], [`StaticVec::resize`] and friends **panic** on a
//!   full vector, before anything is modified.
//! - Bad indices and ranges panic like slices and `Vec` do. The checked
//!   accessors [`StaticVec::get`] and [`StaticVec::at`] return `Option` /
//!   [`Error`] instead.
//! - Hot paths have `unsafe` `*_unchecked` siblings whose preconditions are
//!   only `debug_assert!`ed.
//! - Fallible conversions ([`TryFrom<&[T]>`], [`StaticVec::try_from_iter`])
//!   return [`Error::CapacityExceeded`] and build nothing.
//!
//! ## Panic safety
//!
//! A panic from element code (`Clone`, `Default`, a constructor closure, or
//! `Drop`) never leaves the vector with a live count that disagrees with its
//! slots, and never drops a value twice. [`StaticVec::guarantee`] reports the
//! guarantee each family of operations gives for a given `T`.
//!
//! ## Example
//!
//! ```rust
//! use static_vec::StaticVec;
//!
//! let mut v: StaticVec<String, 4> = StaticVec::new();
//! v.push("a".to_string());
//! v.push("c".to_string());
//! v.insert(1, "b".to_string());
//! assert_eq!(v, ["a", "b", "c"]);
//!
//! v.erase(0);
//! assert_eq!(v.as_slice(), ["b", "c"]);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod macros;
mod safety;
#[cfg(test)]
mod test_support;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use safety::{Guarantee, Operation};
pub use vec::StaticVec;
