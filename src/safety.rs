// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Failure guarantees as a function of the element type.
//!
//! Moving a value never fails in Rust, so the only element operations that can
//! interrupt a mutator are user code: `Clone::clone`, `Default::default`, the
//! closures passed to `emplace*` / `resize_with`, and `Drop::drop`. Whether a
//! type has drop glue is known at compile time and decides which guarantee the
//! drop-running operations can give. The same flag selects the fast path that
//! skips drop loops entirely.

// Crate imports
use crate::vec::StaticVec;

// Core imports
use core::mem;

/// What a caller can rely on if an operation is interrupted by a panic in
/// element code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guarantee {
    /// No element code runs that could panic; the operation always completes.
    NoFail,
    /// Either the operation completes, or the vector is left exactly as it was.
    Strong,
    /// The vector stays valid: `len` covers exactly the live elements and no
    /// element is dropped twice, but the contents may be partially updated.
    Basic,
}

/// Operation families for [`StaticVec::guarantee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Operation {
    /// `push`, `push_back`, `pop`, `pop_back`, `take`.
    Push,
    /// `emplace_back`, `emplace`, `insert`.
    Emplace,
    /// `erase`, `erase_range`.
    Erase,
    /// `truncate`, `clear`.
    Truncate,
    /// `resize`, `resize_default`, `resize_with`, `extend_from_slice`.
    Resize,
    /// `swap`.
    Swap,
    /// `assign`.
    Assign,
    /// `clone_from`, `assign_from_slice`.
    CloneFrom,
}

impl<T, const N: usize> StaticVec<T, N> {
    /// `true` if dropping a `T` runs code. When `false`, truncation, clearing
    /// and erasure never run destructors.
    pub const NEEDS_DROP: bool = mem::needs_drop::<T>();

    /// Reports the failure guarantee of `op` for this element type.
    ///
    /// Precondition panics (full vector, bad index) are not counted: they fire
    /// before anything is modified.
    ///
    /// ```rust
    /// use static_vec::{Guarantee, Operation, StaticVec};
    ///
    /// assert_eq!(StaticVec::<u32, 4>::guarantee(Operation::Erase), Guarantee::NoFail);
    /// assert_eq!(StaticVec::<String, 4>::guarantee(Operation::Erase), Guarantee::Basic);
    /// assert_eq!(StaticVec::<String, 4>::guarantee(Operation::Emplace), Guarantee::Strong);
    /// ```
    pub const fn guarantee(op: Operation) -> Guarantee {
        match op {
            Operation::Push | Operation::Swap => Guarantee::NoFail,
            // The new value is built before any element moves.
            Operation::Emplace => Guarantee::Strong,
            Operation::Erase | Operation::Truncate | Operation::Assign => {
                if Self::NEEDS_DROP {
                    Guarantee::Basic
                } else {
                    Guarantee::NoFail
                }
            }
            Operation::Resize => Guarantee::Basic,
            // The copy is built in a temporary; only dropping the old contents
            // can fail afterwards.
            Operation::CloneFrom => {
                if Self::NEEDS_DROP {
                    Guarantee::Basic
                } else {
                    Guarantee::Strong
                }
            }
        }
    }
}
