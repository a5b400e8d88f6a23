// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element types that count their drops, shared by the unit tests.

use alloc::rc::Rc;
use core::cell::Cell;

#[derive(Clone, Default)]
pub(crate) struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            drops: Rc::clone(&self.0),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }
}

#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) value: i32,
    drops: Rc<Cell<usize>>,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            drops: Rc::clone(&self.drops),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Clones successfully `budget` times across all copies, then panics.
#[derive(Debug)]
pub(crate) struct CloneBomb {
    pub(crate) value: i32,
    budget: Rc<Cell<usize>>,
}

impl CloneBomb {
    pub(crate) fn new(value: i32, budget: usize) -> Self {
        Self {
            value,
            budget: Rc::new(Cell::new(budget)),
        }
    }
}

impl Clone for CloneBomb {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(left - 1);
        Self {
            value: self.value,
            budget: Rc::clone(&self.budget),
        }
    }
}
