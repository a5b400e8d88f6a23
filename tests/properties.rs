// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Random operation sequences checked against `Vec` as a model.

use proptest::prelude::*;
use static_vec::StaticVec;
use std::cell::Cell;
use std::rc::Rc;

const CAP: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Erase(usize),
    EraseRange(usize, usize),
    Truncate(usize),
    Resize(usize, i32),
    Clear,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (0..=CAP, any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        (0..CAP).prop_map(Op::Erase),
        (0..=CAP, 0..=CAP).prop_map(|(a, b)| Op::EraseRange(a.min(b), a.max(b))),
        (0..=CAP).prop_map(Op::Truncate),
        (0..=CAP, any::<i32>()).prop_map(|(n, x)| Op::Resize(n, x)),
        Just(Op::Clear),
    ]
}

/// Applies `op` to both sides, skipping ops whose preconditions do not hold.
fn apply(v: &mut StaticVec<i32, CAP>, model: &mut Vec<i32>, op: &Op) {
    match *op {
        Op::Push(x) if model.len() < CAP => {
            v.push(x);
            model.push(x);
        }
        Op::Pop => assert_eq!(v.pop(), model.pop()),
        Op::Insert(i, x) if i <= model.len() && model.len() < CAP => {
            assert_eq!(*v.insert(i, x), x);
            model.insert(i, x);
        }
        Op::Erase(i) if i < model.len() => {
            assert_eq!(v.erase(i), i);
            model.remove(i);
        }
        Op::EraseRange(a, b) if b <= model.len() => {
            assert_eq!(v.erase_range(a..b), a);
            drop(model.drain(a..b));
        }
        Op::Truncate(n) => {
            v.truncate(n);
            model.truncate(n);
        }
        Op::Resize(n, x) => {
            v.resize(n, x);
            model.resize(n, x);
        }
        Op::Clear => {
            v.clear();
            model.clear();
        }
        _ => {}
    }
}

fn build(items: &[i32]) -> StaticVec<i32, CAP> {
    items.iter().copied().collect()
}

struct Counted(Rc<Cell<usize>>);

impl Drop for Counted {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

proptest! {
    #[test]
    fn ops_match_vec_model(ops in prop::collection::vec(arb_op(), 0..64)) {
        let mut v: StaticVec<i32, CAP> = StaticVec::new();
        let mut model = Vec::new();
        for op in &ops {
            apply(&mut v, &mut model, op);
            prop_assert!(v.len() <= CAP);
            prop_assert_eq!(v.as_slice(), model.as_slice());
            prop_assert_eq!(v.is_full(), model.len() == CAP);
        }
    }

    #[test]
    fn insert_then_erase_restores(
        items in prop::collection::vec(any::<i32>(), 0..CAP),
        pos in 0usize..CAP,
        x in any::<i32>(),
    ) {
        let pos = pos % (items.len() + 1);
        let mut v = build(&items);
        v.insert(pos, x);
        prop_assert_eq!(v[pos], x);
        prop_assert_eq!(v.len(), items.len() + 1);
        v.erase(pos);
        prop_assert_eq!(v.as_slice(), items.as_slice());
    }

    #[test]
    fn swap_exchanges_contents(
        a in prop::collection::vec(any::<i32>(), 0..=CAP),
        b in prop::collection::vec(any::<i32>(), 0..=CAP),
    ) {
        let mut va = build(&a);
        let mut vb = build(&b);
        va.swap(&mut vb);
        prop_assert_eq!(va.as_slice(), b.as_slice());
        prop_assert_eq!(vb.as_slice(), a.as_slice());
    }

    #[test]
    fn comparisons_follow_slices(
        a in prop::collection::vec(0i32..4, 0..=CAP),
        b in prop::collection::vec(0i32..4, 0..=CAP),
    ) {
        let va = build(&a);
        let vb = build(&b);
        prop_assert_eq!(va == vb, a == b);
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
        prop_assert_eq!(va.partial_cmp(&vb), a.partial_cmp(&b));
    }

    #[test]
    fn every_element_dropped_exactly_once(
        n in 0usize..=CAP,
        erase_at in 0usize..CAP,
        keep in 0usize..=CAP,
    ) {
        let drops = Rc::new(Cell::new(0));
        let mut v: StaticVec<Counted, CAP> = StaticVec::new();
        for _ in 0..n {
            v.push(Counted(Rc::clone(&drops)));
        }
        let mut expected = 0;
        if erase_at < v.len() {
            v.erase(erase_at);
            expected += 1;
        }
        prop_assert_eq!(drops.get(), expected);
        expected += v.len().saturating_sub(keep);
        v.truncate(keep);
        prop_assert_eq!(drops.get(), expected);
        let mut other = StaticVec::new();
        v.swap(&mut other);
        prop_assert_eq!(drops.get(), expected);
        drop(v);
        drop(other);
        prop_assert_eq!(drops.get(), n);
    }
}
