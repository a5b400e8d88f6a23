// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Builds a [`StaticVec`](crate::StaticVec) like `vec!` builds a `Vec`.
///
/// The capacity comes from the annotated type. A list longer than the
/// capacity is rejected at compile time; the repeat form panics at runtime if
/// the count exceeds it.
///
/// ```rust
/// use static_vec::{static_vec, StaticVec};
///
/// let a: StaticVec<i32, 4> = static_vec![1, 2, 3];
/// let b: StaticVec<i32, 4> = static_vec![0; 2];
/// let c: StaticVec<i32, 4> = static_vec![];
/// assert_eq!(a.len() + b.len() + c.len(), 5);
/// ```
#[macro_export]
macro_rules! static_vec {
    () => {
        $crate::StaticVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::StaticVec::from_elem($n, &$elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::StaticVec::from_array([$($x),+])
    };
}
