// This file is part of static-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StaticVec};

impl<T, const N: usize> From<[T; N]> for StaticVec<T, N> {
    fn from(src: [T; N]) -> Self {
        Self::from_array(src)
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for StaticVec<T, N> {
    type Error = Error;

    /// Clones `src` into a new vector, or returns
    /// [`Error::CapacityExceeded`] if it does not fit.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        if src.len() > N {
            return Err(Error::CapacityExceeded { capacity: N });
        }
        let mut v = Self::new();
        v.extend_from_slice(src);
        Ok(v)
    }
}

impl<T, const N: usize> StaticVec<T, N> {
    /// Collects an iterator, failing instead of panicking when it yields more
    /// than `N` items.
    ///
    /// At most `N + 1` items are pulled from the iterator; on error the items
    /// collected so far are dropped.
    pub fn try_from_iter<I>(iter: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        let mut v = Self::new();
        for item in iter {
            if v.is_full() {
                return Err(Error::CapacityExceeded { capacity: N });
            }
            // SAFETY: `len < N` was just checked.
            unsafe { v.push_unchecked(item) };
        }
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::StaticVec;
    use crate::Error;

    #[test]
    fn test_from_full_array() {
        let v: StaticVec<u8, 3> = [7, 8, 9].into();
        assert!(v.is_full());
        assert_eq!(v, [7, 8, 9]);
    }

    #[test]
    fn test_try_from_slice() {
        let v = <StaticVec<u8, 4>>::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v, [1, 2, 3]);

        let err = <StaticVec<u8, 2>>::try_from(&[1, 2, 3][..]).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn test_try_from_iter() {
        let v = <StaticVec<u8, 3>>::try_from_iter([10, 11, 12]).unwrap();
        assert_eq!(v, [10, 11, 12]);

        let err = <StaticVec<u8, 2>>::try_from_iter([1, 2, 3]).unwrap_err();
        assert_eq!(err, Error::CapacityExceeded { capacity: 2 });
    }

    #[test]
    fn test_try_from_iter_stops_pulling_after_overflow() {
        let mut pulled = 0;
        let res = <StaticVec<u32, 2>>::try_from_iter((0..).inspect(|_| pulled += 1));
        assert!(res.is_err());
        assert_eq!(pulled, 3);
    }
}
