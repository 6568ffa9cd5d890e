// Linex - linex-sort
// Module: Shared sorting contract
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The [`SortAlgorithm`] trait and its result type.

/// What a sort call found.
///
/// Empty input is not an error: the call is a no-op that says so.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum SortOutcome {
    /// The slice had no elements; nothing was touched.
    Empty,
    /// The slice is now in ascending order.
    Sorted,
}

impl SortOutcome {
    pub(crate) const fn for_len(len: usize) -> Self {
        if len == 0 { Self::Empty } else { Self::Sorted }
    }

    /// `true` for [`SortOutcome::Empty`].
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// An in-place ascending sort over `T`.
///
/// Each implementation states its own bounds on `T`; merge sort also needs
/// `Clone`. `sort` takes `&mut self` since quick sort advances its generator.
pub trait SortAlgorithm<T> {
    /// Short lowercase name, e.g. `"merge"`.
    fn name(&self) -> &'static str;

    /// Sorts `data` ascending in place.
    fn sort(&mut self, data: &mut [T]) -> SortOutcome;
}

/// `true` when `data` is non-decreasing.
#[must_use]
pub fn is_sorted<T: PartialOrd>(data: &[T]) -> bool {
    data.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_for_len() {
        assert_eq!(SortOutcome::for_len(0), SortOutcome::Empty);
        assert_eq!(SortOutcome::for_len(1), SortOutcome::Sorted);
        assert!(SortOutcome::Empty.is_empty());
        assert!(!SortOutcome::Sorted.is_empty());
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }
}
