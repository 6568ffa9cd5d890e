// Linex - linex-sort
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Randomized quick sort.
//!
//! Each partition picks its pivot uniformly from the current range, moves
//! it to the last slot, and sweeps left to right gathering every element
//! `<=` the pivot at the front. The pivot then lands between the two parts
//! and never moves again.
//!
//! The recursion descends into the smaller part and loops on the larger
//! one, so stack depth stays O(log n) even when the partitions are skewed.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{SortAlgorithm, SortOutcome};

/// Quick sort with a random pivot per partition. Expected O(n log n),
/// worst case O(n²). Not stable.
///
/// The generator is owned by the sorter: two sorters built with the same
/// seed make the same pivot choices.
///
/// # Examples
///
/// ```
/// use linex_sort::{QuickSort, SortAlgorithm, SortOutcome};
///
/// let mut sorter = QuickSort::with_seed(7);
/// let mut data = [10, 12, 6, 11, 5];
/// assert_eq!(sorter.sort(&mut data), SortOutcome::Sorted);
/// assert_eq!(data, [5, 6, 10, 11, 12]);
/// ```
#[derive(Debug, Clone)]
pub struct QuickSort {
    rng: StdRng,
}

impl QuickSort {
    /// Creates a sorter whose pivot sequence is fixed by `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a sorter seeded from the operating system.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    fn sort_range<T: Ord>(&mut self, mut data: &mut [T]) {
        while data.len() > 1 {
            let pivot = self.partition(data);
            let (left, rest) = core::mem::take(&mut data).split_at_mut(pivot);
            let right = &mut rest[1..];
            if left.len() < right.len() {
                self.sort_range(left);
                data = right;
            } else {
                self.sort_range(right);
                data = left;
            }
        }
    }

    /// Partitions `data` around a random pivot and returns its final index.
    fn partition<T: Ord>(&mut self, data: &mut [T]) -> usize {
        let high = data.len() - 1;
        let chosen = self.rng.random_range(0..=high);
        #[cfg(feature = "tracing")]
        ::tracing::trace!(pivot = chosen, len = data.len(), "pivot chosen");
        data.swap(chosen, high);

        let mut boundary = 0;
        for j in 0..high {
            if data[j] <= data[high] {
                data.swap(boundary, j);
                boundary += 1;
            }
        }
        data.swap(boundary, high);
        boundary
    }
}

#[cfg(feature = "std")]
impl Default for QuickSort {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> SortAlgorithm<T> for QuickSort {
    fn name(&self) -> &'static str {
        "quick"
    }

    fn sort(&mut self, data: &mut [T]) -> SortOutcome {
        sort_span!("quick", data.len());
        self.sort_range(data);
        SortOutcome::for_len(data.len())
    }
}

/// Sorts `data` with a [`QuickSort`] seeded by `seed`.
pub fn quick_sort_with_seed<T: Ord>(data: &mut [T], seed: u64) -> SortOutcome {
    QuickSort::with_seed(seed).sort(data)
}

/// Sorts `data` with an OS-seeded [`QuickSort`].
#[cfg(feature = "std")]
pub fn quick_sort<T: Ord>(data: &mut [T]) -> SortOutcome {
    QuickSort::new().sort(data)
}
