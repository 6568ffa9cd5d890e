// Linex - linex-sort
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Bubble sort.

use crate::{SortAlgorithm, SortOutcome};

/// Adjacent-swap sort. O(n²) comparisons on every input; there is no
/// early exit for an already sorted slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl<T: Ord> SortAlgorithm<T> for BubbleSort {
    fn name(&self) -> &'static str {
        "bubble"
    }

    fn sort(&mut self, data: &mut [T]) -> SortOutcome {
        bubble_sort(data)
    }
}

/// Sorts `data` with [`BubbleSort`].
pub fn bubble_sort<T: Ord>(data: &mut [T]) -> SortOutcome {
    sort_span!("bubble", data.len());
    // Each pass settles the largest remaining element at `boundary`.
    for boundary in (1..data.len()).rev() {
        for j in 0..boundary {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
            }
        }
    }
    SortOutcome::for_len(data.len())
}
