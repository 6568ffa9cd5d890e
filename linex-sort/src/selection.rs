// Linex - linex-sort
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Selection sort.

use crate::{SortAlgorithm, SortOutcome};

/// Repeatedly selects the minimum of the unsorted suffix. O(n²).
///
/// The minimum is rotated into place rather than swapped: the elements it
/// passes over each move one slot right and keep their relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionSort;

impl<T: Ord> SortAlgorithm<T> for SelectionSort {
    fn name(&self) -> &'static str {
        "selection"
    }

    fn sort(&mut self, data: &mut [T]) -> SortOutcome {
        selection_sort(data)
    }
}

/// Sorts `data` with [`SelectionSort`].
pub fn selection_sort<T: Ord>(data: &mut [T]) -> SortOutcome {
    sort_span!("selection", data.len());
    for i in 0..data.len().saturating_sub(1) {
        let mut smallest = i;
        for j in i + 1..data.len() {
            if data[smallest] > data[j] {
                smallest = j;
            }
        }
        data[i..=smallest].rotate_right(1);
    }
    SortOutcome::for_len(data.len())
}
