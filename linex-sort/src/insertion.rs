// Linex - linex-sort
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Insertion sort.

use crate::{SortAlgorithm, SortOutcome};

/// Grows a sorted prefix one element at a time. O(n²) worst case, O(n) on
/// sorted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionSort;

impl<T: Ord> SortAlgorithm<T> for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion"
    }

    fn sort(&mut self, data: &mut [T]) -> SortOutcome {
        insertion_sort(data)
    }
}

/// Sorts `data` with [`InsertionSort`].
///
/// For each `i`, the run of prefix elements greater than `data[i]` moves
/// one slot right and `data[i]` drops into the vacated slot.
pub fn insertion_sort<T: Ord>(data: &mut [T]) -> SortOutcome {
    sort_span!("insertion", data.len());
    for i in 1..data.len() {
        let mut insert_at = i;
        while insert_at > 0 && data[insert_at - 1] > data[i] {
            insert_at -= 1;
        }
        data[insert_at..=i].rotate_right(1);
    }
    SortOutcome::for_len(data.len())
}
