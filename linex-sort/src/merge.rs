// Linex - linex-sort
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Top-down merge sort.

use alloc::vec::Vec;

use crate::{SortAlgorithm, SortOutcome};

/// Recursive merge sort. O(n log n) time; each merge copies its two halves
/// into temporary buffers.
///
/// Stable: on ties the element from the left half is taken first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSort;

impl<T: Ord + Clone> SortAlgorithm<T> for MergeSort {
    fn name(&self) -> &'static str {
        "merge"
    }

    fn sort(&mut self, data: &mut [T]) -> SortOutcome {
        merge_sort(data)
    }
}

/// Sorts `data` with [`MergeSort`].
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) -> SortOutcome {
    sort_span!("merge", data.len());
    sort_range(data);
    SortOutcome::for_len(data.len())
}

fn sort_range<T: Ord + Clone>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    // The left half takes the middle element of an odd-length range.
    let mid = data.len().div_ceil(2);
    sort_range(&mut data[..mid]);
    sort_range(&mut data[mid..]);
    merge(data, mid);
}

fn merge<T: Ord + Clone>(data: &mut [T], mid: usize) {
    let left: Vec<T> = data[..mid].to_vec();
    let right: Vec<T> = data[mid..].to_vec();
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    for slot in data.iter_mut() {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, _) => false,
        };
        let next = if take_left { left.next() } else { right.next() };
        if let Some(value) = next {
            *slot = value;
        }
    }
}
