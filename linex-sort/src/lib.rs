// Linex - linex-sort
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! In-place sorting algorithms for the Linex library.
//!
//! Five classical sorts over `&mut [T]`, ascending by `Ord`:
//!
//! | algorithm          | time (avg)   | extra space | stable |
//! |--------------------|--------------|-------------|--------|
//! | [`BubbleSort`]     | O(n²)        | O(1)        | yes    |
//! | [`InsertionSort`]  | O(n²)        | O(1)        | yes    |
//! | [`SelectionSort`]  | O(n²)        | O(1)        | yes    |
//! | [`MergeSort`]      | O(n log n)   | O(n)        | yes    |
//! | [`QuickSort`]      | O(n log n)   | O(log n)    | no     |
//!
//! Every algorithm implements [`SortAlgorithm`] and has a free-function
//! form. Empty input is a no-op reported as [`SortOutcome::Empty`].
//!
//! ```
//! use linex_sort::{merge_sort, SortOutcome};
//!
//! let mut data = [10, 12, 6, 11, 5];
//! assert_eq!(merge_sort(&mut data), SortOutcome::Sorted);
//! assert_eq!(data, [5, 6, 10, 11, 12]);
//! ```
//!
//! # Feature Flags
//!
//! - `std`: OS-seeded [`QuickSort::new`] and [`quick_sort`]
//! - `tracing`: a `debug` span per sort call and a `trace` event per pivot

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

mod algorithm;
mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use algorithm::{is_sorted, SortAlgorithm, SortOutcome};
pub use bubble::{bubble_sort, BubbleSort};
pub use insertion::{insertion_sort, InsertionSort};
pub use merge::{merge_sort, MergeSort};
#[cfg(feature = "std")]
pub use quick::quick_sort;
pub use quick::{quick_sort_with_seed, QuickSort};
pub use selection::{selection_sort, SelectionSort};
