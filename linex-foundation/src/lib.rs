// Linex - linex-foundation
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Linear data structures for the Linex library.
//!
//! This crate provides the structures whose mutation rules are the whole
//! point of the library: index arithmetic under boundary conditions,
//! shifting strategies and pointer relinking. It supports two
//! configurations:
//! - `std`: Full standard library support
//! - `no_std` + `alloc`: No standard library; node-backed structures
//!   allocate through `alloc`
//!
//! | structure                | backing                  | bounded |
//! |--------------------------|--------------------------|---------|
//! | [`FixedArray`]           | inline `[T; N]`          | yes     |
//! | [`SinglyLinkedList`]     | owned `Box` chain        | no      |
//! | [`ArrayQueue`]           | inline `[T; N]`          | yes     |
//! | [`LinkedQueue`]          | index-linked arena       | no      |
//! | [`BoundedStack`]         | inline `[T; N]`          | yes     |
//!
//! Every fallible operation returns [`linex_error::Result`]. A structure
//! that reports an error is left exactly as it was before the call.
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (implies `alloc`)
//! - `alloc`: Enables allocation support for `no_std` environments
//! - `tracing`: Structured events for every mutation and rejection
//! - `embedded-small` / `embedded-medium`: smaller default capacities in
//!   [`limits`]

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

pub mod collections;
pub mod limits;
pub mod prelude;
pub mod shared;
#[cfg(feature = "tracing")]
pub mod tracing;

pub use collections::{
    ArrayQueue, BoundedStack, FifoQueue, FixedArray, LinkedQueue, SinglyLinkedList,
};
pub use limits::{DefaultArrayQueue, DefaultFixedArray, DefaultStack};
pub use linex_error::{codes, kinds, Error, ErrorCategory, ErrorKind, Result};
pub use shared::Shared;
