// Linex - linex-sync
// Module: Spin-lock primitives
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

#![no_std]
#![doc = "no_std synchronization primitive (spin-lock Mutex) for sharing Linex structures."]
#![warn(clippy::missing_panics_doc)]

// Conditionally use `std` for tests or specific features
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod mutex;
pub mod prelude;

pub use mutex::*;
