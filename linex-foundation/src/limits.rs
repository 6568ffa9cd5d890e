// Linex - linex-foundation
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Platform-specific default capacities for the array-backed structures.
//!
//! Capacities are compile-time constants; a structure never grows. The
//! `Default*` aliases pick a capacity suited to the platform profile:
//!
//! - `embedded-small`: MCU targets with ~64KB RAM
//! - `embedded-medium`: Embedded Linux with ~1MB RAM
//! - Default: Desktop/Server with ample memory
//!
//! ```rust
//! use linex_foundation::{limits, DefaultStack};
//!
//! let stack = DefaultStack::<u32>::new();
//! assert_eq!(stack.capacity(), limits::DEFAULT_STACK_CAPACITY);
//! ```

use crate::collections::{ArrayQueue, BoundedStack, FixedArray};

/// Platform profile for embedded microcontrollers (~64KB RAM)
#[cfg(feature = "embedded-small")]
mod platform {
    pub const ARRAY: usize = 16;
    pub const QUEUE: usize = 16;
    pub const STACK: usize = 32;
}

/// Platform profile for embedded Linux (~1MB RAM)
#[cfg(all(feature = "embedded-medium", not(feature = "embedded-small")))]
mod platform {
    pub const ARRAY: usize = 128;
    pub const QUEUE: usize = 128;
    pub const STACK: usize = 256;
}

/// Desktop/server profile
#[cfg(not(any(feature = "embedded-small", feature = "embedded-medium")))]
mod platform {
    pub const ARRAY: usize = 1024;
    pub const QUEUE: usize = 1024;
    pub const STACK: usize = 1024;
}

/// Default capacity of [`DefaultFixedArray`]
pub const DEFAULT_ARRAY_CAPACITY: usize = platform::ARRAY;

/// Default capacity of [`DefaultArrayQueue`]
pub const DEFAULT_QUEUE_CAPACITY: usize = platform::QUEUE;

/// Default capacity of [`DefaultStack`]
pub const DEFAULT_STACK_CAPACITY: usize = platform::STACK;

/// Fixed-capacity array sized for the active platform profile
pub type DefaultFixedArray<T> = FixedArray<T, DEFAULT_ARRAY_CAPACITY>;

/// Array-backed queue sized for the active platform profile
pub type DefaultArrayQueue<T> = ArrayQueue<T, DEFAULT_QUEUE_CAPACITY>;

/// Bounded stack sized for the active platform profile
pub type DefaultStack<T> = BoundedStack<T, DEFAULT_STACK_CAPACITY>;
