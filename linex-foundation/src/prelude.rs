// Linex - linex-foundation
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for linex-foundation
//!
//! One import for the structures, the queue trait and the error types.

pub use alloc::{boxed::Box, vec::Vec};
pub use core::{fmt, iter::FusedIterator};

pub use linex_error::{codes, kinds, Error, ErrorCategory, ErrorKind, Result};

pub use crate::{
    collections::{
        ArrayQueue, BoundedStack, FifoQueue, FixedArray, LinkedQueue, SinglyLinkedList,
    },
    shared::Shared,
};
