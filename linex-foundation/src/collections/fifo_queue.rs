// Linex - linex-foundation
// Module: FifoQueue - Shared queue contract
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The contract shared by every FIFO queue backing.
//!
//! For any identical sequence of calls, every implementation returns the
//! same values from `dequeue`: the i-th successful dequeue yields the i-th
//! successfully enqueued value not yet removed.

use linex_error::Result;

/// First-in, first-out queue.
pub trait FifoQueue<T> {
    /// Adds `value` at the rear.
    ///
    /// # Errors
    ///
    /// Returns `QueueFull` when a bounded backing is at capacity.
    fn enqueue(&mut self, value: T) -> Result<()>;

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns `QueueEmpty` when there is nothing to remove.
    fn dequeue(&mut self) -> Result<T>;

    /// Borrows the front value without removing it.
    ///
    /// # Errors
    ///
    /// Returns `QueueEmpty` when there is nothing to read.
    fn front(&self) -> Result<&T>;

    /// Number of queued values.
    fn len(&self) -> usize;

    /// `true` when nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when `enqueue` would fail. Unbounded backings never are.
    fn is_full(&self) -> bool;
}
