// Linex - linex-foundation
// Module: ArrayQueue - Shift-on-dequeue FIFO buffer
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity FIFO queue over an inline buffer.
//!
//! The front is always physically at index 0: `dequeue` moves the remaining
//! elements one slot left. That makes `dequeue` O(n), in exchange for a
//! layout with no wraparound. Use [`LinkedQueue`](super::LinkedQueue) for
//! O(1) dequeues.

use core::{fmt, slice};

use linex_error::{kinds, Result};

use super::FifoQueue;

/// A FIFO queue with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. `[0, len)` holds the queue front to rear
///
/// # Examples
///
/// ```
/// use linex_foundation::{ArrayQueue, FifoQueue};
///
/// let mut queue = ArrayQueue::<u32, 3>::new();
/// queue.enqueue(1)?;
/// queue.enqueue(2)?;
/// assert_eq!(queue.dequeue()?, 1);
/// assert_eq!(queue.front()?, &2);
/// # Ok::<(), linex_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct ArrayQueue<T, const N: usize> {
    data: [T; N],
    len: usize,
}

impl<T: Copy + Default, const N: usize> ArrayQueue<T, N> {
    /// Creates a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            len: 0,
        }
    }
}

impl<T: Copy, const N: usize> ArrayQueue<T, N> {
    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Queued values, front first.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Iterates queued values front to rear.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Drops every queued value.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Copy, const N: usize> FifoQueue<T> for ArrayQueue<T, N> {
    fn enqueue(&mut self, value: T) -> Result<()> {
        if self.len >= N {
            bail!("ArrayQueue", "enqueue", kinds::queue_full("ArrayQueue is full"));
        }
        self.data[self.len] = value;
        self.len += 1;
        trace_op!("ArrayQueue", "enqueue", len = self.len);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            bail!("ArrayQueue", "dequeue", kinds::queue_empty("ArrayQueue is empty"));
        }
        let value = self.data[0];
        {
            shift_span!("ArrayQueue", "left", 1, self.len - 1);
            self.data.copy_within(1..self.len, 0);
        }
        self.len -= 1;
        trace_op!("ArrayQueue", "dequeue", len = self.len);
        Ok(value)
    }

    fn front(&self) -> Result<&T> {
        match self.as_slice().first() {
            Some(value) => Ok(value),
            None => bail!("ArrayQueue", "front", kinds::queue_empty("ArrayQueue is empty")),
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_full(&self) -> bool {
        self.len == N
    }
}

impl<T: Copy + Default, const N: usize> Default for ArrayQueue<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for ArrayQueue<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const N: usize> Eq for ArrayQueue<T, N> {}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for ArrayQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayQueue")
            .field("capacity", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}
