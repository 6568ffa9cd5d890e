// Linex - linex-foundation
// Module: LinkedQueue - Node-chain FIFO queue
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unbounded FIFO queue built from singly linked nodes.
//!
//! Nodes live in an arena and link to each other by slot index. The chain is
//! owned through `head`; `tail` is a plain index naming the last node, so the
//! rear can be reached in O(1) without a second owner. Slots released by
//! `dequeue` go onto a free list and are reused by the next `enqueue`.

use alloc::vec::Vec;
use core::{fmt, iter::FusedIterator};

use linex_error::{kinds, Result};

use super::FifoQueue;

#[derive(Clone)]
struct Slot<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// A FIFO queue with O(1) `enqueue` and `dequeue` and no capacity limit.
///
/// # Invariants
///
/// 1. `head` and `tail` are both `None` or both `Some`
/// 2. following `next` from `head` visits exactly `len` occupied slots and
///    ends at `tail`
/// 3. every vacant slot is on the free list
///
/// # Examples
///
/// ```
/// use linex_foundation::{FifoQueue, LinkedQueue};
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("a")?;
/// queue.enqueue("b")?;
/// assert_eq!(queue.dequeue()?, "a");
/// assert_eq!(queue.len(), 1);
/// # Ok::<(), linex_error::Error>(())
/// ```
#[derive(Clone)]
pub struct LinkedQueue<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates a new empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Iterates queued values front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Drops every queued value and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    fn allocate(&mut self, value: T) -> usize {
        match self.free {
            Some(index) => {
                let slot = &mut self.slots[index];
                self.free = slot.next;
                slot.value = Some(value);
                slot.next = None;
                index
            }
            None => {
                self.slots.push(Slot {
                    value: Some(value),
                    next: None,
                });
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, index: usize) {
        self.slots[index].next = self.free;
        self.free = Some(index);
    }
}

impl<T> FifoQueue<T> for LinkedQueue<T> {
    fn enqueue(&mut self, value: T) -> Result<()> {
        let index = self.allocate(value);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        trace_op!("LinkedQueue", "enqueue", len = self.len, slot = index);
        Ok(())
    }

    fn dequeue(&mut self) -> Result<T> {
        let Some(head) = self.head else {
            bail!("LinkedQueue", "dequeue", kinds::queue_empty("LinkedQueue is empty"));
        };
        let Some(value) = self.slots[head].value.take() else {
            bail!("LinkedQueue", "dequeue", kinds::queue_empty("LinkedQueue head slot is vacant"));
        };
        self.head = self.slots[head].next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.release(head);
        self.len -= 1;
        trace_op!("LinkedQueue", "dequeue", len = self.len, slot = head);
        Ok(value)
    }

    fn front(&self) -> Result<&T> {
        match self.head.and_then(|head| self.slots[head].value.as_ref()) {
            Some(value) => Ok(value),
            None => bail!("LinkedQueue", "front", kinds::queue_empty("LinkedQueue is empty")),
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_full(&self) -> bool {
        false
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            // Unbounded: enqueue cannot fail.
            let _ = self.enqueue(value);
        }
    }
}

/// Front-to-rear iterator over a [`LinkedQueue`].
pub struct Iter<'a, T> {
    queue: &'a LinkedQueue<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.queue.slots[self.next?];
        self.next = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
