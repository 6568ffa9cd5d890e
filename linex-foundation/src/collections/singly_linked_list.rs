// Linex - linex-foundation
// Module: SinglyLinkedList - Owned forward chain
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Singly linked list with 1-based positional insert and delete.
//!
//! Every node is exclusively owned by its predecessor's `next` link, or by
//! `head` for the first node. There are no back references, so a cycle
//! cannot be expressed.

use alloc::boxed::Box;
use core::{fmt, iter::FusedIterator};

use linex_error::{kinds, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

/// A head-tracked singly linked list.
///
/// # Invariants
///
/// 1. `len` equals the number of nodes reachable from `head`
/// 2. `head.is_none()` iff `len == 0`
///
/// # Examples
///
/// ```
/// use linex_foundation::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.insert_at_beginning(3);
/// list.insert_at_beginning(1);
/// list.insert_at_position(2, 2)?;
/// list.insert_at_last(4);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
/// # Ok::<(), linex_error::Error>(())
/// ```
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Number of nodes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// `true` when the list has no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes a node in front of the current head. O(1).
    pub fn insert_at_beginning(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
        self.len += 1;
        trace_op!("SinglyLinkedList", "insert_at_beginning", position = 1usize);
    }

    /// Appends a node after the current tail. O(n).
    pub fn insert_at_last(&mut self, value: T) {
        let Some(last) = self.node_mut(self.len) else {
            self.insert_at_beginning(value);
            return;
        };
        last.next = Some(Box::new(Node { value, next: None }));
        self.len += 1;
        trace_op!("SinglyLinkedList", "insert_at_last", position = self.len);
    }

    /// Inserts `value` so that it becomes the node at `position` (1-based).
    ///
    /// Position 1 delegates to [`insert_at_beginning`](Self::insert_at_beginning).
    /// Otherwise walks `position - 2` links to the predecessor and splices
    /// the new node after it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPosition` unless `1 <= position <= len + 1`.
    pub fn insert_at_position(&mut self, position: usize, value: T) -> Result<()> {
        if position == 0 || position > self.len + 1 {
            bail!(
                "SinglyLinkedList",
                "insert_at_position",
                kinds::invalid_position("Insert position out of range")
            );
        }
        if position == 1 {
            self.insert_at_beginning(value);
            return Ok(());
        }
        let Some(prev) = self.node_mut(position - 1) else {
            bail!("SinglyLinkedList", "insert_at_position", kinds::invalid_position("Broken chain"));
        };
        let next = prev.next.take();
        prev.next = Some(Box::new(Node { value, next }));
        self.len += 1;
        trace_op!("SinglyLinkedList", "insert_at_position", position = position);
        Ok(())
    }

    /// Removes the head node and returns its value. O(1).
    ///
    /// # Errors
    ///
    /// Returns `EmptyStructure` if the list is empty.
    pub fn delete_at_beginning(&mut self) -> Result<T> {
        let Some(node) = self.head.take() else {
            bail!(
                "SinglyLinkedList",
                "delete_at_beginning",
                kinds::empty_structure("Linked list is empty")
            );
        };
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        trace_op!("SinglyLinkedList", "delete_at_beginning", position = 1usize);
        Ok(value)
    }

    /// Removes the tail node and returns its value. O(n).
    ///
    /// Removing the only node resets the list to empty.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStructure` if the list is empty.
    pub fn delete_at_last(&mut self) -> Result<T> {
        if self.len <= 1 {
            return self.delete_at_beginning();
        }
        let position = self.len;
        self.unlink_after(position - 1, "delete_at_last")
    }

    /// Removes the node at `position` (1-based) and returns its value.
    ///
    /// Position 1 delegates to [`delete_at_beginning`](Self::delete_at_beginning)
    /// before any range check, so it reports `EmptyStructure` on an empty list.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStructure` for position 1 on an empty list, otherwise
    /// `InvalidPosition` unless `1 <= position <= len`.
    pub fn delete_at_position(&mut self, position: usize) -> Result<T> {
        if position == 1 {
            return self.delete_at_beginning();
        }
        if position == 0 || position > self.len {
            bail!(
                "SinglyLinkedList",
                "delete_at_position",
                kinds::invalid_position("Delete position out of range")
            );
        }
        self.unlink_after(position - 1, "delete_at_position")
    }

    /// Value of the node at `position` (1-based).
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        position.checked_sub(1).and_then(|skip| self.iter().nth(skip))
    }

    /// Value of the head node.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Value of the tail node. O(n).
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Iterates values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Node at `position` (1-based), reached by walking `position - 1` links.
    fn node_mut(&mut self, position: usize) -> Option<&mut Node<T>> {
        if position == 0 {
            return None;
        }
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::StructureTrace::walking("SinglyLinkedList", position).entered();

        let mut node = self.head.as_deref_mut()?;
        for _ in 1..position {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }

    /// Unlinks the successor of the node at `prev_position`.
    fn unlink_after(&mut self, prev_position: usize, op: &'static str) -> Result<T> {
        #[cfg(not(feature = "tracing"))]
        let _ = op;
        let removed = self
            .node_mut(prev_position)
            .and_then(|prev| {
                let mut removed = prev.next.take()?;
                prev.next = removed.next.take();
                Some(removed)
            });
        let Some(removed) = removed else {
            bail!("SinglyLinkedList", op, kinds::invalid_position("Broken chain"));
        };
        self.len -= 1;
        #[cfg(feature = "tracing")]
        ::tracing::trace!(structure = "SinglyLinkedList", op, position = prev_position + 1);
        Ok(removed.value)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Iterative drop: a recursive Box drop would overflow the call stack on
// long chains.
impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // Build tail-first through a cursor on the last link: O(n) overall.
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for value in iter {
            let node = tail.insert(Box::new(Node { value, next: None }));
            tail = &mut node.next;
            list.len += 1;
        }
        list
    }
}

/// Borrowing iterator over a [`SinglyLinkedList`], head to tail.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
