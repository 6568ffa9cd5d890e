// Linex - linex-foundation
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The linear structures.
//!
//! Array-backed structures store `T: Copy + Default` inline in `[T; N]` and
//! never allocate. Node-backed structures hold any `T` and allocate one node
//! per element.

mod array_queue;
mod bounded_stack;
mod fifo_queue;
mod fixed_array;
pub mod linked_queue;
pub mod singly_linked_list;

pub use array_queue::ArrayQueue;
pub use bounded_stack::BoundedStack;
pub use fifo_queue::FifoQueue;
pub use fixed_array::FixedArray;
pub use linked_queue::LinkedQueue;
pub use singly_linked_list::SinglyLinkedList;
