// Linex - linex-error
// Module: Linex Error Codes
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for Linex

// Capacity error codes (1000-1999)
/// Fixed-capacity array has no free slot
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// Bounded stack has no free slot
pub const STACK_OVERFLOW: u16 = 1001;
/// Bounded queue has no free slot
pub const QUEUE_FULL: u16 = 1002;

// Empty-structure error codes (2000-2999)
/// Structure holds no elements
pub const EMPTY_STRUCTURE: u16 = 2000;
/// Pop or peek on an empty stack
pub const STACK_UNDERFLOW: u16 = 2001;
/// Dequeue or front on an empty queue
pub const QUEUE_EMPTY: u16 = 2002;

// Bounds error codes (3000-3999)
/// 0-based index outside the valid range
pub const INVALID_INDEX: u16 = 3000;
/// 1-based position outside the valid range
pub const INVALID_POSITION: u16 = 3001;

// Lookup error codes (4000-4999)
/// Search-based delete found no match
pub const VALUE_NOT_FOUND: u16 = 4000;

// Validation error codes (5000-5999)
/// Seed data larger than the structure's capacity
pub const INVALID_CAPACITY: u16 = 5000;
