// Linex - linex-error
// Module: Linex Error Types
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error value for every Linex structure.
//!
//! Errors are small `Copy` values: a category, a numeric code from
//! [`codes`](crate::codes) and a static message. They never own heap data,
//! so returning one from a failed operation cannot allocate.

use core::fmt;

use crate::{codes, kinds::ErrorKind};

/// `Error` categories for Linex operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Structure is at capacity
    Capacity   = 1,
    /// Structure holds no elements
    Empty      = 2,
    /// Index or position outside the valid range
    Bounds     = 3,
    /// Search found no matching element
    Lookup     = 4,
    /// Construction arguments rejected
    Validation = 5,
}

/// Base trait for all error types - `no_std` version
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// Linex `Error` type
///
/// Equality compares category and code only, so a test can match an
/// error against the associated constants regardless of the message a
/// structure attached.
#[derive(Debug, Copy, Clone)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Fixed-capacity array is full
    pub const CAPACITY_EXCEEDED: Self =
        Self::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, "Array is full");
    /// Operation on an empty structure
    pub const EMPTY_STRUCTURE: Self =
        Self::new(ErrorCategory::Empty, codes::EMPTY_STRUCTURE, "Structure is empty");
    /// Invalid construction capacity
    pub const INVALID_CAPACITY: Self = Self::new(
        ErrorCategory::Validation,
        codes::INVALID_CAPACITY,
        "Seed exceeds capacity",
    );
    /// Index out of range
    pub const INVALID_INDEX: Self =
        Self::new(ErrorCategory::Bounds, codes::INVALID_INDEX, "Invalid index");
    /// Position out of range
    pub const INVALID_POSITION: Self =
        Self::new(ErrorCategory::Bounds, codes::INVALID_POSITION, "Invalid position");
    /// Dequeue or front on an empty queue
    pub const QUEUE_EMPTY: Self =
        Self::new(ErrorCategory::Empty, codes::QUEUE_EMPTY, "Queue is empty");
    /// Enqueue on a full queue
    pub const QUEUE_FULL: Self =
        Self::new(ErrorCategory::Capacity, codes::QUEUE_FULL, "Queue is full");
    /// Push on a full stack
    pub const STACK_OVERFLOW: Self = Self::new(
        ErrorCategory::Capacity,
        codes::STACK_OVERFLOW,
        "Stack is full (overflow)",
    );
    /// Pop or peek on an empty stack
    pub const STACK_UNDERFLOW: Self = Self::new(
        ErrorCategory::Empty,
        codes::STACK_UNDERFLOW,
        "Stack is empty (underflow)",
    );
    /// Search-based delete found no match
    pub const VALUE_NOT_FOUND: Self =
        Self::new(ErrorCategory::Lookup, codes::VALUE_NOT_FOUND, "Value not found");

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Same error with a structure-specific message.
    #[must_use]
    pub const fn with_message(self, message: &'static str) -> Self {
        Self::new(self.category, self.code, message)
    }

    /// Classify this error against the taxonomy.
    ///
    /// Returns `None` for codes that were built by hand outside
    /// [`codes`](crate::codes).
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::from_code(self.code)
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is an empty-structure error
    #[must_use]
    pub fn is_empty_error(&self) -> bool {
        self.category == ErrorCategory::Empty
    }

    /// Check if this is an index/position error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a lookup error
    #[must_use]
    pub fn is_lookup_error(&self) -> bool {
        self.category == ErrorCategory::Lookup
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category && self.code == other.code
    }
}

impl Eq for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}][E{:04X}] {}", self.category, self.code, self.message)
    }
}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        kind.to_error()
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
