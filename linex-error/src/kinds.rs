// Linex - linex-error
// Module: Linex Error Kinds
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error kinds and constructor helpers.
//!
//! [`ErrorKind`] mirrors the failure taxonomy one variant per condition,
//! which lets callers `match` on what went wrong without comparing raw
//! codes. The free functions build an [`Error`] of the matching kind with a
//! caller-supplied static message.

use crate::{codes, Error, ErrorCategory};

/// Every failure a Linex structure can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Fixed-capacity array is full
    CapacityExceeded,
    /// Bounded stack is full
    StackOverflow,
    /// Bounded queue is full
    QueueFull,
    /// Structure holds no elements
    EmptyStructure,
    /// Stack holds no elements
    StackUnderflow,
    /// Queue holds no elements
    QueueEmpty,
    /// 0-based index outside the valid range
    InvalidIndex,
    /// 1-based position outside the valid range
    InvalidPosition,
    /// Search-based delete found no match
    ValueNotFound,
    /// Seed data larger than the capacity
    InvalidCapacity,
}

impl ErrorKind {
    /// Map a numeric code back to its kind.
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            codes::CAPACITY_EXCEEDED => Some(Self::CapacityExceeded),
            codes::STACK_OVERFLOW => Some(Self::StackOverflow),
            codes::QUEUE_FULL => Some(Self::QueueFull),
            codes::EMPTY_STRUCTURE => Some(Self::EmptyStructure),
            codes::STACK_UNDERFLOW => Some(Self::StackUnderflow),
            codes::QUEUE_EMPTY => Some(Self::QueueEmpty),
            codes::INVALID_INDEX => Some(Self::InvalidIndex),
            codes::INVALID_POSITION => Some(Self::InvalidPosition),
            codes::VALUE_NOT_FOUND => Some(Self::ValueNotFound),
            codes::INVALID_CAPACITY => Some(Self::InvalidCapacity),
            _ => None,
        }
    }

    /// The canonical error value for this kind.
    #[must_use]
    pub const fn to_error(self) -> Error {
        match self {
            Self::CapacityExceeded => Error::CAPACITY_EXCEEDED,
            Self::StackOverflow => Error::STACK_OVERFLOW,
            Self::QueueFull => Error::QUEUE_FULL,
            Self::EmptyStructure => Error::EMPTY_STRUCTURE,
            Self::StackUnderflow => Error::STACK_UNDERFLOW,
            Self::QueueEmpty => Error::QUEUE_EMPTY,
            Self::InvalidIndex => Error::INVALID_INDEX,
            Self::InvalidPosition => Error::INVALID_POSITION,
            Self::ValueNotFound => Error::VALUE_NOT_FOUND,
            Self::InvalidCapacity => Error::INVALID_CAPACITY,
        }
    }

    /// Category this kind belongs to.
    #[must_use]
    pub const fn category(self) -> ErrorCategory {
        self.to_error().category
    }
}

/// Create a capacity exceeded error
#[must_use]
pub const fn capacity_exceeded(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
}

/// Create a stack overflow error
#[must_use]
pub const fn stack_overflow(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::STACK_OVERFLOW, message)
}

/// Create a queue full error
#[must_use]
pub const fn queue_full(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::QUEUE_FULL, message)
}

/// Create an empty structure error
#[must_use]
pub const fn empty_structure(message: &'static str) -> Error {
    Error::new(ErrorCategory::Empty, codes::EMPTY_STRUCTURE, message)
}

/// Create a stack underflow error
#[must_use]
pub const fn stack_underflow(message: &'static str) -> Error {
    Error::new(ErrorCategory::Empty, codes::STACK_UNDERFLOW, message)
}

/// Create a queue empty error
#[must_use]
pub const fn queue_empty(message: &'static str) -> Error {
    Error::new(ErrorCategory::Empty, codes::QUEUE_EMPTY, message)
}

/// Create an invalid index error
#[must_use]
pub const fn invalid_index(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::INVALID_INDEX, message)
}

/// Create an invalid position error
#[must_use]
pub const fn invalid_position(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::INVALID_POSITION, message)
}

/// Create a value not found error
#[must_use]
pub const fn value_not_found(message: &'static str) -> Error {
    Error::new(ErrorCategory::Lookup, codes::VALUE_NOT_FOUND, message)
}

/// Create an invalid capacity error
#[must_use]
pub const fn invalid_capacity(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::INVALID_CAPACITY, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorKind; 10] = [
        ErrorKind::CapacityExceeded,
        ErrorKind::StackOverflow,
        ErrorKind::QueueFull,
        ErrorKind::EmptyStructure,
        ErrorKind::StackUnderflow,
        ErrorKind::QueueEmpty,
        ErrorKind::InvalidIndex,
        ErrorKind::InvalidPosition,
        ErrorKind::ValueNotFound,
        ErrorKind::InvalidCapacity,
    ];

    #[test]
    fn test_kind_code_mapping_is_bijective() {
        for kind in ALL {
            let error = kind.to_error();
            assert_eq!(error.kind(), Some(kind));
            assert_eq!(ErrorKind::from_code(error.code), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(9999), None);
    }

    #[test]
    fn test_helpers_match_constants() {
        assert_eq!(capacity_exceeded("x"), Error::CAPACITY_EXCEEDED);
        assert_eq!(stack_overflow("x"), Error::STACK_OVERFLOW);
        assert_eq!(queue_full("x"), Error::QUEUE_FULL);
        assert_eq!(empty_structure("x"), Error::EMPTY_STRUCTURE);
        assert_eq!(stack_underflow("x"), Error::STACK_UNDERFLOW);
        assert_eq!(queue_empty("x"), Error::QUEUE_EMPTY);
        assert_eq!(invalid_index("x"), Error::INVALID_INDEX);
        assert_eq!(invalid_position("x"), Error::INVALID_POSITION);
        assert_eq!(value_not_found("x"), Error::VALUE_NOT_FOUND);
        assert_eq!(invalid_capacity("x"), Error::INVALID_CAPACITY);
    }

    #[test]
    fn test_kind_category() {
        assert_eq!(ErrorKind::QueueFull.category(), ErrorCategory::Capacity);
        assert_eq!(ErrorKind::StackUnderflow.category(), ErrorCategory::Empty);
        assert_eq!(ErrorKind::InvalidPosition.category(), ErrorCategory::Bounds);
    }
}
