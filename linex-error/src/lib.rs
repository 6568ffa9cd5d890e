// Linex - linex-error
// Module: Linex Error Handling
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Linex error handling library
//!
//! Every fallible operation on a Linex structure returns
//! [`Result<T>`](Result). Failures are local and recoverable: a structure
//! that reports an error has not been modified.
//!
//! # Error Categories
//!
//! ## Capacity Errors (1000-1999)
//! - Array full, stack overflow, queue full
//!
//! ## Empty Errors (2000-2999)
//! - Empty structure, stack underflow, queue empty
//!
//! ## Bounds Errors (3000-3999)
//! - Invalid 0-based index, invalid 1-based position
//!
//! ## Lookup Errors (4000-4999)
//! - Value not found
//!
//! ## Validation Errors (5000-5999)
//! - Seed data larger than the capacity
//!
//! # Usage
//!
//! ```
//! use linex_error::{kinds, Error, ErrorKind};
//!
//! let error = kinds::stack_overflow("BoundedStack is full");
//! assert_eq!(error, Error::STACK_OVERFLOW);
//! assert_eq!(error.kind(), Some(ErrorKind::StackOverflow));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for linex
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Error kind definitions
pub mod kinds;

pub mod prelude;

pub use errors::{Error, ErrorCategory, ErrorSource};
pub use kinds::ErrorKind;

/// A specialized `Result` type for Linex operations.
pub type Result<T> = core::result::Result<T, Error>;
