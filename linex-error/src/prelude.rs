// Linex - linex-error
// Module: Linex Error Prelude
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for linex-error
//!
//! Re-exports the error value, its categories and the kind helpers so
//! structure modules can pull everything in with one `use`.

pub use crate::{
    codes,
    kinds::{
        self,
        ErrorKind,
    },
    Error,
    ErrorCategory,
    ErrorSource,
    Result,
};
