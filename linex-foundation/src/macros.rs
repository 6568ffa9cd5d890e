// Linex - linex-foundation
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Instrumentation macros.
//!
//! They expand to `tracing` calls when the `tracing` feature is enabled and
//! to nothing otherwise, so structure code never carries `cfg` noise.

/// Record a successful mutation.
macro_rules! trace_op {
    ($structure:literal, $op:literal $(, $field:ident = $value:expr)* $(,)?) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(structure = $structure, op = $op $(, $field = $value)*);
    };
}

/// Reject an operation: log the error and return it.
///
/// Callers invoke this before touching any state. `$op` may be a
/// runtime name when a private helper rejects on behalf of its caller.
macro_rules! bail {
    ($structure:literal, $op:expr, $error:expr) => {{
        let error: ::linex_error::Error = $error;
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            structure = $structure,
            op = $op,
            code = error.code,
            "{}",
            error.message
        );
        return Err(error);
    }};
}

/// Open a span covering an element shift for the rest of the block.
macro_rules! shift_span {
    ($structure:literal, $direction:literal, $from:expr, $count:expr) => {
        #[cfg(feature = "tracing")]
        let _shift_guard =
            $crate::tracing::ShiftTrace::shifting($structure, $direction, $from, $count).entered();
    };
}
