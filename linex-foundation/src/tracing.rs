// Linex - linex-foundation
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Tracing support for Linex structures
//!
//! Structured tracing that works in both std and `no_std` environments. It
//! wraps the `tracing` crate and provides span factories for the parts of a
//! structure operation worth following: element shifts in array-backed
//! structures and node relinking in chain-backed ones.

pub use ::tracing::{debug, error, info, trace, warn};
pub use ::tracing::{debug_span, error_span, info_span, span, trace_span, warn_span};
pub use ::tracing::{event, Level, Span};

/// Spans for whole-structure operations
#[derive(Debug, Clone)]
pub struct StructureTrace;

impl StructureTrace {
    /// Create a span for seeding a structure from existing data
    #[inline]
    pub fn seeding(structure: &'static str, len: usize, capacity: usize) -> Span {
        debug_span!("structure_seed", structure = %structure, len = %len, capacity = %capacity)
    }

    /// Create a span for a chain walk to a 1-based position
    #[inline]
    pub fn walking(structure: &'static str, position: usize) -> Span {
        trace_span!("chain_walk", structure = %structure, position = %position)
    }

    /// Create a span for a locked operation on a shared structure
    #[inline]
    pub fn locked(structure: &'static str) -> Span {
        trace_span!("shared_access", structure = %structure)
    }
}

/// Spans for element shifts inside array-backed structures
#[derive(Debug, Clone)]
pub struct ShiftTrace;

impl ShiftTrace {
    /// Create a span for shifting `count` elements starting at `from`
    #[inline]
    pub fn shifting(
        structure: &'static str,
        direction: &'static str,
        from: usize,
        count: usize,
    ) -> Span {
        trace_span!(
            "element_shift",
            structure = %structure,
            direction = %direction,
            from = %from,
            count = %count
        )
    }
}
