// Linex - linex-sync
// Module: Prelude
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude module for linex-sync
//!
//! Core imports shared by the lock implementation. Only `core` is used so
//! the crate builds unchanged with and without `std`.

pub use core::{
    cell::UnsafeCell,
    fmt,
    hint::spin_loop,
    ops::{Deref, DerefMut},
    sync::atomic::{AtomicBool, Ordering},
};

pub use crate::{LinexMutex as Mutex, LinexMutexGuard as MutexGuard};
