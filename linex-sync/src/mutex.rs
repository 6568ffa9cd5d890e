// Linex - linex-sync
// Module: LinexMutex - Spin-lock mutex
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Spin-lock mutex.
//!
//! A structure wrapped in [`LinexMutex`] is only ever touched through a
//! [`LinexMutexGuard`], so an operation that shifts an array or relinks a
//! chain runs start to finish while the lock is held. Other threads can
//! never observe the intermediate state.

use crate::prelude::{fmt, spin_loop, AtomicBool, Deref, DerefMut, Ordering, UnsafeCell};

/// A simple, non-reentrant spinlock mutex suitable for `no_std` environments.
///
/// It does not handle heavy contention well (it just spins) and has no
/// poisoning. Structure operations are short and bounded, which keeps the
/// critical sections small.
pub struct LinexMutex<T: ?Sized> {
    locked: AtomicBool,
    data: UnsafeCell<T>,
}

/// A guard that provides mutable access to the data protected by a
/// `LinexMutex`.
///
/// When the guard is dropped, the mutex is unlocked.
#[clippy::has_significant_drop]
pub struct LinexMutexGuard<'a, T: ?Sized + 'a> {
    mutex: &'a LinexMutex<T>,
}

/// # Safety
/// Access to the `UnsafeCell` data is protected by the atomic `locked` flag,
/// so only one thread can reach the data at a time (if `T` is `Send`).
unsafe impl<T: ?Sized + Send> Send for LinexMutex<T> {}
/// # Safety
/// All accesses to the data go through the lock, which makes sharing
/// `&LinexMutex<T>` sound whenever `T` is `Send`.
unsafe impl<T: ?Sized + Send> Sync for LinexMutex<T> {}

impl<T> LinexMutex<T> {
    /// Creates a new `LinexMutex` protecting the given data.
    #[inline]
    pub const fn new(data: T) -> Self {
        LinexMutex { locked: AtomicBool::new(false), data: UnsafeCell::new(data) }
    }

    /// Consumes the mutex and returns the protected data.
    #[inline]
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

impl<T: ?Sized> LinexMutex<T> {
    /// Acquires the lock, spinning until it is available.
    ///
    /// # Panics
    ///
    /// This function does not panic.
    #[inline]
    pub fn lock(&self) -> LinexMutexGuard<'_, T> {
        // Acquire on success orders the data reads after the lock is taken.
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            spin_loop();
        }
        LinexMutexGuard { mutex: self }
    }

    /// Attempts to acquire the lock without spinning.
    #[inline]
    pub fn try_lock(&self) -> Option<LinexMutexGuard<'_, T>> {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| LinexMutexGuard { mutex: self })
    }

    /// Returns a mutable reference to the data without locking.
    ///
    /// The exclusive borrow already proves no guard exists.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }
}

impl<T: Default> Default for LinexMutex<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for LinexMutex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never block inside Debug.
        match self.try_lock() {
            Some(guard) => f.debug_struct("LinexMutex").field("data", &&*guard).finish(),
            None => f.debug_struct("LinexMutex").field("data", &"<locked>").finish(),
        }
    }
}

impl<T: ?Sized> Deref for LinexMutexGuard<'_, T> {
    type Target = T;
    #[inline]
    fn deref(&self) -> &Self::Target {
        // # Safety
        // A guard only exists while the associated mutex is locked, which
        // grants this guard exclusive access to the data.
        unsafe { &*self.mutex.data.get() }
    }
}

impl<T: ?Sized> DerefMut for LinexMutexGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // # Safety
        // Same invariant as `deref`: the guard holds the lock exclusively.
        unsafe { &mut *self.mutex.data.get() }
    }
}

impl<T: ?Sized> Drop for LinexMutexGuard<'_, T> {
    /// Releases the lock when the guard goes out of scope.
    #[inline]
    fn drop(&mut self) {
        // Release publishes every write made under the guard.
        self.mutex.locked.store(false, Ordering::Release);
    }
}
