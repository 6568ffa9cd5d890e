// Linex - linex-foundation
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Thread-shareable wrapper for any Linex structure.
//!
//! The structures themselves are single-owner and unsynchronized. Wrap one
//! in [`Shared`] and put it behind an `Arc` to hand it to several threads;
//! every access runs under the [`LinexMutex`] spin lock.

use core::fmt;

use linex_sync::LinexMutex;

/// A structure guarded by a spin lock.
///
/// # Examples
///
/// ```
/// use linex_foundation::{BoundedStack, Shared};
///
/// let shared = Shared::new(BoundedStack::<u32, 8>::new());
/// shared.with(|stack| stack.push(3))?;
/// assert_eq!(shared.with(|stack| stack.len()), 1);
/// # Ok::<(), linex_error::Error>(())
/// ```
pub struct Shared<S> {
    inner: LinexMutex<S>,
    name: &'static str,
}

impl<S> Shared<S> {
    /// Wraps `structure`.
    #[must_use]
    pub fn new(structure: S) -> Self {
        Self {
            inner: LinexMutex::new(structure),
            name: core::any::type_name::<S>(),
        }
    }

    /// Runs `f` with exclusive access to the structure.
    ///
    /// The lock is held for the duration of `f` only. Do not call `with` on
    /// the same `Shared` from inside `f`: the lock is not reentrant.
    pub fn with<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::StructureTrace::locked(self.name).entered();
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Mutable access without locking; `&mut self` proves exclusivity.
    pub fn get_mut(&mut self) -> &mut S {
        self.inner.get_mut()
    }

    /// Unwraps the structure.
    pub fn into_inner(self) -> S {
        self.inner.into_inner()
    }
}

impl<S: Clone> Shared<S> {
    /// Clones the structure under the lock.
    #[must_use]
    pub fn snapshot(&self) -> S {
        self.with(|structure| structure.clone())
    }
}

impl<S: Default> Default for Shared<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Shared<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("structure", &self.name)
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread, vec::Vec};

    use super::*;
    use crate::collections::{FifoQueue, LinkedQueue};

    #[test]
    fn test_with_mutates_in_place() -> crate::Result<()> {
        let shared = Shared::new(LinkedQueue::new());
        shared.with(|queue| queue.enqueue(1))?;
        shared.with(|queue| queue.enqueue(2))?;
        assert_eq!(shared.with(|queue| queue.dequeue())?, 1);
        assert_eq!(shared.snapshot().len(), 1);
        Ok(())
    }

    #[test]
    fn test_concurrent_producers() {
        let shared = Arc::new(Shared::new(LinkedQueue::new()));
        let handles: Vec<_> = (0..4u32)
            .map(|producer| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for i in 0..250 {
                        let _ = shared.with(|queue| queue.enqueue(producer * 1000 + i));
                    }
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().is_ok());
        }

        let mut queue = shared.snapshot();
        assert_eq!(queue.len(), 1000);

        // Per-producer order survives interleaving.
        let mut last = [None::<u32>; 4];
        while let Ok(value) = queue.dequeue() {
            let producer = (value / 1000) as usize;
            if let Some(previous) = last[producer] {
                assert!(previous < value);
            }
            last[producer] = Some(value);
        }
    }
}
