// Linex - linex-foundation
// Module: BoundedStack - Fixed-capacity LIFO stack
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity LIFO stack over an inline buffer.

use core::{fmt, slice};

use linex_error::{kinds, Result};

/// A LIFO stack with compile-time capacity.
///
/// `top` is the index of the most recently pushed element, or `None` when
/// the stack is empty.
///
/// # Invariants
///
/// 1. `top` is `None` or `Some(i)` with `i < N`
/// 2. `[0, len)` holds the stack bottom to top
///
/// # Examples
///
/// ```
/// use linex_foundation::BoundedStack;
///
/// let mut stack = BoundedStack::<u8, 4>::new();
/// stack.push(1)?;
/// stack.push(2)?;
/// assert_eq!(stack.peek()?, &2);
/// assert_eq!(stack.pop()?, 2);
/// assert_eq!(stack.top_index(), Some(0));
/// # Ok::<(), linex_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct BoundedStack<T, const N: usize> {
    data: [T; N],
    top: Option<usize>,
}

impl<T: Copy + Default, const N: usize> BoundedStack<T, N> {
    /// Creates a new empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            top: None,
        }
    }
}

impl<T: Copy, const N: usize> BoundedStack<T, N> {
    /// Pushes `value` on top.
    ///
    /// # Errors
    ///
    /// Returns `StackOverflow` when the stack holds `N` elements.
    pub fn push(&mut self, value: T) -> Result<()> {
        let next = self.len();
        if next >= N {
            bail!("BoundedStack", "push", kinds::stack_overflow("Stack overflow"));
        }
        self.data[next] = value;
        self.top = Some(next);
        trace_op!("BoundedStack", "push", top = next);
        Ok(())
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns `StackUnderflow` when the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        let Some(top) = self.top else {
            bail!("BoundedStack", "pop", kinds::stack_underflow("Stack underflow"));
        };
        self.top = top.checked_sub(1);
        trace_op!("BoundedStack", "pop", len = top);
        Ok(self.data[top])
    }

    /// Borrows the top element.
    ///
    /// # Errors
    ///
    /// Returns `StackUnderflow` when the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        match self.top {
            Some(top) => Ok(&self.data[top]),
            None => bail!("BoundedStack", "peek", kinds::stack_underflow("Stack is empty")),
        }
    }

    /// Index of the top element, `None` when empty.
    #[inline]
    #[must_use]
    pub const fn top_index(&self) -> Option<usize> {
        self.top
    }

    /// Number of stacked elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        match self.top {
            Some(top) => top + 1,
            None => 0,
        }
    }

    /// `true` when nothing is stacked.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// `true` when `push` would overflow.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len() == N
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Stacked elements, bottom first.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len()]
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Empties the stack.
    pub fn clear(&mut self) {
        self.top = None;
    }
}

impl<T: Copy + Default, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq, const N: usize> PartialEq for BoundedStack<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const N: usize> Eq for BoundedStack<T, N> {}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for BoundedStack<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("capacity", &N)
            .field("top", &self.top)
            .field("elements", &self.as_slice())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use linex_error::Error;

    use super::*;

    #[test]
    fn test_new() {
        let stack: BoundedStack<i32, 5> = BoundedStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.top_index(), None);
        assert_eq!(stack.capacity(), 5);
    }

    #[test]
    fn test_walkthrough() -> Result<()> {
        let mut stack = BoundedStack::<i32, 5>::new();
        for value in [1, 2, 3, 4, 5] {
            stack.push(value)?;
        }
        assert_eq!(stack.top_index(), Some(4));
        assert!(stack.is_full());

        assert_eq!(stack.push(6), Err(Error::STACK_OVERFLOW));
        assert_eq!(stack.top_index(), Some(4));

        assert_eq!(stack.peek()?, &5);
        assert_eq!(stack.pop()?, 5);
        assert_eq!(stack.pop()?, 4);
        assert_eq!(stack.top_index(), Some(2));
        assert_eq!(stack.as_slice(), &[1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_underflow() -> Result<()> {
        let mut stack = BoundedStack::<i32, 2>::new();
        let before = stack;
        assert_eq!(stack.pop(), Err(Error::STACK_UNDERFLOW));
        assert_eq!(stack.peek(), Err(Error::STACK_UNDERFLOW));
        assert_eq!(stack, before);

        stack.push(7)?;
        assert_eq!(stack.pop()?, 7);
        assert_eq!(stack.top_index(), None);
        let before = stack;
        assert_eq!(stack.pop(), Err(Error::STACK_UNDERFLOW));
        assert_eq!(stack, before);
        Ok(())
    }

    #[test]
    fn test_zero_capacity() {
        let mut stack = BoundedStack::<u8, 0>::new();
        assert!(stack.is_full());
        assert_eq!(stack.push(1), Err(Error::STACK_OVERFLOW));
    }

    #[test]
    fn test_refill_after_drain() -> Result<()> {
        let mut stack = BoundedStack::<char, 2>::new();
        stack.push('a')?;
        stack.pop()?;
        stack.push('b')?;
        stack.push('c')?;
        assert_eq!(stack.iter().copied().collect::<alloc::vec::Vec<_>>(), ['b', 'c']);
        Ok(())
    }
}
