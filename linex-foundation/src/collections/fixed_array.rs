// Linex - linex-foundation
// Module: FixedArray - Capacity-bounded sequential buffer
//
// Copyright (c) 2025 The Linex Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity array with positional insert, update and delete.
//!
//! `FixedArray<T, N>` keeps its elements in an inline `[T; N]`. Only the
//! prefix `[0, len)` is live; slots in `[len, N)` hold stale values and are
//! never observable through the API.
//!
//! # Characteristics
//!
//! - **Zero allocation**: storage is inline
//! - **O(1) tail operations**: `insert_at_end`, `delete_at_end`
//! - **O(len - i) positional operations**: inserts shift the suffix right,
//!   deletes shift it left, both as one bounded `copy_within`
//! - **No partial writes**: every check runs before the first write

use core::{fmt, slice};

use linex_error::{kinds, Result};

/// A sequential buffer with compile-time capacity and inline storage.
///
/// # Invariants
///
/// 1. `len <= N` always holds
/// 2. Elements in `[0, len)` are the live contents in order
///
/// # Examples
///
/// ```
/// use linex_foundation::FixedArray;
///
/// let mut array = FixedArray::<i32, 5>::new();
/// array.insert_at_end(10)?;
/// array.insert_at_beginning(20)?;
/// array.insert_at_index(1, 30)?;
/// assert_eq!(array.as_slice(), &[20, 30, 10]);
/// # Ok::<(), linex_error::Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct FixedArray<T, const N: usize> {
    /// Inline storage; only `[0, len)` is live
    data: [T; N],

    /// Number of live elements
    /// Invariant: len <= N
    len: usize,
}

impl<T: Copy + Default, const N: usize> FixedArray<T, N> {
    /// Creates a new empty array.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: [T::default(); N],
            len: 0,
        }
    }

    /// Creates an array pre-seeded with `values`, live from index 0.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCapacity` if `values` holds more than `N` elements.
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() > N {
            bail!(
                "FixedArray",
                "from_slice",
                kinds::invalid_capacity("FixedArray seed exceeds capacity")
            );
        }
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::StructureTrace::seeding("FixedArray", values.len(), N).entered();

        let mut array = Self::new();
        array.data[..values.len()].copy_from_slice(values);
        array.len = values.len();
        Ok(array)
    }
}

impl<T: Copy, const N: usize> FixedArray<T, N> {
    /// Appends `value` after the last live element.
    ///
    /// O(1): one write at `len`, then the increment.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the array is full.
    pub fn insert_at_end(&mut self, value: T) -> Result<usize> {
        if self.len >= N {
            bail!("FixedArray", "insert_at_end", kinds::capacity_exceeded("FixedArray is full"));
        }
        let index = self.len;
        self.data[index] = value;
        self.len += 1;
        trace_op!("FixedArray", "insert_at_end", index = index);
        Ok(index)
    }

    /// Inserts `value` at index 0, shifting every live element right.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the array is full.
    pub fn insert_at_beginning(&mut self, value: T) -> Result<usize> {
        self.insert_at_index(0, value)
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` is a valid append position.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the array is full, or `InvalidIndex`
    /// if `index > len`. Fullness is checked first.
    pub fn insert_at_index(&mut self, index: usize, value: T) -> Result<usize> {
        if self.len >= N {
            bail!("FixedArray", "insert_at_index", kinds::capacity_exceeded("FixedArray is full"));
        }
        if index > self.len {
            bail!("FixedArray", "insert_at_index", kinds::invalid_index("Insert index past end"));
        }
        {
            shift_span!("FixedArray", "right", index, self.len - index);
            self.data.copy_within(index..self.len, index + 1);
        }
        self.data[index] = value;
        self.len += 1;
        trace_op!("FixedArray", "insert_at_index", index = index);
        Ok(index)
    }

    /// Overwrites the live element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIndex` if `index >= len`.
    pub fn update_value(&mut self, index: usize, value: T) -> Result<usize> {
        if index >= self.len {
            bail!("FixedArray", "update_value", kinds::invalid_index("Update index out of range"));
        }
        self.data[index] = value;
        trace_op!("FixedArray", "update_value", index = index);
        Ok(index)
    }

    /// Drops the last live element.
    ///
    /// O(1): only `len` changes. Returns the index the removed element
    /// occupied, which is also the new length.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStructure` if the array is empty.
    pub fn delete_at_end(&mut self) -> Result<usize> {
        if self.len == 0 {
            bail!("FixedArray", "delete_at_end", kinds::empty_structure("FixedArray is empty"));
        }
        self.len -= 1;
        trace_op!("FixedArray", "delete_at_end", index = self.len);
        Ok(self.len)
    }

    /// Removes the element at index 0, shifting the rest left.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStructure` if the array is empty.
    pub fn delete_at_beginning(&mut self) -> Result<usize> {
        self.delete_at_index(0)
    }

    /// Removes the element at `index`, shifting `(index, len)` one slot left.
    ///
    /// # Errors
    ///
    /// Returns `EmptyStructure` if the array is empty, or `InvalidIndex`
    /// if `index >= len`.
    pub fn delete_at_index(&mut self, index: usize) -> Result<usize> {
        if self.len == 0 {
            bail!("FixedArray", "delete_at_index", kinds::empty_structure("FixedArray is empty"));
        }
        if index >= self.len {
            bail!("FixedArray", "delete_at_index", kinds::invalid_index("Delete index out of range"));
        }
        {
            shift_span!("FixedArray", "left", index + 1, self.len - index - 1);
            self.data.copy_within(index + 1..self.len, index);
        }
        self.len -= 1;
        trace_op!("FixedArray", "delete_at_index", index = index);
        Ok(index)
    }

    /// Removes the first live element equal to `value`.
    ///
    /// Scans from index 0 and then behaves like
    /// [`delete_at_index`](Self::delete_at_index).
    ///
    /// # Errors
    ///
    /// Returns `ValueNotFound` if no live element matches.
    pub fn delete_by_value(&mut self, value: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        match self.as_slice().iter().position(|candidate| candidate == value) {
            Some(index) => self.delete_at_index(index),
            None => bail!("FixedArray", "delete_by_value", kinds::value_not_found("Value not found")),
        }
    }

    /// Returns the live element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data[..self.len]
    }

    /// Live elements as a mutable slice, e.g. for in-place sorting.
    ///
    /// The length cannot change through the slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data[..self.len]
    }

    /// Iterates the live elements from index 0.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Forgets every live element. O(1).
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Returns the current length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the compile-time capacity.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns `true` if no element is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is live.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedArray<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Equality only looks at live elements; stale slots are not contents.
impl<T: Copy + PartialEq, const N: usize> PartialEq for FixedArray<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Copy + Eq, const N: usize> Eq for FixedArray<T, N> {}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("len", &self.len)
            .field("capacity", &N)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use linex_error::{Error, ErrorKind};

    use super::*;

    #[test]
    fn test_new() {
        let array: FixedArray<i32, 5> = FixedArray::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 5);
        assert!(array.is_empty());
        assert!(!array.is_full());
    }

    #[test]
    fn test_insert_sequence() -> Result<()> {
        let mut array = FixedArray::<i32, 5>::new();

        assert_eq!(array.insert_at_end(10)?, 0);
        assert_eq!(array.insert_at_beginning(20)?, 0);
        assert_eq!(array.as_slice(), &[20, 10]);
        assert_eq!(array.insert_at_index(1, 30)?, 1);
        assert_eq!(array.as_slice(), &[20, 30, 10]);
        assert_eq!(array.update_value(1, 40)?, 1);
        assert_eq!(array.insert_at_end(50)?, 3);
        assert_eq!(array.insert_at_end(70)?, 4);
        assert_eq!(array.as_slice(), &[20, 40, 10, 50, 70]);
        assert!(array.is_full());

        Ok(())
    }

    #[test]
    fn test_insert_when_full_leaves_state() -> Result<()> {
        let mut array = FixedArray::<i32, 2>::from_slice(&[1, 2])?;
        let snapshot = array;

        assert_eq!(array.insert_at_end(3), Err(Error::CAPACITY_EXCEEDED));
        assert_eq!(array.insert_at_beginning(3), Err(Error::CAPACITY_EXCEEDED));
        // Fullness wins over a bad index.
        assert_eq!(array.insert_at_index(9, 3), Err(Error::CAPACITY_EXCEEDED));
        assert_eq!(array, snapshot);
        Ok(())
    }

    #[test]
    fn test_index_validation() -> Result<()> {
        let mut array = FixedArray::<i32, 5>::from_slice(&[1, 2])?;

        assert_eq!(array.insert_at_index(3, 9).unwrap_err().kind(), Some(ErrorKind::InvalidIndex));
        assert_eq!(array.update_value(2, 9), Err(Error::INVALID_INDEX));
        assert_eq!(array.delete_at_index(2), Err(Error::INVALID_INDEX));
        // Append position is valid for insert only.
        assert_eq!(array.insert_at_index(2, 3)?, 2);
        assert_eq!(array.as_slice(), &[1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_delete_sequence() -> Result<()> {
        let mut array = FixedArray::<i32, 5>::from_slice(&[10, 20, 30, 40, 50])?;

        assert_eq!(array.delete_at_end()?, 4);
        assert_eq!(array.as_slice(), &[10, 20, 30, 40]);
        assert_eq!(array.delete_at_beginning()?, 0);
        assert_eq!(array.as_slice(), &[20, 30, 40]);
        assert_eq!(array.delete_at_index(1)?, 1);
        assert_eq!(array.as_slice(), &[20, 40]);
        assert_eq!(array.delete_by_value(&40)?, 1);
        assert_eq!(array.as_slice(), &[20]);
        assert_eq!(array.delete_by_value(&100), Err(Error::VALUE_NOT_FOUND));
        assert_eq!(array.as_slice(), &[20]);
        Ok(())
    }

    #[test]
    fn test_delete_by_value_removes_first_match_only() -> Result<()> {
        let mut array = FixedArray::<i32, 5>::from_slice(&[7, 3, 7, 3])?;
        assert_eq!(array.delete_by_value(&3)?, 1);
        assert_eq!(array.as_slice(), &[7, 7, 3]);
        Ok(())
    }

    #[test]
    fn test_delete_on_empty() {
        let mut array = FixedArray::<i32, 3>::new();
        assert_eq!(array.delete_at_end(), Err(Error::EMPTY_STRUCTURE));
        assert_eq!(array.delete_at_beginning(), Err(Error::EMPTY_STRUCTURE));
        assert_eq!(array.delete_at_index(0), Err(Error::EMPTY_STRUCTURE));
        assert_eq!(array.delete_by_value(&1), Err(Error::VALUE_NOT_FOUND));
        assert!(array.is_empty());
    }

    #[test]
    fn test_from_slice_too_long() {
        let result = FixedArray::<i32, 2>::from_slice(&[1, 2, 3]);
        assert_eq!(result.unwrap_err(), Error::INVALID_CAPACITY);
    }

    #[test]
    fn test_stale_slots_do_not_affect_equality() -> Result<()> {
        let mut shrunk = FixedArray::<i32, 3>::from_slice(&[1, 2, 3])?;
        shrunk.delete_at_end()?;
        let fresh = FixedArray::<i32, 3>::from_slice(&[1, 2])?;
        assert_eq!(shrunk, fresh);
        assert_eq!(shrunk.get(2), None);
        Ok(())
    }

    #[test]
    fn test_zero_capacity() {
        let mut array = FixedArray::<u8, 0>::new();
        assert!(array.is_full());
        assert_eq!(array.insert_at_end(1), Err(Error::CAPACITY_EXCEEDED));
    }
}
