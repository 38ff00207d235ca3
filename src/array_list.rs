use std::fmt;

use crate::buffer::Buffer;
use crate::{Error, Result};

/// An index-addressable sequence backed by a contiguous buffer that doubles on overflow.
///
/// Inserting operations take `impl Into<Option<T>>`: a plain value is stored,
/// while `None` is rejected with [`Error::InvalidArgument`].
///
/// # Example
/// ```rust
/// use linear_collections::ArrayList;
///
/// let mut list: ArrayList<i64> = ArrayList::new();
/// list.add_to_back(3).unwrap();
/// list.add_to_front(1).unwrap();
/// list.add_at_index(1, 2).unwrap();
///
/// assert!(!list.is_empty());
/// assert_eq!(list.len(), 3);
///
/// assert_eq!(list.remove_from_front(), Ok(1));
/// assert_eq!(list.remove_from_front(), Ok(2));
/// assert_eq!(list.remove_from_front(), Ok(3));
/// ```
pub struct ArrayList<T> {
    buffer: Buffer<T>,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty `ArrayList` with a backing buffer of [`INITIAL_CAPACITY`](crate::INITIAL_CAPACITY).
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
        }
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// Amortized O(1) when `index == len`, O(n) otherwise.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `data` is `None`.
    /// - [`Error::IndexOutOfRange`] if `index > len`.
    ///
    /// # Example
    /// ```rust
    /// use linear_collections::ArrayList;
    ///
    /// let mut list: ArrayList<i64> = ArrayList::new();
    /// list.add_at_index(0, 10).unwrap();
    /// list.add_at_index(1, 30).unwrap();
    /// list.add_at_index(1, 20).unwrap();
    ///
    /// assert_eq!(list.get(0), Ok(&10));
    /// assert_eq!(list.get(1), Ok(&20));
    /// assert_eq!(list.get(2), Ok(&30));
    /// assert!(list.add_at_index(5, 40).is_err());
    /// ```
    pub fn add_at_index(&mut self, index: usize, data: impl Into<Option<T>>) -> Result<()> {
        let data = data.into().ok_or(Error::InvalidArgument)?;

        if index > self.len() {
            return Err(Error::out_of_range(index, self.len() + 1));
        }

        self.buffer.insert(index, data);
        Ok(())
    }

    /// Inserts an element at the front, shifting every element to the right. O(n).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `data` is `None`.
    pub fn add_to_front(&mut self, data: impl Into<Option<T>>) -> Result<()> {
        self.add_at_index(0, data)
    }

    /// Appends an element to the back. Amortized O(1).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `data` is `None`.
    ///
    /// # Example
    /// ```rust
    /// use linear_collections::{ArrayList, Error};
    ///
    /// let mut list: ArrayList<&str> = ArrayList::new();
    /// list.add_to_back("a").unwrap();
    ///
    /// assert_eq!(list.add_to_back(None), Err(Error::InvalidArgument));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn add_to_back(&mut self, data: impl Into<Option<T>>) -> Result<()> {
        self.add_at_index(self.len(), data)
    }

    /// Removes and returns the element at `index`, shifting subsequent elements to the left.
    ///
    /// O(1) for the last index, O(n) otherwise.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at_index(&mut self, index: usize) -> Result<T> {
        self.buffer
            .remove(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    /// Removes and returns the first element, shifting every other one. O(n).
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_from_front(&mut self) -> Result<T> {
        self.buffer.remove(0).ok_or(Error::EmptyCollection)
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_from_back(&mut self) -> Result<T> {
        self.buffer.pop().ok_or(Error::EmptyCollection)
    }

    /// Returns a reference to the element at `index`. O(1).
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.buffer
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.len()))
    }

    /// Returns the number of stored elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Checks whether the list holds no element.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the whole backing buffer, vacant slots included.
    ///
    /// # Example
    /// ```rust
    /// use linear_collections::{ArrayList, INITIAL_CAPACITY};
    ///
    /// let mut list: ArrayList<char> = ArrayList::new();
    /// list.add_to_back('x').unwrap();
    ///
    /// let slots = list.as_slots();
    /// assert_eq!(slots.len(), INITIAL_CAPACITY);
    /// assert_eq!(slots[0], Some('x'));
    /// assert!(slots[1..].iter().all(Option::is_none));
    /// ```
    #[inline]
    pub fn as_slots(&self) -> &[Option<T>] {
        self.buffer.slots()
    }

    /// Removes every element and resets the backing buffer to its initial capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.live()).finish()
    }
}
