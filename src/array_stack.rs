use std::fmt;

use crate::buffer::Buffer;
use crate::{Error, Result};

/// A LIFO stack backed by a contiguous buffer that doubles on overflow.
///
/// # Example
/// ```rust
/// use linear_collections::{ArrayStack, Error};
///
/// let mut stack: ArrayStack<&str> = ArrayStack::new();
/// stack.push("a").unwrap();
/// stack.push("b").unwrap();
///
/// assert_eq!(stack.peek(), Ok(&"b"));
/// assert_eq!(stack.pop(), Ok("b"));
/// assert_eq!(stack.pop(), Ok("a"));
/// assert_eq!(stack.pop(), Err(Error::EmptyCollection));
/// ```
pub struct ArrayStack<T> {
    buffer: Buffer<T>,
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack with [`INITIAL_CAPACITY`](crate::INITIAL_CAPACITY) slots.
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
        }
    }

    /// Pushes an element on top of the stack, doubling the backing buffer when it is full.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `data` is `None`.
    pub fn push(&mut self, data: impl Into<Option<T>>) -> Result<()> {
        let data = data.into().ok_or(Error::InvalidArgument)?;
        self.buffer.push(data);
        Ok(())
    }

    /// Removes and returns the top element, vacating its slot.
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.buffer.pop().ok_or(Error::EmptyCollection)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.buffer.last().ok_or(Error::EmptyCollection)
    }

    /// Number of elements on the stack.
    #[inline]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length of the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the whole backing buffer, bottom of the stack first, vacant slots included.
    #[inline]
    pub fn as_slots(&self) -> &[Option<T>] {
        self.buffer.slots()
    }

    /// Drops every element and shrinks the buffer back to its initial capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl<T: Clone> Clone for ArrayStack<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buffer.live()).finish()
    }
}
