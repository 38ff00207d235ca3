use std::fmt;
use std::iter;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{Error, Result};

struct Node<T> {
    data: T,
    next: Option<NonNull<Node<T>>>,
    prev: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Moves `data` into a fresh heap node and hands out its address.
    /// The node is reclaimed with [`Box::from_raw`] when it is unlinked.
    fn leak(data: T, prev: Option<NonNull<Self>>, next: Option<NonNull<Self>>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { data, next, prev })))
    }
}

/// A non-circular doubly-linked list with a tail pointer.
///
/// The list owns every node, nodes only refer to their neighbours, so
/// there is no ownership cycle. Indexed operations walk from whichever end
/// of the list is closer to the target.
///
/// # Example
/// ```rust
/// use linear_collections::DoublyLinkedList;
///
/// let mut list: DoublyLinkedList<i64> = DoublyLinkedList::new();
/// list.add_to_back(2).unwrap();
/// list.add_to_front(0).unwrap();
/// list.add_at_index(1, 1).unwrap();
///
/// assert_eq!(list.front(), Some(&0));
/// assert_eq!(list.get(1), Ok(&1));
/// assert_eq!(list.back(), Some(&2));
///
/// assert_eq!(list.remove_at_index(1), Ok(1));
/// assert_eq!(list.remove_from_back(), Ok(2));
/// assert_eq!(list.remove_from_front(), Ok(0));
/// ```
pub struct DoublyLinkedList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty `DoublyLinkedList`.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Inserts an element at `index`.
    ///
    /// O(1) for `index == 0` and `index == len`, otherwise the position is
    /// reached from the nearer end of the list.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `data` is `None`.
    /// - [`Error::IndexOutOfRange`] if `index > len`.
    pub fn add_at_index(&mut self, index: usize, data: impl Into<Option<T>>) -> Result<()> {
        let data = data.into().ok_or(Error::InvalidArgument)?;

        if index > self.len {
            return Err(Error::out_of_range(index, self.len + 1));
        }

        if index == 0 {
            self.link_front(data);
            return Ok(());
        }

        if index == self.len {
            self.link_back(data);
            return Ok(());
        }

        let successor = self
            .node_at(index)
            .ok_or_else(|| Error::out_of_range(index, self.len + 1))?;

        // SAFETY: `successor` was just found in this list.
        unsafe { self.link_before(successor, data) };
        Ok(())
    }

    /// Inserts an element at the front. O(1).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `data` is `None`.
    pub fn add_to_front(&mut self, data: impl Into<Option<T>>) -> Result<()> {
        let data = data.into().ok_or(Error::InvalidArgument)?;
        self.link_front(data);
        Ok(())
    }

    /// Appends an element to the back. O(1).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `data` is `None`.
    pub fn add_to_back(&mut self, data: impl Into<Option<T>>) -> Result<()> {
        let data = data.into().ok_or(Error::InvalidArgument)?;
        self.link_back(data);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// O(1) for the first and the last index, otherwise the node is reached
    /// from the nearer end of the list and spliced out of it.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove_at_index(&mut self, index: usize) -> Result<T> {
        let node = self
            .node_at(index)
            .ok_or_else(|| Error::out_of_range(index, self.len))?;

        // SAFETY: `node` was just found in this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes and returns the first element. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_from_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::EmptyCollection)?;

        // SAFETY: the head always belongs to this list.
        Ok(unsafe { self.unlink(head) })
    }

    /// Removes and returns the last element. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the list is empty.
    pub fn remove_from_back(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;

        // SAFETY: the tail always belongs to this list.
        Ok(unsafe { self.unlink(tail) })
    }

    /// Returns a reference to the element at `index`.
    ///
    /// O(1) for the first and the last index, otherwise the element is
    /// reached from the nearer end of the list.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Example
    /// ```rust
    /// use linear_collections::{DoublyLinkedList, Error};
    ///
    /// let mut list: DoublyLinkedList<char> = DoublyLinkedList::new();
    /// for c in ['a', 'b', 'c', 'd', 'e'] {
    ///     list.add_to_back(c).unwrap();
    /// }
    ///
    /// assert_eq!(list.get(1), Ok(&'b'));
    /// assert_eq!(list.get(3), Ok(&'d'));
    /// assert!(matches!(list.get(5), Err(Error::IndexOutOfRange { index: 5, .. })));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            // SAFETY: nodes found in this list live as long as `&self`.
            .map(|node| unsafe { &(*node.as_ptr()).data })
            .ok_or_else(|| Error::out_of_range(index, self.len))
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: the head always belongs to this list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    /// Returns a reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: the tail always belongs to this list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes every element of the list at once.
    pub fn clear(&mut self) {
        tracing::trace!(released = self.len, "clearing doubly linked list");
        drop(std::mem::take(self));
    }

    /// Removes and returns the last stored element equal to `data`.
    ///
    /// The search starts from the tail, so a match at the back is found in O(1).
    /// The returned value is the one that was stored, not `data` itself.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `data` is `None`.
    /// - [`Error::NoSuchElement`] if no element matches, including when the list is empty.
    ///
    /// # Example
    /// ```rust
    /// use linear_collections::{DoublyLinkedList, Error};
    ///
    /// let mut list: DoublyLinkedList<i32> = DoublyLinkedList::new();
    /// for value in [1, 2, 1, 3] {
    ///     list.add_to_back(value).unwrap();
    /// }
    ///
    /// assert_eq!(list.remove_last_occurrence(&1), Ok(1));
    /// assert_eq!(list.to_vec(), [1, 2, 3]);
    /// assert_eq!(list.remove_last_occurrence(&7), Err(Error::NoSuchElement));
    /// ```
    pub fn remove_last_occurrence<'a>(&mut self, data: impl Into<Option<&'a T>>) -> Result<T>
    where
        T: PartialEq + 'a,
    {
        let data = data.into().ok_or(Error::InvalidArgument)?;

        let mut cursor = self.tail;
        while let Some(node) = cursor {
            // SAFETY: `cursor` only ever walks nodes of this list.
            if unsafe { &(*node.as_ptr()).data } == data {
                // SAFETY: `node` belongs to this list.
                return Ok(unsafe { self.unlink(node) });
            }

            // SAFETY: as above.
            cursor = unsafe { (*node.as_ptr()).prev };
        }

        Err(Error::NoSuchElement)
    }

    /// Copies the elements into a `Vec`, front to back. O(n).
    ///
    /// # Example
    /// ```rust
    /// use linear_collections::DoublyLinkedList;
    ///
    /// let mut list: DoublyLinkedList<&str> = DoublyLinkedList::new();
    /// assert!(list.to_vec().is_empty());
    ///
    /// list.add_to_back("v").unwrap();
    /// assert_eq!(list.to_vec(), ["v"]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.values().cloned());
        out
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        // SAFETY: forward links always point to nodes of this list.
        iter::successors(self.head, |node| unsafe { (*node.as_ptr()).next })
            .map(|node| unsafe { &(*node.as_ptr()).data })
    }

    fn link_front(&mut self, data: T) {
        let node = Node::leak(data, None, self.head);

        match self.head {
            // SAFETY: the head always belongs to this list.
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.len += 1;
    }

    fn link_back(&mut self, data: T) {
        let node = Node::leak(data, self.tail, None);

        match self.tail {
            // SAFETY: the tail always belongs to this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    /// Links a new node holding `data` right before `successor`.
    ///
    /// # Safety
    /// `successor` must point to a node of this list.
    unsafe fn link_before(&mut self, successor: NonNull<Node<T>>, data: T) {
        // SAFETY: guaranteed by the caller.
        let prev = unsafe { (*successor.as_ptr()).prev };
        let node = Node::leak(data, prev, Some(successor));

        // SAFETY: guaranteed by the caller.
        unsafe { (*successor.as_ptr()).prev = Some(node) };
        match prev {
            // SAFETY: back-references always point to nodes of this list.
            Some(prev) => unsafe { (*prev.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.len += 1;
    }

    /// Detaches `node` from the list, rewriting only its neighbours' links,
    /// frees it and returns its element.
    ///
    /// # Safety
    /// `node` must point to a node of this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        // SAFETY: guaranteed by the caller, the node was allocated by `Node::leak`
        // and nothing else refers to it once its neighbours are relinked below.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        match node.prev {
            // SAFETY: back-references always point to nodes of this list.
            Some(prev) => unsafe { (*prev.as_ptr()).next = node.next },
            None => self.head = node.next,
        }

        match node.next {
            // SAFETY: forward links always point to nodes of this list.
            Some(next) => unsafe { (*next.as_ptr()).prev = node.prev },
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.data
    }

    /// Finds the node at `index`, walking from the head when
    /// `len - index >= index` and from the tail otherwise.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }

        if index == self.len - 1 {
            return self.tail;
        }

        if self.len - index >= index {
            let mut node = self.head?;
            for _ in 0..index {
                // SAFETY: forward links always point to nodes of this list.
                node = unsafe { (*node.as_ptr()).next }?;
            }

            return Some(node);
        }

        let mut node = self.tail?;
        for _ in index + 1..self.len {
            // SAFETY: back-references always point to nodes of this list.
            node = unsafe { (*node.as_ptr()).prev }?;
        }

        Some(node)
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        // one node at a time, so even a long chain never recurses
        while let Some(head) = self.head {
            // SAFETY: the head always belongs to this list.
            drop(unsafe { self.unlink(head) });
        }
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        let mut this = Self::new();
        for value in self.values() {
            this.link_back(value.clone());
        }
        this
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}
