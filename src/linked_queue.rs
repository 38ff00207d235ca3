use std::fmt;
use std::iter;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::{Error, Result};

struct Node<T> {
    data: T,
    next: Option<NonNull<Node<T>>>,
}

/// A FIFO queue backed by singly-linked nodes with head and tail pointers.
///
/// # Example
/// ```rust
/// use linear_collections::{Error, LinkedQueue};
///
/// let mut queue: LinkedQueue<char> = LinkedQueue::new();
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
///
/// assert_eq!(queue.peek(), Ok(&'a'));
/// assert_eq!(queue.dequeue(), Ok('a'));
/// assert_eq!(queue.dequeue(), Ok('b'));
/// assert_eq!(queue.dequeue(), Err(Error::EmptyCollection));
/// ```
pub struct LinkedQueue<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedQueue<T> {
    /// Creates a new, empty `LinkedQueue`.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Adds an element to the back of the queue. O(1).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `data` is `None`.
    pub fn enqueue(&mut self, data: impl Into<Option<T>>) -> Result<()> {
        let data = data.into().ok_or(Error::InvalidArgument)?;
        self.link_back(data);
        Ok(())
    }

    /// Removes and returns the element at the front of the queue. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.unlink_front().ok_or(Error::EmptyCollection)
    }

    /// Returns the element at the front of the queue without removing it. O(1).
    ///
    /// # Errors
    /// [`Error::EmptyCollection`] if the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        self.head
            // SAFETY: the head always belongs to this queue.
            .map(|node| unsafe { &(*node.as_ptr()).data })
            .ok_or(Error::EmptyCollection)
    }

    /// Number of queued elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every queued element.
    pub fn clear(&mut self) {
        tracing::trace!(released = self.len, "clearing linked queue");
        drop(std::mem::take(self));
    }

    fn link_back(&mut self, data: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { data, next: None })));

        match self.tail {
            // SAFETY: the tail always belongs to this queue.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    fn unlink_front(&mut self) -> Option<T> {
        let head = self.head?;

        // SAFETY: the head was leaked by `link_back` and is only reachable
        // from this queue, which forgets it right below.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;
        Some(node.data)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        // SAFETY: links always point to nodes of this queue.
        iter::successors(self.head, |node| unsafe { (*node.as_ptr()).next })
            .map(|node| unsafe { &(*node.as_ptr()).data })
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        while self.unlink_front().is_some() {}
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        let mut this = Self::new();
        for value in self.values() {
            this.link_back(value.clone());
        }
        this
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::mem::size_of;

    use quickcheck_macros::quickcheck;

    use crate::{Error, LinkedQueue};

    const _: () = assert!(
        size_of::<LinkedQueue<usize>>() == size_of::<usize>() * 3,
        "unexpected memory layout"
    );

    #[test]
    fn test_new_creates_empty_queue() {
        let sut: LinkedQueue<i32> = LinkedQueue::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert!(sut.head.is_none());
        assert!(sut.tail.is_none());
    }

    #[test]
    fn test_dequeue_returns_elements_in_fifo_order() {
        let mut sut: LinkedQueue<&str> = LinkedQueue::new();
        sut.enqueue("A").unwrap();
        sut.enqueue("B").unwrap();
        sut.enqueue("C").unwrap();
        assert_eq!(sut.len(), 3);

        assert_eq!(sut.dequeue(), Ok("A"));
        assert_eq!(sut.dequeue(), Ok("B"));
        assert_eq!(sut.dequeue(), Ok("C"));
        assert_eq!(sut.dequeue(), Err(Error::EmptyCollection));
        assert!(sut.is_empty());
    }

    #[test]
    fn test_dequeue_of_last_element_clears_tail() {
        let mut sut: LinkedQueue<i32> = LinkedQueue::new();
        sut.enqueue(1).unwrap();
        assert_eq!(sut.dequeue(), Ok(1));
        assert!(sut.head.is_none());
        assert!(sut.tail.is_none());

        // the queue is fully usable again
        sut.enqueue(2).unwrap();
        sut.enqueue(3).unwrap();
        assert_eq!(sut.peek(), Ok(&2));
        assert_eq!(format!("{sut:?}"), "[2, 3]");
    }

    #[test]
    fn test_interleaved_enqueue_and_dequeue_keep_the_tail_linked() {
        let mut sut: LinkedQueue<u8> = LinkedQueue::new();
        sut.enqueue(1).unwrap();
        sut.enqueue(2).unwrap();
        assert_eq!(sut.dequeue(), Ok(1));

        // the old tail is now the head and must still accept a successor
        sut.enqueue(3).unwrap();
        assert_eq!(sut.dequeue(), Ok(2));
        sut.enqueue(4).unwrap();
        sut.enqueue(5).unwrap();
        assert_eq!(format!("{sut:?}"), "[3, 4, 5]");

        assert_eq!(sut.dequeue(), Ok(3));
        assert_eq!(sut.dequeue(), Ok(4));
        assert_eq!(sut.dequeue(), Ok(5));
        assert!(sut.tail.is_none());

        sut.enqueue(6).unwrap();
        assert_eq!(sut.peek(), Ok(&6));
        assert_eq!(sut.head, sut.tail);
    }

    #[test]
    fn test_enqueue_rejects_absent_data() {
        let mut sut: LinkedQueue<i32> = LinkedQueue::new();
        sut.enqueue(1).unwrap();
        assert_eq!(sut.enqueue(None), Err(Error::InvalidArgument));
        assert_eq!(sut.len(), 1);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut sut: LinkedQueue<i32> = LinkedQueue::new();
        assert_eq!(sut.peek(), Err(Error::EmptyCollection));

        sut.enqueue(1).unwrap();
        sut.enqueue(2).unwrap();
        assert_eq!(sut.peek(), Ok(&1));
        assert_eq!(sut.peek(), Ok(&1));
        assert_eq!(sut.len(), 2);
    }

    #[test]
    fn test_clear_resets_the_queue() {
        let mut sut: LinkedQueue<i32> = LinkedQueue::new();
        for i in 0..10 {
            sut.enqueue(i).unwrap();
        }

        sut.clear();
        assert!(sut.is_empty());
        assert_eq!(sut.dequeue(), Err(Error::EmptyCollection));

        sut.enqueue(42).unwrap();
        assert_eq!(sut.dequeue(), Ok(42));
    }

    #[test]
    fn test_long_queue_drops_without_overflowing_the_stack() {
        let mut sut: LinkedQueue<u32> = LinkedQueue::new();
        for i in 0..200_000 {
            sut.enqueue(i).unwrap();
        }
        drop(sut);
    }

    #[test]
    fn test_clone_works_correctly() {
        let mut sut: LinkedQueue<String> = LinkedQueue::new();
        sut.enqueue(String::from("a")).unwrap();
        sut.enqueue(String::from("b")).unwrap();

        let mut copy = sut.clone();
        sut.clear();
        assert_eq!(copy.dequeue().as_deref(), Ok("a"));
        assert_eq!(copy.dequeue().as_deref(), Ok("b"));
        assert!(copy.is_empty());
    }

    #[quickcheck]
    fn test_linked_queue_behavioural(seed: VecDeque<i32>) {
        let mut expected = seed;
        let mut actual: LinkedQueue<i32> = LinkedQueue::new();
        for &value in &expected {
            actual.enqueue(value).unwrap();
        }

        for _ in 0..64 {
            assert_eq!(expected.is_empty(), actual.is_empty());
            assert_eq!(expected.len(), actual.len());
            assert_eq!(expected.front(), actual.peek().ok());

            if rand::random() {
                let value = rand::random();
                expected.push_back(value);
                actual.enqueue(value).unwrap();
            } else {
                assert_eq!(expected.pop_front(), actual.dequeue().ok());
            }
        }

        assert_eq!(format!("{expected:?}"), format!("{actual:?}"));
    }
}
