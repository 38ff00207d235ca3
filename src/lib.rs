//! # linear_collections
//!
//! `linear_collections` implements four classic generic linear collections:
//!
//! - [`ArrayList`]: an index-addressable sequence backed by a contiguous
//!   buffer that doubles its capacity on overflow.
//! - [`ArrayStack`]: a LIFO stack backed by the same doubling buffer.
//! - [`DoublyLinkedList`]: a non-circular doubly-linked list with a tail
//!   pointer, O(1) operations at both ends and indexed access that walks
//!   from whichever end is closer.
//! - [`LinkedQueue`]: a FIFO queue of singly-linked nodes with head and
//!   tail pointers.
//!
//! ## Absent elements
//! No collection ever stores an absent element. Inserting operations take
//! `impl Into<Option<T>>`, so a plain value can be passed as is, while `None`
//! is rejected with [`Error::InvalidArgument`] before anything is modified.
//!
//! ## Errors
//! Fallible operations return [`Result`]; a failed operation always leaves
//! the collection untouched.
//!
//! ## Example
//! ```rust
//! use linear_collections::{ArrayStack, DoublyLinkedList, Error, INITIAL_CAPACITY};
//!
//! let mut stack: ArrayStack<u32> = ArrayStack::new();
//! for i in 0..=INITIAL_CAPACITY as u32 {
//!     stack.push(i).unwrap();
//! }
//! assert_eq!(stack.capacity(), INITIAL_CAPACITY * 2);
//! assert_eq!(stack.push(None), Err(Error::InvalidArgument));
//!
//! let mut list: DoublyLinkedList<&str> = DoublyLinkedList::new();
//! list.add_to_back("b").unwrap();
//! list.add_to_front("a").unwrap();
//! assert_eq!(list.to_vec(), ["a", "b"]);
//! ```

mod array_list;
mod array_stack;
mod buffer;
mod doubly_linked_list;
mod error;
mod linked_queue;

pub use array_list::ArrayList;
pub use array_stack::ArrayStack;
pub use doubly_linked_list::DoublyLinkedList;
pub use error::{Error, Result};
pub use linked_queue::LinkedQueue;

/// Capacity of the backing buffer of a new (or cleared) [`ArrayList`] or [`ArrayStack`].
pub const INITIAL_CAPACITY: usize = 9;
