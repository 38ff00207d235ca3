use std::iter;

use crate::INITIAL_CAPACITY;

/// Contiguous storage shared by the array-backed collections.
///
/// Slots `[0, len)` always hold live values in logical order while slots
/// `[len, capacity)` are `None`. The capacity starts at [`INITIAL_CAPACITY`]
/// and doubles each time an insertion would overflow it; it never shrinks.
pub(crate) struct Buffer<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

const _: () = assert!(
    size_of::<Buffer<usize>>() == size_of::<usize>() * 3,
    "unexpected memory layout"
);

impl<T> Buffer<T> {
    pub fn new() -> Self {
        Self {
            slots: vacant_slots(INITIAL_CAPACITY),
            len: 0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        self.slots[index].as_ref()
    }

    pub fn last(&self) -> Option<&T> {
        self.get(self.len.checked_sub(1)?)
    }

    /// Live values in logical order.
    pub fn live(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }

    pub fn push(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Stores `value` at `index`, shifting `[index, len)` one slot to the right.
    ///
    /// # Panics
    /// Panics if `index > len`. Callers validate indices beforehand.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(index <= self.len);

        if self.len == self.capacity() {
            self.grow();
        }

        // slot `len` is vacant, rotating brings it down to `index`
        self.slots[index..=self.len].rotate_right(1);
        self.slots[index] = Some(value);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.remove(self.len.checked_sub(1)?)
    }

    /// Takes the value at `index` out, shifting `(index, len)` one slot to the left.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let value = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        value
    }

    /// Drops every value and starts over with a fresh buffer of initial capacity.
    pub fn clear(&mut self) {
        tracing::trace!(released = self.len, "clearing buffer");
        *self = Self::new();
    }

    fn grow(&mut self) {
        let capacity = self.capacity() * 2;
        tracing::trace!(from = self.capacity(), to = capacity, "growing buffer");

        let mut slots = vacant_slots(capacity);
        for (target, source) in slots.iter_mut().zip(&mut self.slots[..self.len]) {
            *target = source.take();
        }

        self.slots = slots;
    }
}

impl<T: Clone> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
        }
    }
}

fn vacant_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

#[cfg(test)]
mod tests {
    use crate::INITIAL_CAPACITY;
    use crate::buffer::Buffer;

    fn expected_capacity(len: usize) -> usize {
        let mut capacity = INITIAL_CAPACITY;
        while capacity < len {
            capacity *= 2;
        }
        capacity
    }

    #[test]
    fn test_new_buffer_has_initial_capacity_and_no_live_slots() {
        let sut: Buffer<i32> = Buffer::new();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.capacity(), INITIAL_CAPACITY);
        assert!(sut.slots().iter().all(Option::is_none));
    }

    #[test]
    fn test_capacity_doubles_exactly_when_full() {
        let mut sut = Buffer::new();

        for i in 0..100 {
            sut.push(i);
            assert_eq!(sut.len(), i + 1);
            assert_eq!(sut.capacity(), expected_capacity(i + 1));
        }

        assert!(sut.live().copied().eq(0..100));
        assert!(sut.slots()[100..].iter().all(Option::is_none));
    }

    #[test]
    fn test_insert_shifts_only_the_tail_of_the_live_range() {
        let mut sut = Buffer::new();
        sut.push(1);
        sut.push(3);
        sut.insert(1, 2);
        sut.insert(0, 0);

        assert!(sut.live().copied().eq([0, 1, 2, 3]));
        assert_eq!(&sut.slots()[..5], &[Some(0), Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn test_insert_into_full_buffer_at_every_index() {
        for index in 0..=INITIAL_CAPACITY {
            let mut sut = Buffer::new();
            for i in 0..INITIAL_CAPACITY {
                sut.push(i);
            }

            sut.insert(index, 100);

            let mut expected: Vec<_> = (0..INITIAL_CAPACITY).collect();
            expected.insert(index, 100);
            assert_eq!(sut.capacity(), INITIAL_CAPACITY * 2);
            assert!(sut.live().copied().eq(expected));
        }
    }

    #[test]
    fn test_remove_vacates_the_last_live_slot() {
        let mut sut = Buffer::new();
        for i in 0..5 {
            sut.push(i);
        }

        assert_eq!(sut.remove(1), Some(1));
        assert_eq!(sut.remove(10), None);
        assert_eq!(sut.pop(), Some(4));
        assert_eq!(&sut.slots()[..5], &[Some(0), Some(2), Some(3), None, None]);
    }

    #[test]
    fn test_clear_restores_initial_capacity() {
        let mut sut = Buffer::new();
        for i in 0..40 {
            sut.push(i);
        }
        assert_eq!(sut.capacity(), 72);

        sut.clear();
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.capacity(), INITIAL_CAPACITY);
        assert_eq!(sut.last(), None);
        assert_eq!(sut.pop(), None);
    }
}
