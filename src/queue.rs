//! FIFO queue over [`List`], tail append and head removal, all O(1).

use core::fmt;

use crate::error::EmptyError;
use crate::list::{self, List};

/// First-in first-out queue.
///
/// # Example
///
/// ```
/// use strux::Queue;
///
/// let mut queue: Queue<u64> = Queue::new();
/// queue.push(1);
/// queue.push(2);
///
/// assert_eq!(queue.peek(), Ok(&1));
/// assert_eq!(queue.pop(), Ok(1));
/// assert_eq!(queue.pop(), Ok(2));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: List<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Appends a value at the back.
    pub fn push(&mut self, value: T) {
        self.list.push(value);
    }

    /// Removes and returns the front value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.list.pop_front()
    }

    /// Returns a reference to the front value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.list.peek()
    }

    /// Returns a mutable reference to the front value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.list.peek_mut()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Queue<T> {
    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T: Clone> Queue<T> {
    /// Builds a queue with the first slice element at the front.
    pub fn from_slice(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
