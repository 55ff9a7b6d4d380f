//! LIFO stack over [`List`], all operations O(1) at the head.

use core::fmt;

use crate::error::EmptyError;
use crate::list::{self, List};

/// Last-in first-out stack.
///
/// # Example
///
/// ```
/// use strux::Stack;
///
/// let mut stack: Stack<u64> = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Ok(&2));
/// assert_eq!(stack.pop(), Ok(2));
/// assert_eq!(stack.pop(), Ok(1));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: List<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Pushes a value onto the top.
    pub fn push(&mut self, value: T) {
        self.list.push_front(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.list.pop_front()
    }

    /// Returns a reference to the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.list.peek()
    }

    /// Returns a mutable reference to the top value.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the stack is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.list.peek_mut()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Returns an iterator from top to bottom.
    pub fn iter(&self) -> list::Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: PartialEq> Stack<T> {
    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.list.contains(value)
    }
}

impl<T: Clone> Stack<T> {
    /// Builds a stack by pushing each slice element in order, so the last
    /// element ends up on top.
    pub fn from_slice(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let stack: Stack<u64> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn lifo_order() {
        let mut stack = Stack::new();
        for value in [1, 2, 3, 4] {
            stack.push(value);
        }
        assert_eq!(stack.pop(), Ok(4));
        assert_eq!(stack.pop(), Ok(3));
        stack.push(9);
        assert_eq!(stack.pop(), Ok(9));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert_eq!(stack.pop(), Err(EmptyError));
    }

    #[test]
    fn peek_sees_top() {
        let mut stack = Stack::new();
        assert_eq!(stack.peek(), Err(EmptyError));
        stack.push(7);
        stack.push(8);
        assert_eq!(stack.peek(), Ok(&8));
        *stack.peek_mut().unwrap() = 80;
        assert_eq!(stack.pop(), Ok(80));
    }

    #[test]
    fn from_slice_puts_last_on_top() {
        let mut stack = Stack::from_slice(&[1, 2, 3]);
        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
    }

    #[test]
    fn iter_runs_top_to_bottom() {
        let stack = Stack::from_slice(&[1, 2, 3]);
        let collected: Vec<u64> = stack.iter().copied().collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[test]
    fn contains_and_clear() {
        let mut stack = Stack::from_slice(&[1, 2, 3]);
        assert!(stack.contains(&2));
        assert!(!stack.contains(&9));
        stack.clear();
        assert!(stack.is_empty());
        stack.push(1);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn works_with_owned_values() {
        let mut stack = Stack::new();
        stack.push(String::from("alpha"));
        stack.push(String::from("beta"));
        assert_eq!(stack.pop().unwrap(), "beta");
        assert_eq!(stack.pop().unwrap(), "alpha");
    }
}
