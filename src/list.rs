//! Singly linked list with O(1) tail append.
//!
//! [`List`] keeps head and tail links so appending never walks the chain.
//! Index operations walk from the head; [`List::pop`] removes the *tail*
//! (the most recently appended element), while [`List::pop_front`] removes
//! the head in O(1).
//!
//! The list is the sequence producer for [`Vector`]'s bulk-load boundary:
//! [`List::to_vector`] emits elements in traversal order into a vector
//! whose capacity equals the list length.
//!
//! # Example
//!
//! ```
//! use strux::List;
//!
//! let mut list: List<u64> = List::new();
//! list.push(1);
//! list.push(2);
//! list.push(3);
//!
//! assert_eq!(list.peek(), Ok(&1));
//! assert_eq!(list.pop(), Ok(3));
//! assert_eq!(list.to_vector().as_slice(), &[1, 2]);
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::{EmptyError, IndexError};
use crate::vector::Vector;

struct Node<T> {
    data: T,
    next: Option<NonNull<Node<T>>>,
}

/// Singly linked list with head and tail links.
pub struct List<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a value at the tail in O(1).
    pub fn push(&mut self, value: T) {
        let node = Self::allocate_node(value);
        match self.tail {
            // Safety: the tail is a live node owned by this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Prepends a value at the head in O(1).
    pub fn push_front(&mut self, value: T) {
        let node = Self::allocate_node(value);
        // Safety: the fresh node is not linked anywhere yet.
        unsafe {
            (*node.as_ptr()).next = self.head;
        }
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Inserts a value at `idx`, walking from the head. `idx == len`
    /// appends.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx > len`; the list is unchanged.
    pub fn insert(&mut self, idx: usize, value: T) -> Result<(), IndexError> {
        if idx > self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        if idx == 0 {
            self.push_front(value);
        } else if idx == self.len {
            self.push(value);
        } else {
            let prev = self.node_at(idx - 1);
            let node = Self::allocate_node(value);
            // Safety: `prev` is live and `node` is fresh; relinking keeps
            // every node reachable exactly once.
            unsafe {
                (*node.as_ptr()).next = (*prev.as_ptr()).next;
                (*prev.as_ptr()).next = Some(node);
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Returns a reference to the element at `idx`, walking from the head.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`.
    pub fn get(&self, idx: usize) -> Result<&T, IndexError> {
        self.iter()
            .nth(idx)
            .ok_or(IndexError { index: idx, len: self.len })
    }

    /// Returns a mutable reference to the element at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`.
    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T, IndexError> {
        let len = self.len;
        self.iter_mut()
            .nth(idx)
            .ok_or(IndexError { index: idx, len })
    }

    /// Overwrites the element at `idx`, dropping the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`; the list is unchanged.
    pub fn set(&mut self, idx: usize, value: T) -> Result<(), IndexError> {
        *self.get_mut(idx)? = value;
        Ok(())
    }

    /// Removes and returns the element at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`; the list is unchanged.
    pub fn remove(&mut self, idx: usize) -> Result<T, IndexError> {
        if idx >= self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        let prev = if idx == 0 {
            None
        } else {
            Some(self.node_at(idx - 1))
        };
        Ok(self.unlink_next(prev))
    }

    /// Removes and returns the tail element, walking the chain to relink.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the list is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        if self.is_empty() {
            return Err(EmptyError);
        }
        let prev = if self.len == 1 {
            None
        } else {
            Some(self.node_at(self.len - 2))
        };
        Ok(self.unlink_next(prev))
    }

    /// Removes and returns the head element in O(1).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, EmptyError> {
        if self.is_empty() {
            return Err(EmptyError);
        }
        Ok(self.unlink_next(None))
    }

    /// Returns a reference to the head element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the list is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        match self.head {
            // Safety: the head is a live node owned by this list.
            Some(node) => Ok(unsafe { &(*node.as_ptr()).data }),
            None => Err(EmptyError),
        }
    }

    /// Returns a mutable reference to the head element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the list is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyError> {
        match self.head {
            // Safety: the head is live and `&mut self` grants exclusivity.
            Some(node) => Ok(unsafe { &mut (*node.as_ptr()).data }),
            None => Err(EmptyError),
        }
    }

    /// Drops every element and frees every node.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(node) = current {
            // Safety: each node is owned by the list and freed once.
            let boxed = unsafe { Box::from_raw(node.as_ptr()) };
            current = boxed.next;
        }
    }

    /// Reverses the chain in place by rewriting the links. A no-op for
    /// empty and single-element lists.
    pub fn reverse(&mut self) {
        let mut reversed: Option<NonNull<Node<T>>> = None;
        let mut current = self.head.take();
        self.tail = current;
        while let Some(node) = current {
            // Safety: `node` is live; each link is rewritten exactly once.
            unsafe {
                current = (*node.as_ptr()).next;
                (*node.as_ptr()).next = reversed;
            }
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Copies the elements in traversal order into a [`Vector`] whose
    /// capacity equals the list length.
    pub fn to_vector(&self) -> Vector<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Returns a mutable iterator from head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    // ========================================================================
    // Node plumbing
    // ========================================================================

    fn allocate_node(data: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { data, next: None })))
    }

    /// Walks to the node at `idx`. The caller has already checked
    /// `idx < len`.
    fn node_at(&self, idx: usize) -> NonNull<Node<T>> {
        debug_assert!(idx < self.len);
        let mut current = self.head;
        let mut remaining = idx;
        while let Some(node) = current {
            if remaining == 0 {
                return node;
            }
            remaining -= 1;
            // Safety: every hop inside `0..len` lands on a live node.
            current = unsafe { (*node.as_ptr()).next };
        }
        unreachable!("index {idx} beyond live chain")
    }

    /// Unlinks and returns the node after `prev`, or the head when `prev`
    /// is `None`. The caller guarantees that node exists.
    fn unlink_next(&mut self, prev: Option<NonNull<Node<T>>>) -> T {
        let link = match prev {
            // Safety: `prev` is a live node of this list.
            Some(node) => unsafe { &mut (*node.as_ptr()).next },
            None => &mut self.head,
        };
        let target = match link.take() {
            Some(node) => node,
            None => unreachable!("caller guarantees a successor"),
        };
        // Safety: `target` is unlinked; the Box resumes sole ownership.
        let boxed = unsafe { Box::from_raw(target.as_ptr()) };
        *link = boxed.next;
        if boxed.next.is_none() {
            self.tail = prev;
        }
        self.len -= 1;
        boxed.data
    }
}

impl<T: PartialEq> List<T> {
    /// Returns the index of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` if no element matches; absence is not an error.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let idx = self.find(value)?;
        self.remove(idx).ok()
    }
}

impl<T: Clone> List<T> {
    /// Builds a list from a slice, preserving order.
    pub fn from_slice(items: &[T]) -> Self {
        items.iter().cloned().collect()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Safety: the list owns every node; sending it moves sole ownership.
unsafe impl<T: Send> Send for List<T> {}

// Safety: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for List<T> {}

/// Borrowing iterator for [`List`], head to tail.
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        // Safety: nodes stay alive for 'a while the list is borrowed.
        unsafe {
            self.current = (*node.as_ptr()).next;
            self.remaining -= 1;
            Some(&(*node.as_ptr()).data)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutable borrowing iterator for [`List`], head to tail.
pub struct IterMut<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        let node = self.current?;
        // Safety: the list is exclusively borrowed for 'a and each node is
        // visited once, so no aliasing `&mut` is produced.
        unsafe {
            self.current = (*node.as_ptr()).next;
            self.remaining -= 1;
            Some(&mut (*node.as_ptr()).data)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

/// Consuming iterator for [`List`], head to tail.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}
