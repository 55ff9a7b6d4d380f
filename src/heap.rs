//! Binary min/max heap layered on [`Vector`].
//!
//! [`Heap`] owns its backing vector exclusively and addresses it purely by
//! index: parent `(i - 1) / 2`, children `2i + 1` and `2i + 2`. The
//! ordering mode is fixed when the heap is built, so one type serves both
//! priority directions. Bulk construction heapifies in O(n); push, pop,
//! and removal by value repair in O(log n) plus the O(n) lookup for the
//! value search.
//!
//! # Example
//!
//! ```
//! use strux::{Heap, HeapKind};
//!
//! let mut heap = Heap::new(HeapKind::Min);
//! for value in [5, 3, 8, 1, 2] {
//!     heap.push(value);
//! }
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert!(heap.is_valid_heap());
//! ```

use core::slice;

use crate::error::{CapacityError, EmptyError};
use crate::vector::Vector;

/// Ordering mode, fixed at heap construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapKind {
    /// Smallest element at the root; pops come out ascending.
    Min,
    /// Largest element at the root; pops come out descending.
    Max,
}

impl HeapKind {
    /// `true` when `a` may sit above `b`. Ties dominate, so equal values
    /// are interchangeable as parents.
    #[inline]
    fn dominates<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            HeapKind::Min => a <= b,
            HeapKind::Max => a >= b,
        }
    }
}

/// Binary heap with a construction-time min/max mode.
///
/// The backing [`Vector`] is owned exclusively; its grow/decay policy is
/// observable through [`Heap::capacity`]. Elements with equal priority
/// have no guaranteed order among themselves.
#[derive(Debug, Clone)]
pub struct Heap<T: Ord> {
    heap: Vector<T>,
    kind: HeapKind,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty heap of the given kind with minimum capacity.
    pub fn new(kind: HeapKind) -> Self {
        Self {
            heap: Vector::new(),
            kind,
        }
    }

    /// Creates an empty heap with exactly `capacity` backing slots.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize, kind: HeapKind) -> Result<Self, CapacityError> {
        Ok(Self {
            heap: Vector::with_capacity(capacity)?,
            kind,
        })
    }

    /// Builds a heap from an existing vector in O(n), consuming it.
    ///
    /// Sift-down runs over every non-leaf index, last to first.
    pub fn from_vector(vector: Vector<T>, kind: HeapKind) -> Self {
        let mut heap = Self { heap: vector, kind };
        for idx in (0..heap.heap.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    /// Builds a heap from a slice in O(n); backing capacity is exactly
    /// `items.len()` (minimum capacity for an empty slice).
    pub fn from_slice(items: &[T], kind: HeapKind) -> Self
    where
        T: Clone,
    {
        Self::from_vector(Vector::from_slice(items), kind)
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the backing vector's capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Returns the configured ordering mode.
    #[inline]
    pub const fn kind(&self) -> HeapKind {
        self.kind
    }

    /// Returns `true` for a min-heap.
    #[inline]
    pub const fn is_min(&self) -> bool {
        matches!(self.kind, HeapKind::Min)
    }

    /// Returns `true` for a max-heap.
    #[inline]
    pub const fn is_max(&self) -> bool {
        matches!(self.kind, HeapKind::Max)
    }

    /// Pushes a value and restores the heap property along its ancestor
    /// path.
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the root (minimum or maximum per the mode).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the heap is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        if self.heap.is_empty() {
            return Err(EmptyError);
        }
        Ok(self.remove_at(0))
    }

    /// Returns a reference to the root without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the heap is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.heap.as_slice().first().ok_or(EmptyError)
    }

    /// Returns the storage index of the first element equal to `value`.
    ///
    /// Storage order is unspecified beyond the heap property, so the index
    /// is only meaningful for diagnostics.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.heap.find(value)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.heap.contains(value)
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` if no element matches; absence is not an error.
    /// The heap property is restored before returning.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let idx = self.find(value)?;
        Some(self.remove_at(idx))
    }

    /// Drops every element; the backing vector resets to minimum capacity.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Checks the heap property over the whole tree.
    ///
    /// Vacuously `true` for zero or one elements. Intended for
    /// diagnostics; every public operation leaves this holding.
    pub fn is_valid_heap(&self) -> bool {
        self.valid_from(0)
    }

    /// Returns an iterator over the elements in storage order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Returns the elements in storage order.
    pub fn as_slice(&self) -> &[T] {
        self.heap.as_slice()
    }

    /// Consumes the heap and returns the backing vector in storage order.
    pub fn into_vector(self) -> Vector<T> {
        self.heap
    }

    // ========================================================================
    // Repair primitives
    // ========================================================================

    /// Removes the element at a valid storage index.
    ///
    /// The last element is swapped into the hole, the tail is popped, and
    /// the occupant is sifted down. Only if it did not move is it sifted
    /// up, covering a replacement that beats its new ancestors. Each sift
    /// is a no-op when the property already holds at `idx`.
    fn remove_at(&mut self, idx: usize) -> T {
        debug_assert!(idx < self.heap.len());
        let last = self.heap.len() - 1;
        self.heap.as_mut_slice().swap(idx, last);
        // cannot fail: the caller guarantees at least one element
        let removed = self.heap.pop().unwrap();
        if idx == self.heap.len() {
            return removed;
        }
        let settled = self.sift_down(idx);
        if settled == idx {
            self.sift_up(idx);
        }
        removed
    }

    fn sift_up(&mut self, mut idx: usize) {
        let kind = self.kind;
        let heap = self.heap.as_mut_slice();
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !kind.dominates(&heap[idx], &heap[parent]) {
                break;
            }
            heap.swap(idx, parent);
            idx = parent;
        }
    }

    /// Sinks `idx` below any dominating child; returns its final index.
    fn sift_down(&mut self, mut idx: usize) -> usize {
        let kind = self.kind;
        let heap = self.heap.as_mut_slice();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut best = idx;
            if left < heap.len() && kind.dominates(&heap[left], &heap[best]) {
                best = left;
            }
            if right < heap.len() && kind.dominates(&heap[right], &heap[best]) {
                best = right;
            }
            if best == idx {
                return idx;
            }
            heap.swap(idx, best);
            idx = best;
        }
    }

    fn valid_from(&self, idx: usize) -> bool {
        let heap = self.heap.as_slice();
        if heap.len() <= 1 || idx >= heap.len() {
            return true;
        }
        let left = 2 * idx + 1;
        let right = 2 * idx + 2;
        if left < heap.len() && !self.kind.dominates(&heap[idx], &heap[left]) {
            return false;
        }
        if right < heap.len() && !self.kind.dominates(&heap[idx], &heap[right]) {
            return false;
        }
        self.valid_from(left) && self.valid_from(right)
    }
}

impl<'a, T: Ord> IntoIterator for &'a Heap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
