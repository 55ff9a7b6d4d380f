//! Growable array with amortized doubling and quarter-occupancy decay.
//!
//! [`Vector`] keeps its elements in one owned heap buffer. Pushing into a
//! full vector doubles capacity; a removal that leaves occupancy at or
//! below a quarter shrinks capacity to a quarter. The asymmetric factors
//! leave slack after every resize, so alternating push/pop at a capacity
//! boundary never reallocates on each call.
//!
//! # Example
//!
//! ```
//! use strux::Vector;
//!
//! let mut v: Vector<u64> = Vector::new();
//! v.push(1);
//! v.push(2);
//! v.push(3);
//!
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.get(0), Ok(&1));
//! assert_eq!(v.pop(), Ok(3));
//! ```

use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;
use core::slice;
use std::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use std::ptr;

use crate::error::{CapacityError, EmptyError, IndexError};

/// Dynamically sized array with explicit grow/decay behavior.
///
/// # Resizing
///
/// - Capacity never drops below [`Vector::MIN_CAPACITY`].
/// - A push or insert into a full vector multiplies capacity by
///   [`Vector::GROWTH_FACTOR`].
/// - A remove or pop that leaves `0 < len <= capacity / DECAY_FACTOR`
///   shrinks capacity to `capacity / DECAY_FACTOR` (floored at
///   `MIN_CAPACITY`). Emptying the vector entirely does *not* shrink it;
///   [`Vector::clear`] is the release path and resets capacity to the
///   minimum.
///
/// # Example
///
/// ```
/// use strux::Vector;
///
/// let mut v = Vector::from_slice(&[10, 20, 30]);
/// assert_eq!(v.capacity(), 3);
///
/// v.insert(1, 15)?;
/// assert_eq!(v.as_slice(), &[10, 15, 20, 30]);
///
/// assert_eq!(v.remove(0)?, 10);
/// assert_eq!(v.find(&20), Some(1));
/// # Ok::<(), strux::IndexError>(())
/// ```
pub struct Vector<T> {
    /// Buffer start; dangling when `T` is zero-sized.
    ptr: NonNull<T>,
    /// Live elements occupy slots `0..len`.
    len: usize,
    /// Allocated slots, always `>= MIN_CAPACITY`.
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> Vector<T> {
    /// Capacity multiplier applied when a full vector grows.
    pub const GROWTH_FACTOR: usize = 2;

    /// Capacity divisor applied when a sparse vector shrinks.
    pub const DECAY_FACTOR: usize = 4;

    /// Smallest capacity a vector ever holds.
    pub const MIN_CAPACITY: usize = 1;

    /// Creates an empty vector with the minimum capacity.
    pub fn new() -> Self {
        Self {
            ptr: Self::allocate(Self::MIN_CAPACITY),
            len: 0,
            cap: Self::MIN_CAPACITY,
            _marker: PhantomData,
        }
    }

    /// Creates an empty vector with exactly `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }
        Ok(Self {
            ptr: Self::allocate(capacity),
            len: 0,
            cap: capacity,
            _marker: PhantomData,
        })
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: slots `0..len` are initialized.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: slots `0..len` are initialized.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`.
    pub fn get(&self, idx: usize) -> Result<&T, IndexError> {
        if idx >= self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        Ok(&self.as_slice()[idx])
    }

    /// Returns a mutable reference to the element at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`.
    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T, IndexError> {
        if idx >= self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        Ok(&mut self.as_mut_slice()[idx])
    }

    /// Overwrites the element at `idx`, dropping the previous value.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`; the vector is unchanged.
    pub fn set(&mut self, idx: usize, value: T) -> Result<(), IndexError> {
        if idx >= self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        self.as_mut_slice()[idx] = value;
        Ok(())
    }

    /// Appends an element, growing the buffer if full.
    pub fn push(&mut self, value: T) {
        if self.len == self.cap {
            self.grow();
        }
        // Safety: after the growth check `len < cap`, so slot `len` is
        // in bounds and vacant.
        unsafe {
            self.ptr.as_ptr().add(self.len).write(value);
        }
        self.len += 1;
    }

    /// Inserts `value` at `idx`, shifting `idx..len` one slot right.
    ///
    /// `idx == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx > len`; the vector is unchanged.
    pub fn insert(&mut self, idx: usize, value: T) -> Result<(), IndexError> {
        if idx > self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        if self.len == self.cap {
            self.grow();
        }
        // Safety: `idx <= len < cap`, so the shifted range and the target
        // slot stay inside the buffer; the vacated slot is written before
        // `len` is bumped.
        unsafe {
            let base = self.ptr.as_ptr();
            ptr::copy(base.add(idx), base.add(idx + 1), self.len - idx);
            base.add(idx).write(value);
        }
        self.len += 1;
        Ok(())
    }

    /// Inserts every element of `items` starting at `idx`, preserving
    /// their order.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx > len`; the vector is unchanged.
    pub fn insert_slice(&mut self, idx: usize, items: &[T]) -> Result<(), IndexError>
    where
        T: Clone,
    {
        if idx > self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        for (offset, item) in items.iter().enumerate() {
            // Position is valid by construction once `idx` passed the check.
            let _ = self.insert(idx + offset, item.clone());
        }
        Ok(())
    }

    /// Removes and returns the element at `idx`, shifting the tail left.
    ///
    /// Shrinks the buffer when occupancy falls to a quarter; see the
    /// type-level resizing notes.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `idx >= len`; the vector is unchanged.
    pub fn remove(&mut self, idx: usize) -> Result<T, IndexError> {
        if idx >= self.len {
            return Err(IndexError { index: idx, len: self.len });
        }
        // Safety: `idx < len`, so the slot is initialized; the shift
        // source range `idx + 1..len` is live.
        let value = unsafe {
            let base = self.ptr.as_ptr();
            let value = base.add(idx).read();
            ptr::copy(base.add(idx + 1), base.add(idx), self.len - idx - 1);
            value
        };
        self.len -= 1;
        self.maybe_decay();
        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// Decay applies as for [`Vector::remove`]; popping the final element
    /// leaves capacity untouched.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the vector is empty.
    pub fn pop(&mut self) -> Result<T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        self.len -= 1;
        // Safety: slot `len` held the last live element.
        let value = unsafe { self.ptr.as_ptr().add(self.len).read() };
        self.maybe_decay();
        Ok(value)
    }

    /// Drops every element and resets capacity to the minimum.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // Safety: `live` covers exactly the elements that were live before
        // `len` was reset; the buffer is released only after they drop.
        unsafe {
            ptr::drop_in_place(live);
        }
        Self::release(self.ptr, self.cap);
        self.ptr = Self::allocate(Self::MIN_CAPACITY);
        self.cap = Self::MIN_CAPACITY;
    }

    /// Reverses the elements in place. Length and capacity are unchanged.
    pub fn reverse(&mut self) {
        self.as_mut_slice().reverse();
    }

    // ========================================================================
    // Buffer management
    // ========================================================================

    fn allocate(cap: usize) -> NonNull<T> {
        debug_assert!(cap >= Self::MIN_CAPACITY);
        if mem::size_of::<T>() == 0 {
            return NonNull::dangling();
        }
        let layout = Layout::array::<T>(cap).unwrap();
        // Safety: `cap >= 1` and `T` is not zero-sized, so the layout has
        // non-zero size.
        let raw = unsafe { alloc(layout) };
        if raw.is_null() {
            handle_alloc_error(layout);
        }
        // Safety: null was just ruled out.
        unsafe { NonNull::new_unchecked(raw as *mut T) }
    }

    fn release(ptr: NonNull<T>, cap: usize) {
        if mem::size_of::<T>() == 0 {
            return;
        }
        // Safety: `ptr` came from `allocate` with this exact capacity.
        unsafe {
            dealloc(ptr.as_ptr() as *mut u8, Layout::array::<T>(cap).unwrap());
        }
    }

    /// Moves the live prefix into a fresh buffer of `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        debug_assert!(new_cap >= Self::MIN_CAPACITY);
        if new_cap == self.cap {
            return;
        }
        let new_ptr = Self::allocate(new_cap);
        // Safety: both buffers hold at least `len` slots and never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len);
        }
        Self::release(self.ptr, self.cap);
        self.ptr = new_ptr;
        self.cap = new_cap;
    }

    fn grow(&mut self) {
        self.reallocate(self.cap * Self::GROWTH_FACTOR);
    }

    /// Shrinks after a removal once occupancy drops to a quarter of
    /// capacity. A vector emptied to zero keeps its capacity.
    fn maybe_decay(&mut self) {
        if self.len > 0 && self.len <= self.cap / Self::DECAY_FACTOR {
            let target = (self.cap / Self::DECAY_FACTOR).max(Self::MIN_CAPACITY);
            self.reallocate(target);
        }
    }
}

impl<T: PartialEq> Vector<T> {
    /// Returns the index of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the indices of every element equal to `value`, ascending.
    pub fn find_all(&self, value: &T) -> Vector<usize> {
        let mut indices = Vector::new();
        for (idx, item) in self.iter().enumerate() {
            if item == value {
                indices.push(idx);
            }
        }
        indices
    }

    /// Removes the first element equal to `value` and returns it.
    ///
    /// Returns `None` if no element matches; absence is not an error.
    pub fn remove_value(&mut self, value: &T) -> Option<T> {
        let idx = self.find(value)?;
        self.remove(idx).ok()
    }
}

impl<T: Clone> Vector<T> {
    /// Builds a vector from a slice with capacity exactly `items.len()`
    /// (the minimum capacity for an empty slice).
    pub fn from_slice(items: &[T]) -> Self {
        let cap = items.len().max(Self::MIN_CAPACITY);
        let mut vector = Self {
            ptr: Self::allocate(cap),
            len: 0,
            cap,
            _marker: PhantomData,
        };
        vector.extend_from_slice(items);
        vector
    }

    /// Appends every element of `items` in order.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        for item in items {
            self.push(item.clone());
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    /// Collects a sequence with final capacity exactly the element count
    /// (the minimum capacity for an empty sequence).
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vector = Vector::new();
        for item in iter {
            vector.push(item);
        }
        let tight = vector.len.max(Self::MIN_CAPACITY);
        vector.reallocate(tight);
        vector
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut clone = Self {
            ptr: Self::allocate(self.cap),
            len: 0,
            cap: self.cap,
            _marker: PhantomData,
        };
        clone.extend_from_slice(self.as_slice());
        clone
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Safety: drops exactly the live prefix before the buffer is freed.
        unsafe {
            ptr::drop_in_place(self.as_mut_slice() as *mut [T]);
        }
        Self::release(self.ptr, self.cap);
    }
}

// Safety: the vector owns its buffer exclusively; moving it across threads
// moves sole ownership of the elements.
unsafe impl<T: Send> Send for Vector<T> {}

// Safety: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let vector = mem::ManuallyDrop::new(self);
        IntoIter {
            ptr: vector.ptr,
            cap: vector.cap,
            start: 0,
            end: vector.len,
            _marker: PhantomData,
        }
    }
}

/// Consuming iterator for [`Vector`].
///
/// Unconsumed elements are dropped with the iterator.
pub struct IntoIter<T> {
    ptr: NonNull<T>,
    cap: usize,
    start: usize,
    end: usize,
    _marker: PhantomData<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        // Safety: slots `start..end` are initialized and each is read once.
        let value = unsafe { self.ptr.as_ptr().add(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // Safety: slot `end` was live and is read exactly once.
        Some(unsafe { self.ptr.as_ptr().add(self.end).read() })
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Safety: `start..end` are the elements not yet handed out.
        unsafe {
            let live = ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(self.start),
                self.end - self.start,
            );
            ptr::drop_in_place(live);
        }
        Vector::<T>::release(self.ptr, self.cap);
    }
}

// Safety: the iterator owns the remaining elements.
unsafe impl<T: Send> Send for IntoIter<T> {}
unsafe impl<T: Sync> Sync for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let v: Vector<u64> = Vector::new();
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn default_matches_new() {
        let v: Vector<u64> = Vector::default();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn with_capacity_sets_capacity() {
        let v: Vector<u64> = Vector::with_capacity(16).unwrap();
        assert_eq!(v.capacity(), 16);
        assert!(v.is_empty());
    }

    #[test]
    fn with_capacity_zero_fails() {
        assert_eq!(Vector::<u64>::with_capacity(0), Err(CapacityError));
    }

    #[test]
    fn push_then_get() {
        let mut v = Vector::new();
        v.push(10);
        v.push(20);
        v.push(30);
        assert_eq!(v.get(0), Ok(&10));
        assert_eq!(v.get(1), Ok(&20));
        assert_eq!(v.get(2), Ok(&30));
    }

    #[test]
    fn capacity_doubles_on_growth() {
        let mut v = Vector::new();
        let mut caps = vec![v.capacity()];
        for i in 0..5 {
            v.push(i);
            caps.push(v.capacity());
        }
        assert_eq!(caps, [1, 1, 2, 4, 4, 8]);
    }

    #[test]
    fn pop_decays_at_quarter_occupancy() {
        let mut v = Vector::new();
        for i in 0..5 {
            v.push(i);
        }
        assert_eq!(v.capacity(), 8);

        assert_eq!(v.pop(), Ok(4));
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.pop(), Ok(3));
        assert_eq!(v.capacity(), 8);

        // len 2 <= 8 / 4 shrinks the buffer to a quarter
        assert_eq!(v.pop(), Ok(2));
        assert_eq!(v.capacity(), 2);

        // 1 > 2 / 4, and emptying the vector never decays
        assert_eq!(v.pop(), Ok(1));
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.pop(), Ok(0));
        assert_eq!(v.capacity(), 2);
        assert!(v.is_empty());
    }

    #[test]
    fn pop_empty_fails() {
        let mut v: Vector<u64> = Vector::new();
        assert_eq!(v.pop(), Err(EmptyError));
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn get_out_of_bounds_fails() {
        let mut v = Vector::new();
        v.push(1);
        assert_eq!(v.get(1), Err(IndexError { index: 1, len: 1 }));
        assert_eq!(v.get(usize::MAX), Err(IndexError { index: usize::MAX, len: 1 }));
    }

    #[test]
    fn set_overwrites_in_place() {
        let mut v = Vector::from_slice(&[1, 2, 3]);
        assert_eq!(v.set(1, 20), Ok(()));
        assert_eq!(v.as_slice(), &[1, 20, 3]);
        assert_eq!(v.set(3, 40), Err(IndexError { index: 3, len: 3 }));
        assert_eq!(v.as_slice(), &[1, 20, 3]);
    }

    #[test]
    fn get_mut_allows_update() {
        let mut v = Vector::from_slice(&[5, 6]);
        *v.get_mut(0).unwrap() += 100;
        assert_eq!(v.as_slice(), &[105, 6]);
        assert!(v.get_mut(2).is_err());
    }

    #[test]
    fn insert_shifts_right() {
        let mut v = Vector::from_slice(&[1, 2, 4]);
        v.insert(2, 3).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut v = Vector::from_slice(&[1, 2]);
        v.insert(2, 3).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn insert_beyond_len_fails() {
        let mut v = Vector::from_slice(&[1, 2]);
        assert_eq!(v.insert(3, 9), Err(IndexError { index: 3, len: 2 }));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn insert_grows_when_full() {
        let mut v = Vector::from_slice(&[1, 3]);
        assert_eq!(v.capacity(), 2);
        v.insert(1, 2).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn insert_slice_keeps_order() {
        let mut v = Vector::from_slice(&[1, 5]);
        v.insert_slice(1, &[2, 3, 4]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);

        assert_eq!(v.insert_slice(9, &[0]), Err(IndexError { index: 9, len: 5 }));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn remove_shifts_left() {
        let mut v = Vector::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.remove(1), Ok(2));
        assert_eq!(v.as_slice(), &[1, 3, 4]);
    }

    #[test]
    fn remove_out_of_bounds_fails() {
        let mut v = Vector::from_slice(&[1]);
        assert_eq!(v.remove(1), Err(IndexError { index: 1, len: 1 }));
        assert_eq!(v.as_slice(), &[1]);
    }

    #[test]
    fn remove_decays_at_quarter_occupancy() {
        let mut v: Vector<u64> = Vector::new();
        for i in 0..8 {
            v.push(i);
        }
        assert_eq!(v.capacity(), 8);
        for _ in 0..6 {
            v.remove(0).unwrap();
        }
        assert_eq!(v.len(), 2);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &[6, 7]);
    }

    #[test]
    fn remove_value_takes_first_match() {
        let mut v = Vector::from_slice(&[4, 7, 4, 9]);
        assert_eq!(v.remove_value(&4), Some(4));
        assert_eq!(v.as_slice(), &[7, 4, 9]);
        assert_eq!(v.remove_value(&1), None);
        assert_eq!(v.as_slice(), &[7, 4, 9]);
    }

    #[test]
    fn find_contains_and_find_all() {
        let v = Vector::from_slice(&[4, 7, 4, 9, 4]);
        assert_eq!(v.find(&4), Some(0));
        assert_eq!(v.find(&7), Some(1));
        assert_eq!(v.find(&1), None);
        assert!(v.contains(&9));
        assert!(!v.contains(&0));
        assert_eq!(v.find_all(&4).as_slice(), &[0, 2, 4]);
        assert!(v.find_all(&1).is_empty());
    }

    #[test]
    fn clear_resets_capacity() {
        let mut v = Vector::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(v.capacity(), 8);
        v.clear();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 1);

        // still usable afterwards
        v.push(42);
        assert_eq!(v.as_slice(), &[42]);
    }

    #[test]
    fn reverse_preserves_len_and_capacity() {
        let mut v = Vector::from_slice(&[1, 2, 3, 4, 5]);
        let cap = v.capacity();
        v.reverse();
        assert_eq!(v.as_slice(), &[5, 4, 3, 2, 1]);
        assert_eq!(v.len(), 5);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    fn from_slice_capacity_is_exact() {
        let v = Vector::from_slice(&[10, 20, 30]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);

        let empty: Vector<u64> = Vector::from_slice(&[]);
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.capacity(), 1);
    }

    #[test]
    fn from_iter_capacity_is_exact() {
        let v: Vector<u64> = (0..10).collect();
        assert_eq!(v.len(), 10);
        assert_eq!(v.capacity(), 10);

        let empty: Vector<u64> = (0..0).collect();
        assert_eq!(empty.capacity(), 1);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut v = Vector::from_slice(&[1, 2]);
        v.extend(3..=5);
        v.extend_from_slice(&[6, 7]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn clone_is_independent() {
        let mut original = Vector::from_slice(&[1, 2, 3]);
        let clone = original.clone();
        assert_eq!(clone.capacity(), original.capacity());
        original.push(4);
        assert_eq!(clone.as_slice(), &[1, 2, 3]);
        assert_eq!(original.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn equality_ignores_capacity() {
        let a = Vector::from_slice(&[1, 2, 3]);
        let mut b = Vector::with_capacity(32).unwrap();
        b.extend_from_slice(&[1, 2, 3]);
        assert_eq!(a, b);
        b.push(4);
        assert_ne!(a, b);
    }

    #[test]
    fn debug_lists_elements() {
        let v = Vector::from_slice(&[1, 2, 3]);
        assert_eq!(format!("{:?}", v), "[1, 2, 3]");
    }

    #[test]
    fn into_iter_yields_all_values() {
        let v = Vector::from_slice(&[1, 2, 3, 4]);
        let collected: Vec<u64> = v.into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn into_iter_back_to_front() {
        let v = Vector::from_slice(&[1, 2, 3]);
        let collected: Vec<u64> = v.into_iter().rev().collect();
        assert_eq!(collected, vec![3, 2, 1]);
    }

    #[test]
    fn drop_cleans_up() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug)]
        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        {
            let mut v = Vector::new();
            for _ in 0..10 {
                v.push(DropCounter);
            }
            drop(v.pop());
        }

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn partial_into_iter_drops_remainder() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static DROP_COUNT: AtomicUsize = AtomicUsize::new(0);

        #[derive(Debug)]
        struct DropCounter;
        impl Drop for DropCounter {
            fn drop(&mut self) {
                DROP_COUNT.fetch_add(1, Ordering::SeqCst);
            }
        }

        DROP_COUNT.store(0, Ordering::SeqCst);

        {
            let mut v = Vector::new();
            for _ in 0..6 {
                v.push(DropCounter);
            }
            let mut iter = v.into_iter();
            drop(iter.next());
            drop(iter.next());
        }

        assert_eq!(DROP_COUNT.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = Vector::new();
        for _ in 0..100 {
            v.push(());
        }
        assert_eq!(v.len(), 100);
        for _ in 0..100 {
            v.pop().unwrap();
        }
        assert!(v.is_empty());
        assert_eq!(v.pop(), Err(EmptyError));
    }

    #[test]
    fn stress_interleaved_ops() {
        let mut v = Vector::new();
        for i in 0..1000u64 {
            v.push((i * 7 + 13) % 1000);
        }
        assert_eq!(v.len(), 1000);

        for i in 0..500 {
            let expected = ((999 - i) * 7 + 13) % 1000;
            assert_eq!(v.pop(), Ok(expected));
        }
        assert_eq!(v.len(), 500);

        for i in 0..500u64 {
            assert_eq!(v.get(i as usize), Ok(&((i * 7 + 13) % 1000)));
        }
    }

    #[test]
    fn random_ops_match_std_vec() {
        use rand::rngs::SmallRng;
        use rand::{Rng, SeedableRng};

        let mut rng = SmallRng::seed_from_u64(12345);
        let mut ours: Vector<u64> = Vector::new();
        let mut model: Vec<u64> = Vec::new();

        for _ in 0..2000 {
            if model.is_empty() || rng.random_bool(0.6) {
                let value = rng.random_range(0..10_000);
                ours.push(value);
                model.push(value);
            } else if rng.random_bool(0.5) {
                assert_eq!(ours.pop().ok(), model.pop());
            } else {
                let idx = rng.random_range(0..model.len());
                assert_eq!(ours.remove(idx).ok(), Some(model.remove(idx)));
            }
            assert_eq!(ours.len(), model.len());
        }
        assert_eq!(ours.as_slice(), model.as_slice());
    }
}
