//! The growable sequence container and its trait implementations.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut, Range};

use simplevec_common::{Result, verify_index};
use simplevec_owned_buffer::OwnedBuffer;

use crate::growth;
use crate::hint::CapacityHint;

/// A growable, contiguous sequence of `T` on top of an [`OwnedBuffer`].
///
/// The vector owns a buffer of `capacity` slots. The first `len` slots form the
/// live range and hold the elements of the sequence; the remaining slots are
/// allocated filler holding default or stale values. When a push or an insert
/// finds the buffer full, a new buffer is allocated according to the
/// [growth policy](crate::growth), the live elements are moved into it and the
/// buffers are swapped.
///
/// # Access
///
/// Indexing (`v[i]`) is not checked against the length: any slot of the buffer,
/// filler included, can be reached, and only an index past the capacity panics.
/// [`SimpleVector::at`] is the checked accessor, reporting an `OutOfRange` error for
/// any index outside the live range.
///
/// # Positions
///
/// [`SimpleVector::insert`] and [`SimpleVector::erase`] take positions as indices.
/// Positions are not validated; see the individual methods.
pub struct SimpleVector<T> {
    items: OwnedBuffer<T>,
    size: usize,
    capacity: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector without allocating.
    #[inline]
    pub const fn new() -> SimpleVector<T> {
        SimpleVector {
            items: OwnedBuffer::null(),
            size: 0,
            capacity: 0,
        }
    }

    /// Creates a vector holding a clone of `value` in each of `len` slots.
    pub fn from_value(len: usize, value: &T) -> SimpleVector<T>
    where
        T: Clone,
    {
        Self::from_full_buffer(OwnedBuffer::from_value(len, value), len)
    }

    /// Creates a vector holding clones of the elements of `items`, in order.
    ///
    /// The new vector's capacity equals `items.len()`.
    pub fn from_slice(items: &[T]) -> SimpleVector<T>
    where
        T: Clone,
    {
        Self::from_full_buffer(
            OwnedBuffer::from_fn(items.len(), |i| items[i].clone()),
            items.len(),
        )
    }

    /// Returns the number of elements in the live range.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Same as [`SimpleVector::len`].
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the live range as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items.as_slice()[..self.size]
    }

    /// Returns the live range as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.items.as_mut_slice()[..size]
    }

    /// Returns the `begin..end` pointer pair bounding the live range.
    ///
    /// The pointers are invalidated by any operation that reallocates or shifts
    /// the elements.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.as_slice().as_ptr_range()
    }

    /// Returns the mutable `begin..end` pointer pair bounding the live range.
    #[inline]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.as_mut_slice().as_mut_ptr_range()
    }

    /// Returns an iterator over the live range.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live range.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.size);
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns an `OutOfRange` error if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.size);
        Ok(&mut self.items[index])
    }

    /// Returns a reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.capacity()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.items.get_unchecked(index) }
    }

    /// Returns a mutable reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than `self.capacity()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.items.get_unchecked_mut(index) }
    }

    /// Removes the last element from the live range.
    ///
    /// Does nothing on an empty vector. The capacity is kept and the vacated slot
    /// keeps its value until it is overwritten.
    #[inline]
    pub fn pop_back(&mut self) {
        if self.size > 0 {
            self.size -= 1;
        }
    }

    /// Removes the element at `index`, shifting the following elements one slot
    /// to the left, and returns `index`, now the position of the element that
    /// followed the removed one.
    ///
    /// On an empty vector this is a no-op that still returns `index`.
    ///
    /// `index` must address a live element when the vector is not empty. This is
    /// checked only by a debug assertion: in release builds `index == self.len()`
    /// panics, and a larger index panics on the slice bounds.
    pub fn erase(&mut self, index: usize) -> usize {
        if self.size > 0 {
            debug_assert!(
                index < self.size,
                "erase position {index} is not a live element (len {})",
                self.size
            );
            let size = self.size;
            self.items.as_mut_slice()[index..size].rotate_left(1);
            self.size -= 1;
        }
        index
    }

    /// Truncates the live range to zero elements.
    ///
    /// The capacity and the slot contents are left untouched.
    #[inline]
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges the contents of `self` and `other` in constant time.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.items.swap(&mut other.items);
        std::mem::swap(&mut self.size, &mut other.size);
        std::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the contents out into a new vector, leaving `self` empty with zero
    /// capacity.
    pub fn take(&mut self) -> SimpleVector<T> {
        let mut taken = SimpleVector::new();
        taken.swap(self);
        taken
    }

    /// Consumes the vector, returning its buffer and the length of the live range.
    ///
    /// The buffer holds `capacity` slots, of which the first `len` are the elements.
    pub fn into_buffer(self) -> (OwnedBuffer<T>, usize) {
        (self.items, self.size)
    }

    fn from_full_buffer(items: OwnedBuffer<T>, len: usize) -> SimpleVector<T> {
        SimpleVector {
            items,
            size: len,
            capacity: len,
        }
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates a vector of `len` default-initialized elements.
    pub fn with_len(len: usize) -> SimpleVector<T> {
        Self::from_full_buffer(OwnedBuffer::new(len), len)
    }

    /// Creates an empty vector with the capacity requested by `hint`.
    pub fn with_hint(hint: CapacityHint) -> SimpleVector<T> {
        let mut vec = SimpleVector::new();
        vec.reserve(hint.capacity());
        vec
    }

    /// Creates an empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> SimpleVector<T> {
        Self::with_hint(CapacityHint::new(capacity))
    }

    /// Grows the capacity to exactly `capacity` if it is currently smaller,
    /// preserving the elements. Otherwise does nothing.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity {
            self.increase_capacity(capacity);
        }
    }

    /// Appends `value` to the end of the live range, growing the buffer if it is
    /// full.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        self.items[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `index`, shifting the elements from `index` onward one
    /// slot to the right, and returns `index`.
    ///
    /// `index == self.len()` appends. The buffer grows first if it is full, which
    /// invalidates previously obtained pointers, but not indices.
    ///
    /// `index` must not exceed `self.len()`. This is checked only by a debug
    /// assertion; in release builds a larger index panics on the slice bounds.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        debug_assert!(
            index <= self.size,
            "insert position {index} is past the end (len {})",
            self.size
        );
        self.grow_if_full();
        let slots = self.items.as_mut_slice();
        slots[index..=self.size].rotate_right(1);
        slots[index] = value;
        self.size += 1;
        index
    }

    /// Sets the length of the live range to `new_len`.
    ///
    /// - Beyond the capacity, the buffer is reallocated to
    ///   `max(new_len, 2 * capacity)` slots and the new elements are defaults.
    /// - Within the capacity, the newly exposed slots are reset to defaults.
    /// - Shrinking only moves the end of the live range.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity {
            self.increase_capacity(growth::resized_capacity(self.capacity, new_len));
        } else if new_len > self.size {
            let size = self.size;
            self.items.as_mut_slice()[size..new_len].fill_with(T::default);
        }
        self.size = new_len;
    }

    #[inline]
    fn grow_if_full(&mut self) {
        if self.size == self.capacity {
            self.increase_capacity(growth::grown_capacity(self.capacity));
        }
    }

    /// Moves the live range into a freshly allocated buffer of `new_capacity`
    /// default-initialized slots.
    #[cold]
    fn increase_capacity(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.size);
        let mut items = OwnedBuffer::new(new_capacity);
        let size = self.size;
        for (dst, src) in items
            .as_mut_slice()
            .iter_mut()
            .zip(&mut self.items.as_mut_slice()[..size])
        {
            std::mem::swap(dst, src);
        }
        log::trace!(
            "SimpleVector: reallocated {} -> {} slots, moved {} elements",
            self.capacity,
            new_capacity,
            size
        );
        self.items.swap(&mut items);
        self.capacity = new_capacity;
    }
}

impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep copy of the live range. The copy's capacity equals `self.len()`.
    fn clone(&self) -> Self {
        SimpleVector::from_slice(self.as_slice())
    }

    /// Builds the complete copy first and only then swaps it in, so a panic while
    /// cloning an element leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        SimpleVector::from_full_buffer(OwnedBuffer::from(vec), len)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(items: [T; N]) -> Self {
        SimpleVector::from(Vec::from(items))
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(items: &[T]) -> Self {
        SimpleVector::from_slice(items)
    }
}

impl<T: Default> From<CapacityHint> for SimpleVector<T> {
    fn from(hint: CapacityHint) -> Self {
        SimpleVector::with_hint(hint)
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVector::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Clone + Default + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = std::iter::Take<std::vec::IntoIter<T>>;

    /// Yields the live elements by value; the filler slots are dropped.
    fn into_iter(self) -> Self::IntoIter {
        let (mut items, len) = self.into_buffer();
        let slots = items
            .release()
            .map(|block| block.into_vec())
            .unwrap_or_default();
        slots.into_iter().take(len)
    }
}
