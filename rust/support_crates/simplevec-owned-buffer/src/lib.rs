//! An exclusively owned, fixed-length heap block of elements.
//!
//! `OwnedBuffer<T>` is the storage layer underneath `SimpleVector<T>`. It owns a
//! contiguous block in which every slot holds a constructed value, never grows or
//! shrinks, and can only change hands by move or by an explicit [`OwnedBuffer::release`].
//! The logical length of the data stored in the block is the owner's business: the
//! buffer keeps no length field of its own.

use std::fmt;
use std::ops::{Index, IndexMut};

/// A move-only owner of a contiguous heap block of `T`.
///
/// A buffer is either null (no allocation) or owns a block of exactly the number of
/// elements it was constructed with. Dropping the buffer frees the block.
///
/// `OwnedBuffer` is deliberately not `Clone`: ownership of the block is exclusive.
pub struct OwnedBuffer<T> {
    /// The owned block, `None` when the buffer is null.
    block: Option<Box<[T]>>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a null buffer, which owns no memory.
    #[inline]
    pub const fn null() -> OwnedBuffer<T> {
        OwnedBuffer { block: None }
    }

    /// Allocates a block of `len` default-initialized elements.
    ///
    /// A zero `len` yields a null buffer without allocating. Allocation failure is
    /// not reported: it aborts through the global allocator.
    pub fn new(len: usize) -> OwnedBuffer<T>
    where
        T: Default,
    {
        Self::from_fn(len, |_| T::default())
    }

    /// Allocates a block of `len` elements, each a clone of `value`.
    pub fn from_value(len: usize, value: &T) -> OwnedBuffer<T>
    where
        T: Clone,
    {
        Self::from_fn(len, |_| value.clone())
    }

    /// Allocates a block of `len` elements filled by moving `value` into every slot.
    ///
    /// # Moved-from fill
    ///
    /// Only the first slot receives `value` itself. Moving out of the source leaves it
    /// in its moved-from state, which for a Rust value is `T::default()`, and every
    /// subsequent slot is filled by moving out of that moved-from source again. For a
    /// non-trivial `T` this means slots `1..len` hold `T::default()` rather than copies
    /// of `value`. Use [`OwnedBuffer::from_value`] to replicate a value.
    pub fn from_moved_value(len: usize, mut value: T) -> OwnedBuffer<T>
    where
        T: Default,
    {
        Self::from_fn(len, |_| std::mem::take(&mut value))
    }

    /// Allocates a block of `len` elements, producing the slot at index `i` with `f(i)`.
    pub fn from_fn(len: usize, f: impl FnMut(usize) -> T) -> OwnedBuffer<T> {
        if len == 0 {
            return OwnedBuffer::null();
        }
        OwnedBuffer {
            block: Some((0..len).map(f).collect()),
        }
    }

    /// Takes ownership of an already allocated block.
    ///
    /// An empty block is normalized to a null buffer.
    pub fn from_boxed(block: Box<[T]>) -> OwnedBuffer<T> {
        if block.is_empty() {
            OwnedBuffer::null()
        } else {
            OwnedBuffer { block: Some(block) }
        }
    }

    /// Returns `true` if the buffer owns a block, `false` if it is null.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.block.is_some()
    }

    /// Relinquishes ownership of the block and hands it to the caller.
    ///
    /// The buffer becomes null; the caller is now responsible for the block.
    /// Returns `None` if the buffer was already null.
    #[must_use = "the released block is dropped immediately if unused"]
    pub fn release(&mut self) -> Option<Box<[T]>> {
        self.block.take()
    }

    /// Moves the block out into a new buffer, leaving `self` null.
    #[inline]
    pub fn take(&mut self) -> OwnedBuffer<T> {
        OwnedBuffer {
            block: self.block.take(),
        }
    }

    /// Exchanges the blocks owned by `self` and `other`.
    ///
    /// Constant time, no allocation.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        std::mem::swap(&mut self.block, &mut other.block);
    }

    /// Returns a raw pointer to the first slot of the block.
    ///
    /// For a null buffer the pointer is dangling (non-null, well aligned) and must not
    /// be dereferenced.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Returns a mutable raw pointer to the first slot of the block.
    ///
    /// For a null buffer the pointer is dangling and must not be dereferenced.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Returns the whole block as a slice, empty for a null buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match &self.block {
            Some(block) => block,
            None => &[],
        }
    }

    /// Returns the whole block as a mutable slice, empty for a null buffer.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        match &mut self.block {
            Some(block) => block,
            None => &mut [],
        }
    }

    /// Returns a reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than the number of elements the buffer was constructed
    /// with. Calling this on a null buffer, or with an index past the block, is
    /// undefined behavior.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { &*self.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the slot at `index` without any bounds check.
    ///
    /// # Safety
    ///
    /// Same contract as [`OwnedBuffer::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { &mut *self.as_mut_ptr().add(index) }
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    /// Slot access. There is no logical length to check against here; the only check
    /// is the one the block's own extent imposes, so an index past the block panics.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        OwnedBuffer::null()
    }
}

impl<T> From<Box<[T]>> for OwnedBuffer<T> {
    fn from(block: Box<[T]>) -> Self {
        OwnedBuffer::from_boxed(block)
    }
}

impl<T> From<Vec<T>> for OwnedBuffer<T> {
    fn from(vec: Vec<T>) -> Self {
        OwnedBuffer::from_boxed(vec.into_boxed_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("allocated", &self.is_allocated())
            .field("slots", &self.as_slice())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many times values sharing the same counter are dropped.
    #[derive(Default)]
    struct DropCounter(Option<Rc<Cell<usize>>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            if let Some(counter) = &self.0 {
                counter.set(counter.get() + 1);
            }
        }
    }

    #[test]
    fn test_new_is_default_filled() {
        let buf = OwnedBuffer::<i32>::new(5);
        assert!(buf.is_allocated());
        assert_eq!(buf.as_slice(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_zero_length_is_null() {
        let buf = OwnedBuffer::<String>::new(0);
        assert!(!buf.is_allocated());
        assert!(buf.as_slice().is_empty());
        assert!(!buf.as_ptr().is_null());

        let buf = OwnedBuffer::from_value(0, &7u8);
        assert!(!buf.is_allocated());

        let buf = OwnedBuffer::<u8>::from_boxed(Box::new([]));
        assert!(!buf.is_allocated());
    }

    #[test]
    fn test_from_value_clones_into_every_slot() {
        let buf = OwnedBuffer::from_value(3, &"abc".to_string());
        assert_eq!(buf.as_slice(), &["abc", "abc", "abc"]);
    }

    #[test]
    fn test_from_moved_value_fills_only_first_slot() {
        let buf = OwnedBuffer::from_moved_value(3, "abc".to_string());
        assert_eq!(buf.as_slice(), &["abc", "", ""]);

        let buf = OwnedBuffer::from_moved_value(4, Some(Box::new(9)));
        assert_eq!(buf[0].as_deref(), Some(&9));
        assert!(buf[1].is_none());
        assert!(buf[3].is_none());
    }

    #[test]
    fn test_from_fn_uses_slot_index() {
        let buf = OwnedBuffer::from_fn(4, |i| i * 10);
        assert_eq!(buf.as_slice(), &[0, 10, 20, 30]);
    }

    #[test]
    fn test_index_read_write() {
        let mut buf = OwnedBuffer::<u64>::new(4);
        buf[2] = 42;
        buf[0] += 1;
        assert_eq!(buf[2], 42);
        assert_eq!(buf[0], 1);
        assert_eq!(unsafe { *buf.get_unchecked(2) }, 42);
        unsafe {
            *buf.get_unchecked_mut(3) = 7;
        }
        assert_eq!(buf.as_slice(), &[1, 0, 42, 7]);
    }

    #[test]
    #[should_panic]
    fn test_index_past_block_panics() {
        let buf = OwnedBuffer::<u8>::new(2);
        let _ = buf[2];
    }

    #[test]
    fn test_release_transfers_ownership() {
        let mut buf = OwnedBuffer::from_value(2, &5i32);
        let block = buf.release().unwrap();
        assert!(!buf.is_allocated());
        assert_eq!(&*block, &[5, 5]);
        assert!(buf.release().is_none());

        let adopted = OwnedBuffer::from(block);
        assert_eq!(adopted.as_slice(), &[5, 5]);
    }

    #[test]
    fn test_take_leaves_source_null() {
        let mut a = OwnedBuffer::from(vec![1, 2, 3]);
        let ptr = a.as_ptr();
        let b = a.take();
        assert!(!a.is_allocated());
        assert!(b.is_allocated());
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_swap_exchanges_blocks() {
        let mut a = OwnedBuffer::from(vec![1, 2]);
        let mut b = OwnedBuffer::null();
        let ptr = a.as_ptr();
        a.swap(&mut b);
        assert!(!a.is_allocated());
        assert_eq!(b.as_ptr(), ptr);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_drop_frees_every_slot_once() {
        let counter = Rc::new(Cell::new(0));
        {
            let mut buf = OwnedBuffer::<DropCounter>::new(3);
            for i in 0..3 {
                buf[i] = DropCounter(Some(counter.clone()));
            }
            let mut other = buf.take();
            other.swap(&mut buf);
            assert_eq!(counter.get(), 0);
        }
        assert_eq!(counter.get(), 3);
    }

    #[test]
    fn test_released_block_outlives_buffer() {
        let counter = Rc::new(Cell::new(0));
        let block = {
            let mut buf = OwnedBuffer::from_fn(2, |_| DropCounter(Some(counter.clone())));
            buf.release()
        };
        assert_eq!(counter.get(), 0);
        drop(block);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_debug_format() {
        let buf = OwnedBuffer::from(vec![1u8, 2]);
        assert_eq!(
            format!("{buf:?}"),
            "OwnedBuffer { allocated: true, slots: [1, 2] }"
        );
    }
}
