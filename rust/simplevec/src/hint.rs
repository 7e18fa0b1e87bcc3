//! Capacity reservation requests.

/// A request to pre-reserve capacity when constructing a `SimpleVector`.
///
/// The hint is not a container: it only carries the number of slots to allocate.
/// Construct one with [`reserve`] and pass it to `SimpleVector::with_hint` (or
/// convert it with `SimpleVector::from`) to get an empty vector that can take that
/// many elements without reallocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityHint {
    capacity: usize,
}

impl CapacityHint {
    /// Creates a hint requesting `capacity` slots.
    #[inline]
    pub const fn new(capacity: usize) -> CapacityHint {
        CapacityHint { capacity }
    }

    /// Returns the number of slots to reserve.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Returns a [`CapacityHint`] for `capacity` slots.
#[inline]
pub const fn reserve(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_carries_capacity() {
        let hint = reserve(10);
        assert_eq!(hint.capacity(), 10);
        assert_eq!(hint, CapacityHint::new(10));
    }
}
