//! Capacity growth policy of `SimpleVector`.

/// Capacity allocated by the first growth of an empty vector.
pub const INITIAL_CAPACITY: usize = 1;

/// Multiplier applied to the capacity of a full vector when it grows.
pub const GROWTH_FACTOR: usize = 2;

/// Returns the capacity a full vector grows to on push or insert.
///
/// `0` grows to [`INITIAL_CAPACITY`], anything else is multiplied by [`GROWTH_FACTOR`],
/// so `n` appends to an empty vector reallocate only `O(log n)` times.
///
/// # Panics
///
/// Panics if the new capacity overflows `usize`.
#[inline]
pub fn grown_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        INITIAL_CAPACITY
    } else {
        capacity.checked_mul(GROWTH_FACTOR).expect("capacity overflow")
    }
}

/// Returns the capacity a vector reallocates to when resized to `requested`
/// elements beyond its current `capacity`: at least doubling, never less than
/// `requested`.
#[inline]
pub fn resized_capacity(capacity: usize, requested: usize) -> usize {
    requested.max(capacity.saturating_mul(GROWTH_FACTOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grown_capacity() {
        assert_eq!(grown_capacity(0), 1);
        assert_eq!(grown_capacity(1), 2);
        assert_eq!(grown_capacity(2), 4);
        assert_eq!(grown_capacity(48), 96);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn test_grown_capacity_overflow() {
        grown_capacity(usize::MAX / 2 + 1);
    }

    #[test]
    fn test_resized_capacity() {
        assert_eq!(resized_capacity(0, 5), 5);
        assert_eq!(resized_capacity(4, 5), 8);
        assert_eq!(resized_capacity(4, 20), 20);
        assert_eq!(resized_capacity(usize::MAX, usize::MAX), usize::MAX);
    }
}
