//! A dynamically growable, contiguous sequence container built on an exclusively
//! owned heap buffer.
//!
//! [`SimpleVector`] tracks a logical length (the live range) and a physical
//! capacity (the length of its [`OwnedBuffer`]). All memory management is delegated
//! to the buffer: growth allocates a larger buffer, moves the live elements across
//! and swaps ownership. Capacity doubles whenever a push or an insert finds the
//! buffer full (see [`growth`]).
//!
//! ```
//! use simplevec::{SimpleVector, reserve, simple_vector};
//!
//! let mut v = simple_vector![1, 2, 3];
//! v.insert(1, 9);
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//! v.erase(1);
//! assert_eq!(v, simple_vector![1, 2, 3]);
//!
//! let mut w = SimpleVector::<u32>::with_hint(reserve(10));
//! assert_eq!((w.len(), w.capacity()), (0, 10));
//! w.push_back(5);
//! assert_eq!(w.capacity(), 10);
//! assert!(w.at(1).is_err());
//! ```

pub mod growth;
pub mod hint;
pub mod vector;

pub use hint::{CapacityHint, reserve};
pub use simplevec_owned_buffer::OwnedBuffer;
pub use vector::SimpleVector;

/// Creates a [`SimpleVector`] from a list of elements, or from a value and a
/// length, in the manner of `vec!`.
///
/// ```
/// use simplevec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!((v.len(), v.capacity()), (3, 3));
///
/// let w = simple_vector!["a".to_string(); 2];
/// assert_eq!(w.as_slice(), &["a", "a"]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVector::from_value($n, &$elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($x),+])
    };
}
