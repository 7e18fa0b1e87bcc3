pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Checks that `index` addresses an element of a live range of length `len`.
///
/// Evaluates to `()` when `index < len`. Otherwise the enclosing function returns
/// early with an `OutOfRange` error through `?`, so it must return a
/// `Result` whose error converts from `Error`.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $len:expr) => {{
        $crate::result::verify_index($index, $len)?;
    }};
}

#[inline]
pub fn verify_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(index, len)
    }
}

#[cold]
pub fn out_of_range(index: usize, len: usize) -> Result<()> {
    Err(crate::error::Error::out_of_range(index, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(index: usize, len: usize) -> Result<usize> {
        verify_index!(index, len);
        Ok(index)
    }

    #[test]
    fn test_verify_index() {
        assert!(verify_index(0, 1).is_ok());
        assert!(verify_index(1, 1).is_err());
        assert!(verify_index(0, 0).is_err());
        assert!(verify_index(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_verify_index_macro() {
        assert_eq!(checked(2, 3).unwrap(), 2);
        assert!(checked(3, 3).unwrap_err().is_out_of_range());
    }
}
