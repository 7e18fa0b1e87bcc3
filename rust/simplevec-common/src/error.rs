use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn out_of_range(index: usize, len: usize) -> Error {
        Error(ErrorKind::OutOfRange { index, len }.into())
    }

    /// Returns `true` if this error reports an index outside of the live range.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = Error::out_of_range(5, 3);
        assert!(err.is_out_of_range());
        assert_eq!(err.to_string(), "index 5 is out of range for length 3");
        assert_eq!(
            err.into_kind(),
            ErrorKind::OutOfRange { index: 5, len: 3 }
        );
    }

    #[test]
    fn test_error_from_kind() {
        let err: Error = ErrorKind::OutOfRange { index: 0, len: 0 }.into();
        assert_eq!(err.kind(), &ErrorKind::OutOfRange { index: 0, len: 0 });
    }
}
