/// Everything that can go wrong in a list operation.
///
/// A failed operation never leaves the list half-modified: validation happens
/// before any node is spliced or unlinked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A size or payload precondition was violated before the operation began.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The index does not address an existing element.
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A keyed search found no matching element.
    #[error("no element matches the key")]
    NotFound,

    /// Storage for a new node or payload could not be obtained.
    #[error("failed to allocate storage for a new node")]
    AllocationFailure,
}

/// Result alias used by every fallible list operation.
pub type Result<T> = std::result::Result<T, ListError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ListError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 is out of range for a list of length 2");
        assert_eq!(ListError::NotFound.to_string(), "no element matches the key");
        assert_eq!(
            ListError::InvalidArgument("element size must be positive").to_string(),
            "invalid argument: element size must be positive"
        );
    }
}
