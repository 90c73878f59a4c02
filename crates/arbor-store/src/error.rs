use arbor_types::Hash;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object was not found.
    #[error("object not found: {0}")]
    NotFound(Hash),

    /// The declared size of an object does not match the bytes written to it.
    #[error("object size mismatch: declared {declared} bytes, body has {actual}")]
    SizeMismatch { declared: u64, actual: u64 },

    /// An object kind name could not be parsed.
    #[error("unknown object kind: {0}")]
    UnknownKind(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns `true` if this error reports an absent object.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
