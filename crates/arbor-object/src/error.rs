//! Error types for the object model.

use arbor_store::{ObjectKind, StoreError};

/// Errors that can occur while decoding, resolving or walking objects.
#[derive(Debug, thiserror::Error)]
pub enum ObjectError {
    /// An object of the wrong kind was handed to a decoder.
    #[error("unsupported object: expected {expected}, got {actual}")]
    UnsupportedObject {
        expected: ObjectKind,
        actual: ObjectKind,
    },

    /// A tree record could not be parsed.
    #[error("malformed tree record at byte {offset}: {reason}")]
    Malformed { offset: u64, reason: String },

    /// A tree entry name cannot be encoded.
    #[error("invalid tree entry name {0:?}")]
    InvalidEntryName(String),

    /// No entry with this name exists in the tree.
    #[error("entry not found: {0}")]
    EntryNotFound(String),

    /// An intermediate path segment does not name a reachable subtree.
    #[error("directory not found: {0}")]
    DirectoryNotFound(String),

    /// The path does not name a reachable file.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// The walker would exceed its frame limit.
    #[error("maximum tree depth exceeded (limit {limit})")]
    MaxTreeDepth { limit: usize },

    /// File contents are not valid UTF-8 text.
    #[error("file contents are not valid UTF-8")]
    InvalidUtf8,

    /// Walker configuration is out of range.
    #[error("invalid walker config: {0}")]
    InvalidConfig(String),

    /// Walker configuration could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Object store failure other than the tolerated "not found" cases.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// I/O error while reading or writing an object body.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ObjectError {
    /// Returns `true` for the lookup failures that path resolution collapses
    /// into a single public outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ObjectError::EntryNotFound(_)
                | ObjectError::DirectoryNotFound(_)
                | ObjectError::FileNotFound(_)
        )
    }
}

/// Convenience alias for object model results.
pub type ObjectResult<T> = Result<T, ObjectError>;
