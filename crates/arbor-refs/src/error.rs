//! Error types for reference operations.

use thiserror::Error;

/// Errors that can occur during reference operations.
#[derive(Debug, Error)]
pub enum RefError {
    /// The reference was not found.
    #[error("ref not found: {name}")]
    NotFound { name: String },

    /// The reference name is invalid.
    #[error("invalid ref name: {name}: {reason}")]
    InvalidName { name: String, reason: String },

    /// Following symbolic refs did not reach a hash within the allowed depth.
    #[error("symbolic ref chain too deep starting at {name}")]
    SymbolicLoop { name: String },

    /// A lock guarding the store was poisoned.
    #[error("ref store lock poisoned: {0}")]
    Poisoned(String),
}

/// Convenience type alias for ref operations.
pub type Result<T> = std::result::Result<T, RefError>;
