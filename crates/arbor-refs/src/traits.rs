//! The [`RefStore`] trait defining the reference storage interface.
//!
//! Any backend (in-memory, filesystem, database) implements this trait to
//! provide named reference management.

use crate::error::{RefError, Result};
use crate::iter::ReferenceIter;
use crate::types::{RefTarget, Reference, ReferenceName};

/// Maximum number of symbolic hops [`RefStore::resolve`] follows.
pub const MAX_RESOLVE_DEPTH: usize = 1024;

/// Storage backend for named references.
///
/// Implementations must be thread-safe (`Send + Sync`) and provide atomic
/// get/set/remove operations on named refs.
pub trait RefStore: Send + Sync {
    /// Read a ref by its full name. Fails with `NotFound` when absent.
    fn get(&self, name: &ReferenceName) -> Result<Reference>;

    /// Create or replace a ref.
    fn set(&self, reference: &Reference) -> Result<()>;

    /// Delete a ref. Returns `true` if it existed.
    fn remove(&self, name: &ReferenceName) -> Result<bool>;

    /// Iterate over every stored ref.
    fn iter(&self) -> Result<ReferenceIter<'_>>;

    /// Follow symbolic refs from `name` until a direct ref is reached.
    ///
    /// Fails with `SymbolicLoop` after [`MAX_RESOLVE_DEPTH`] hops.
    fn resolve(&self, name: &ReferenceName) -> Result<Reference> {
        let mut current = self.get(name)?;
        for _ in 0..MAX_RESOLVE_DEPTH {
            let next = match current.target() {
                RefTarget::Hash(_) => return Ok(current),
                RefTarget::Symbolic(target) => self.get(target)?,
            };
            current = next;
        }
        Err(RefError::SymbolicLoop {
            name: name.to_string(),
        })
    }
}
