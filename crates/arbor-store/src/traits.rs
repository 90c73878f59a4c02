use arbor_types::Hash;

use crate::error::StoreResult;
use crate::iter::ObjectIter;
use crate::object::{EncodedObject, ObjectKind, StoredObject};

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Objects are immutable once written. The same kind and body always
///   produce the same hash.
/// - A missing object is reported as [`StoreError::NotFound`], never as a
///   generic failure.
/// - Concurrent reads are always safe (objects are immutable).
/// - All I/O errors are propagated, never silently ignored.
///
/// [`StoreError::NotFound`]: crate::StoreError::NotFound
pub trait ObjectStore: Send + Sync {
    /// An empty, writable object handle to be filled and passed to [`set`].
    ///
    /// [`set`]: ObjectStore::set
    fn new_object(&self) -> StoredObject {
        StoredObject::empty()
    }

    /// Persist an object and return the content hash assigned to its bytes.
    ///
    /// If the object already exists, this is a no-op (idempotent). Fails with
    /// `SizeMismatch` if the declared size disagrees with the body.
    fn set(&self, object: &dyn EncodedObject) -> StoreResult<Hash>;

    /// Fetch an object by hash. Fails with `NotFound` when absent.
    fn get(&self, id: &Hash) -> StoreResult<StoredObject>;

    /// Check whether an object exists in the store.
    fn exists(&self, id: &Hash) -> StoreResult<bool>;

    /// Iterate over every stored object of the given kind.
    fn iter(&self, kind: ObjectKind) -> StoreResult<ObjectIter<'_>>;
}
