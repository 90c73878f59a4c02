use arbor_types::CloseableIter;

use crate::error::StoreResult;
use crate::object::StoredObject;

/// Forward-only, closable iterator over stored objects.
///
/// Backends wrap whatever cursor they hold; closing drops it. A closed
/// iterator yields nothing.
pub struct ObjectIter<'a> {
    inner: Option<Box<dyn Iterator<Item = StoreResult<StoredObject>> + 'a>>,
}

impl<'a> ObjectIter<'a> {
    /// Wrap a backend cursor.
    pub fn new<I>(inner: I) -> Self
    where
        I: Iterator<Item = StoreResult<StoredObject>> + 'a,
    {
        Self {
            inner: Some(Box::new(inner)),
        }
    }

    /// Iterate over an already materialized list of objects.
    pub fn from_objects(objects: Vec<StoredObject>) -> Self {
        Self::new(objects.into_iter().map(Ok))
    }

    /// Returns `true` once the iterator has been closed.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }
}

impl Iterator for ObjectIter<'_> {
    type Item = StoreResult<StoredObject>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

impl CloseableIter for ObjectIter<'_> {
    fn close(&mut self) {
        self.inner = None;
    }
}

impl std::fmt::Debug for ObjectIter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectIter")
            .field("closed", &self.is_closed())
            .finish()
    }
}
