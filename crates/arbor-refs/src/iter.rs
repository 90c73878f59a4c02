use arbor_types::CloseableIter;

use crate::error::Result;
use crate::types::Reference;

/// Forward-only, closable iterator over references.
pub struct ReferenceIter<'a> {
    inner: Option<Box<dyn Iterator<Item = Result<Reference>> + 'a>>,
}

impl<'a> ReferenceIter<'a> {
    /// Wrap a backend cursor.
    pub fn new<I>(inner: I) -> Self
    where
        I: Iterator<Item = Result<Reference>> + 'a,
    {
        Self {
            inner: Some(Box::new(inner)),
        }
    }

    /// Iterate over an already materialized list of references.
    pub fn from_refs(refs: Vec<Reference>) -> Self {
        Self::new(refs.into_iter().map(Ok))
    }
}

impl Iterator for ReferenceIter<'_> {
    type Item = Result<Reference>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }
}

impl CloseableIter for ReferenceIter<'_> {
    fn close(&mut self) {
        self.inner = None;
    }
}

impl std::fmt::Debug for ReferenceIter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceIter")
            .field("closed", &self.inner.is_none())
            .finish()
    }
}
