//! The storage contract: an object store and a reference store behind one
//! handle.

use arbor_refs::{InMemoryRefStore, RefStore};
use arbor_store::{InMemoryObjectStore, ObjectStore};

/// A repository's backing storage.
pub trait Storage: Send + Sync {
    fn objects(&self) -> &dyn ObjectStore;
    fn references(&self) -> &dyn RefStore;
}

/// [`Storage`] backed by the in-memory object and reference stores.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    objects: InMemoryObjectStore,
    references: InMemoryRefStore,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn objects(&self) -> &dyn ObjectStore {
        &self.objects
    }

    fn references(&self) -> &dyn RefStore {
        &self.references
    }
}
