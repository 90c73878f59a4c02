use std::collections::HashMap;
use std::sync::RwLock;

use arbor_types::Hash;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::iter::ObjectIter;
use crate::object::{EncodedObject, ObjectKind, StoredObject};
use crate::traits::ObjectStore;

/// In-memory, HashMap-based object store.
///
/// Intended for tests and embedding. All objects are held in memory behind a
/// `RwLock` for safe concurrent access. Objects are cloned on read/write.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<Hash, StoredObject>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored objects.
    pub fn total_bytes(&self) -> u64 {
        self.objects
            .read()
            .expect("lock poisoned")
            .values()
            .map(|obj| obj.size())
            .sum()
    }

    /// Return a sorted list of all object hashes in the store.
    pub fn all_ids(&self) -> Vec<Hash> {
        let map = self.objects.read().expect("lock poisoned");
        let mut ids: Vec<Hash> = map.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn set(&self, object: &dyn EncodedObject) -> StoreResult<Hash> {
        let stored = StoredObject::from_encoded(object)?;
        let id = stored.compute_id();
        let mut map = self.objects.write().expect("lock poisoned");
        if !map.contains_key(&id) {
            debug!(id = %id.short_hex(), kind = %stored.kind(), size = stored.size(), "stored object");
            map.insert(id, stored);
        }
        Ok(id)
    }

    fn get(&self, id: &Hash) -> StoreResult<StoredObject> {
        let map = self.objects.read().expect("lock poisoned");
        map.get(id).cloned().ok_or(StoreError::NotFound(*id))
    }

    fn exists(&self, id: &Hash) -> StoreResult<bool> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.contains_key(id))
    }

    fn iter(&self, kind: ObjectKind) -> StoreResult<ObjectIter<'_>> {
        let map = self.objects.read().expect("lock poisoned");
        let mut matching: Vec<(Hash, StoredObject)> = map
            .iter()
            .filter(|(_, obj)| obj.kind() == kind)
            .map(|(id, obj)| (*id, obj.clone()))
            .collect();
        matching.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(ObjectIter::from_objects(
            matching.into_iter().map(|(_, obj)| obj).collect(),
        ))
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_types::{CloseableIter, IterFlow};
    use std::io::Write;

    fn make_blob(content: &[u8]) -> StoredObject {
        StoredObject::new(ObjectKind::Blob, content.to_vec())
    }

    // -----------------------------------------------------------------------
    // Core get/set
    // -----------------------------------------------------------------------

    #[test]
    fn set_and_get_blob() {
        let store = InMemoryObjectStore::new();
        let obj = make_blob(b"hello world");
        let id = store.set(&obj).unwrap();
        assert_eq!(id, obj.id());

        let read_back = store.get(&id).unwrap();
        assert_eq!(read_back, obj);
    }

    #[test]
    fn set_object_built_through_new_object() {
        let store = InMemoryObjectStore::new();
        let mut obj = store.new_object();
        obj.set_kind(ObjectKind::Tree);
        obj.writer().unwrap().write_all(b"entries").unwrap();
        obj.set_size(7);

        let id = store.set(&obj).unwrap();
        let read_back = store.get(&id).unwrap();
        assert_eq!(read_back.kind(), ObjectKind::Tree);
        assert_eq!(read_back.size(), 7);
    }

    #[test]
    fn set_rejects_wrong_declared_size() {
        let store = InMemoryObjectStore::new();
        let mut obj = store.new_object();
        obj.writer().unwrap().write_all(b"four").unwrap();

        let err = store.set(&obj).unwrap_err();
        assert!(matches!(err, StoreError::SizeMismatch { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn get_missing_is_not_found() {
        let store = InMemoryObjectStore::new();
        let missing = Hash::from_bytes([9; 32]);
        let err = store.get(&missing).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, StoreError::NotFound(id) if id == missing));
    }

    #[test]
    fn exists_reports_presence() {
        let store = InMemoryObjectStore::new();
        let id = store.set(&make_blob(b"present")).unwrap();
        assert!(store.exists(&id).unwrap());
        assert!(!store.exists(&Hash::from_bytes([1; 32])).unwrap());
    }

    #[test]
    fn set_is_idempotent() {
        let store = InMemoryObjectStore::new();
        let obj = make_blob(b"idempotent");
        let id1 = store.set(&obj).unwrap();
        let id2 = store.set(&obj).unwrap();
        assert_eq!(id1, id2);
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Iteration
    // -----------------------------------------------------------------------

    #[test]
    fn iter_filters_by_kind_in_hash_order() {
        let store = InMemoryObjectStore::new();
        store.set(&make_blob(b"a")).unwrap();
        store.set(&make_blob(b"b")).unwrap();
        store
            .set(&StoredObject::new(ObjectKind::Tree, Vec::new()))
            .unwrap();

        let blobs: Vec<StoredObject> = store
            .iter(ObjectKind::Blob)
            .unwrap()
            .collect::<StoreResult<_>>()
            .unwrap();
        assert_eq!(blobs.len(), 2);
        assert!(blobs.iter().all(|o| o.kind() == ObjectKind::Blob));
        assert!(blobs[0].id() < blobs[1].id());

        assert_eq!(store.iter(ObjectKind::Tree).unwrap().count(), 1);
        assert_eq!(store.iter(ObjectKind::Commit).unwrap().count(), 0);
    }

    #[test]
    fn iter_visit_with_stop() {
        let store = InMemoryObjectStore::new();
        for i in 0..4u8 {
            store.set(&make_blob(&[i])).unwrap();
        }
        let mut seen = 0;
        let result: StoreResult<()> = store.iter(ObjectKind::Blob).unwrap().visit(|_| {
            seen += 1;
            Ok(IterFlow::Stop)
        });
        assert!(result.is_ok());
        assert_eq!(seen, 1);
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_total_bytes() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());
        store.set(&make_blob(b"12345")).unwrap();
        store.set(&make_blob(b"123456789")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn all_ids_is_sorted() {
        let store = InMemoryObjectStore::new();
        for data in [b"aaa", b"bbb", b"ccc"] {
            store.set(&make_blob(data)).unwrap();
        }
        let ids = store.all_ids();
        assert_eq!(ids.len(), 3);
        for w in ids.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        let id = store.set(&make_blob(b"shared data")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let obj = store.get(&id).unwrap();
                    assert_eq!(obj.compute_id(), id);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::default();
        store.set(&make_blob(b"x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("object_count"));
    }
}
