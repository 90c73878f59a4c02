use std::io::Read;

use arbor_store::{EncodedObject, ObjectKind, ObjectStore, StoreError, StoredObject};
use arbor_types::Hash;

use crate::error::{ObjectError, ObjectResult};

/// File contents as stored in the object store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    hash: Hash,
    data: Vec<u8>,
}

impl Blob {
    /// Wrap raw contents, computing the blob hash.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let hash = ObjectKind::Blob.hasher().hash(&data);
        Self { hash, data }
    }

    /// Read a blob object.
    ///
    /// Fails with `UnsupportedObject` for other kinds and with
    /// `StoreError::SizeMismatch` when the declared size disagrees with the
    /// body.
    pub fn decode(object: &dyn EncodedObject) -> ObjectResult<Self> {
        check_kind(object)?;
        let mut data = Vec::new();
        object.reader()?.read_to_end(&mut data)?;
        check_size(object.size(), &data)?;
        Ok(Self {
            hash: object.id(),
            data,
        })
    }

    /// Take ownership of a fetched object's body without copying it. `hash`
    /// is the key the object was fetched under.
    pub(crate) fn from_fetched(object: StoredObject, hash: Hash) -> ObjectResult<Self> {
        check_kind(&object)?;
        let declared = object.size();
        let data = object.into_data();
        check_size(declared, &data)?;
        Ok(Self { hash, data })
    }

    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// A reader over the contents.
    pub fn reader(&self) -> impl Read + '_ {
        self.data.as_slice()
    }

    pub fn to_stored_object(&self) -> StoredObject {
        StoredObject::new(ObjectKind::Blob, self.data.clone())
    }

    pub fn from_stored_object(object: &StoredObject) -> ObjectResult<Self> {
        Self::decode(object)
    }

    /// Write the blob into `store`, returning its hash.
    pub fn persist(&self, store: &dyn ObjectStore) -> ObjectResult<Hash> {
        Ok(store.set(&self.to_stored_object())?)
    }
}

fn check_kind(object: &dyn EncodedObject) -> ObjectResult<()> {
    if object.kind() != ObjectKind::Blob {
        return Err(ObjectError::UnsupportedObject {
            expected: ObjectKind::Blob,
            actual: object.kind(),
        });
    }
    Ok(())
}

fn check_size(declared: u64, data: &[u8]) -> ObjectResult<()> {
    let actual = data.len() as u64;
    if declared != actual {
        return Err(StoreError::SizeMismatch { declared, actual }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_store::InMemoryObjectStore;

    #[test]
    fn hash_matches_stored_object_id() {
        let blob = Blob::new(b"hello".to_vec());
        assert_eq!(blob.hash(), blob.to_stored_object().id());
        assert_eq!(blob.size(), 5);
    }

    #[test]
    fn persist_then_decode() {
        let store = InMemoryObjectStore::new();
        let blob = Blob::new("contents");
        let hash = blob.persist(&store).unwrap();
        assert_eq!(hash, blob.hash());

        let decoded = Blob::decode(&store.get(&hash).unwrap()).unwrap();
        assert_eq!(decoded, blob);

        let mut text = String::new();
        decoded.reader().read_to_string(&mut text).unwrap();
        assert_eq!(text, "contents");
    }

    #[test]
    fn decode_rejects_trees() {
        let tree = StoredObject::new(ObjectKind::Tree, Vec::new());
        let err = Blob::decode(&tree).unwrap_err();
        assert!(matches!(err, ObjectError::UnsupportedObject { actual: ObjectKind::Tree, .. }));
    }

    #[test]
    fn decode_rejects_oversized_declaration() {
        let mut object = StoredObject::new(ObjectKind::Blob, b"hi".to_vec());
        object.set_size(u64::MAX);
        let err = Blob::decode(&object).unwrap_err();
        assert!(matches!(
            err,
            ObjectError::Store(StoreError::SizeMismatch {
                declared: u64::MAX,
                actual: 2,
            })
        ));
    }

    #[test]
    fn decode_rejects_undersized_declaration() {
        let mut object = StoredObject::new(ObjectKind::Blob, b"hello".to_vec());
        object.set_size(3);
        assert!(matches!(
            Blob::decode(&object),
            Err(ObjectError::Store(StoreError::SizeMismatch { .. }))
        ));
    }

    #[test]
    fn from_fetched_keeps_body_and_checks_size() {
        let object = StoredObject::new(ObjectKind::Blob, b"body".to_vec());
        let hash = object.id();
        let blob = Blob::from_fetched(object, hash).unwrap();
        assert_eq!(blob, Blob::new("body"));

        let mut bad = StoredObject::new(ObjectKind::Blob, b"body".to_vec());
        bad.set_size(u64::MAX);
        assert!(Blob::from_fetched(bad, hash).is_err());
    }
}
