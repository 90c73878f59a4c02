use std::sync::Arc;

use arbor_store::{EncodedObject, ObjectKind, StoredObject};
use arbor_types::Hash;

use crate::blob::Blob;
use crate::error::ObjectResult;
use crate::tree::Tree;

/// A stored object decoded according to its kind.
///
/// Commits and tags are not interpreted here and pass through as
/// [`Object::Other`]. Trees are shared so a walker can keep descending into
/// the same value it hands out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Object {
    Blob(Blob),
    Tree(Arc<Tree>),
    Other(StoredObject),
}

impl Object {
    pub fn decode(stored: StoredObject) -> ObjectResult<Self> {
        let hash = stored.id();
        Self::from_fetched(stored, hash)
    }

    /// Decode an object fetched from a store under `hash`. Blob bodies are
    /// moved, not copied.
    pub(crate) fn from_fetched(stored: StoredObject, hash: Hash) -> ObjectResult<Self> {
        match stored.kind() {
            ObjectKind::Blob => Ok(Object::Blob(Blob::from_fetched(stored, hash)?)),
            ObjectKind::Tree => Ok(Object::Tree(Arc::new(Tree::decode_with_id(&stored, hash)?))),
            _ => Ok(Object::Other(stored)),
        }
    }

    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Blob(_) => ObjectKind::Blob,
            Object::Tree(_) => ObjectKind::Tree,
            Object::Other(stored) => stored.kind(),
        }
    }

    pub fn hash(&self) -> Hash {
        match self {
            Object::Blob(blob) => blob.hash(),
            Object::Tree(tree) => tree.hash(),
            Object::Other(stored) => stored.id(),
        }
    }

    pub fn as_tree(&self) -> Option<&Tree> {
        match self {
            Object::Tree(tree) => Some(&**tree),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            Object::Blob(blob) => Some(blob),
            _ => None,
        }
    }
}
