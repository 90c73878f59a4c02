use std::io::{Read, Write};
use std::str::FromStr;

use arbor_types::{ContentHasher, Hash};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// The kind of object stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Raw content (file contents, arbitrary data).
    Blob,
    /// Directory listing: ordered entries mapping names to object hashes.
    Tree,
    /// Snapshot of a root tree plus history metadata.
    Commit,
    /// Annotated, named pointer to another object.
    Tag,
}

impl ObjectKind {
    /// The lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blob => "blob",
            Self::Tree => "tree",
            Self::Commit => "commit",
            Self::Tag => "tag",
        }
    }

    /// The domain-separated hasher used for objects of this kind.
    pub fn hasher(&self) -> ContentHasher {
        match self {
            Self::Blob => ContentHasher::BLOB,
            Self::Tree => ContentHasher::TREE,
            Self::Commit => ContentHasher::COMMIT,
            Self::Tag => ContentHasher::TAG,
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blob" => Ok(Self::Blob),
            "tree" => Ok(Self::Tree),
            "commit" => Ok(Self::Commit),
            "tag" => Ok(Self::Tag),
            other => Err(StoreError::UnknownKind(other.to_string())),
        }
    }
}

/// Capability of an encoded object: a kind, a declared size, and scoped
/// access to the raw body.
///
/// Objects are mutable only while being built (`set_kind`, `set_size` and the
/// writer). Once handed to a store they are treated as immutable.
pub trait EncodedObject {
    /// Content hash of the current kind and body.
    fn id(&self) -> Hash;

    /// The kind of this object.
    fn kind(&self) -> ObjectKind;

    /// Change the kind of this object.
    fn set_kind(&mut self, kind: ObjectKind);

    /// Declared size of the body in bytes.
    fn size(&self) -> u64;

    /// Record the declared size of the body.
    fn set_size(&mut self, size: u64);

    /// Read access to the body.
    fn reader(&self) -> StoreResult<Box<dyn Read + '_>>;

    /// Append access to the body.
    fn writer(&mut self) -> StoreResult<Box<dyn Write + '_>>;
}

/// A stored object: kind tag + encoded body + declared size.
///
/// `StoredObject` is the unit of storage. The store never interprets the body;
/// it is a pure key-value store keyed by content hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredObject {
    kind: ObjectKind,
    data: Vec<u8>,
    size: u64,
}

impl StoredObject {
    /// Create a stored object from a kind and a complete body.
    pub fn new(kind: ObjectKind, data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        Self { kind, data, size }
    }

    /// An empty, writable object. Its kind defaults to blob until set.
    pub fn empty() -> Self {
        Self::new(ObjectKind::Blob, Vec::new())
    }

    /// Copy any encoded object into a `StoredObject`, checking that the
    /// declared size matches the body.
    pub fn from_encoded(object: &dyn EncodedObject) -> StoreResult<Self> {
        let mut data = Vec::new();
        object.reader()?.read_to_end(&mut data)?;
        let actual = data.len() as u64;
        if actual != object.size() {
            return Err(StoreError::SizeMismatch {
                declared: object.size(),
                actual,
            });
        }
        Ok(Self {
            kind: object.kind(),
            data,
            size: actual,
        })
    }

    /// The encoded body.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the object and return its body.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Compute the content hash for this object.
    pub fn compute_id(&self) -> Hash {
        self.kind.hasher().hash(&self.data)
    }
}

impl EncodedObject for StoredObject {
    fn id(&self) -> Hash {
        self.compute_id()
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn set_kind(&mut self, kind: ObjectKind) {
        self.kind = kind;
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn set_size(&mut self, size: u64) {
        self.size = size;
    }

    fn reader(&self) -> StoreResult<Box<dyn Read + '_>> {
        Ok(Box::new(self.data.as_slice()))
    }

    fn writer(&mut self) -> StoreResult<Box<dyn Write + '_>> {
        Ok(Box::new(&mut self.data))
    }
}
