//! Trees and tree entries.
//!
//! A [`Tree`] is an ordered list of [`TreeEntry`] values plus the hash it was
//! decoded from. Entry order is the stored order and is never re-sorted.
//! Lookups by name go through an index that is built on first use and
//! dropped whenever the entry list is replaced.

use std::collections::HashMap;
use std::sync::OnceLock;

use arbor_store::ObjectStore;
use arbor_types::Hash;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ObjectError, ObjectResult};
use crate::mode::FileMode;

/// One named child of a tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub name: String,
    pub mode: FileMode,
    pub hash: Hash,
}

impl TreeEntry {
    pub fn new(name: impl Into<String>, mode: FileMode, hash: Hash) -> Self {
        Self {
            name: name.into(),
            mode,
            hash,
        }
    }
}

/// A decoded tree object.
#[derive(Clone)]
pub struct Tree {
    entries: Vec<TreeEntry>,
    hash: Hash,
    index: OnceLock<HashMap<String, usize>>,
}

impl Tree {
    /// Build a tree from entries. The hash stays zero until the tree is
    /// decoded from, or persisted to, a store.
    pub fn new(entries: Vec<TreeEntry>) -> Self {
        Self::from_parts(entries, Hash::ZERO)
    }

    pub(crate) fn from_parts(entries: Vec<TreeEntry>, hash: Hash) -> Self {
        Self {
            entries,
            hash,
            index: OnceLock::new(),
        }
    }

    /// The hash this tree was decoded from or last persisted as.
    pub fn hash(&self) -> Hash {
        self.hash
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace the entry list. Invalidates the name index and the hash.
    pub fn set_entries(&mut self, entries: Vec<TreeEntry>) {
        self.entries = entries;
        self.hash = Hash::ZERO;
        self.index = OnceLock::new();
    }

    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }

    /// Look up a direct child by name.
    ///
    /// When several entries share a name the last one wins.
    pub fn get(&self, name: &str) -> Option<&TreeEntry> {
        self.index().get(name).map(|&pos| &self.entries[pos])
    }

    /// Like [`Tree::get`], failing with `EntryNotFound`.
    pub fn entry(&self, name: &str) -> ObjectResult<&TreeEntry> {
        self.get(name)
            .ok_or_else(|| ObjectError::EntryNotFound(name.to_string()))
    }

    /// Encode this tree into `store` and remember the resulting hash.
    pub fn persist(&mut self, store: &dyn ObjectStore) -> ObjectResult<Hash> {
        let mut object = store.new_object();
        self.encode(&mut object)?;
        let hash = store.set(&object)?;
        self.hash = hash;
        Ok(hash)
    }

    /// Encode this tree into a fresh [`arbor_store::StoredObject`].
    pub fn to_stored_object(&self) -> ObjectResult<arbor_store::StoredObject> {
        let mut object = arbor_store::StoredObject::empty();
        self.encode(&mut object)?;
        Ok(object)
    }

    /// Decode a tree that has already been fetched from a store.
    pub fn from_stored_object(object: &arbor_store::StoredObject) -> ObjectResult<Self> {
        Self::decode(object)
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.index.get_or_init(|| {
            trace!(tree = %self.hash.short_hex(), entries = self.entries.len(), "building entry index");
            self.entries
                .iter()
                .enumerate()
                .map(|(pos, entry)| (entry.name.clone(), pos))
                .collect()
        })
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.entries == other.entries
    }
}

impl Eq for Tree {}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("hash", &self.hash)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_store::InMemoryObjectStore;

    fn h(byte: u8) -> Hash {
        Hash::from_bytes([byte; 32])
    }

    #[test]
    fn lookup_by_name() {
        let tree = Tree::new(vec![
            TreeEntry::new("a.txt", FileMode::REGULAR, h(1)),
            TreeEntry::new("src", FileMode::DIRECTORY, h(2)),
        ]);
        assert_eq!(tree.get("src").unwrap().hash, h(2));
        assert_eq!(tree.entry("a.txt").unwrap().mode, FileMode::REGULAR);
        assert!(tree.get("missing").is_none());
    }

    #[test]
    fn missing_entry_error() {
        let tree = Tree::default();
        let err = tree.entry("nope").unwrap_err();
        assert!(matches!(err, ObjectError::EntryNotFound(ref n) if n == "nope"));
    }

    #[test]
    fn later_duplicate_shadows_earlier() {
        let tree = Tree::new(vec![
            TreeEntry::new("dup", FileMode::REGULAR, h(1)),
            TreeEntry::new("other", FileMode::REGULAR, h(2)),
            TreeEntry::new("dup", FileMode::EXECUTABLE, h(3)),
        ]);
        let found = tree.entry("dup").unwrap();
        assert_eq!(found.hash, h(3));
        assert_eq!(found.mode, FileMode::EXECUTABLE);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn set_entries_rebuilds_index() {
        let mut tree = Tree::new(vec![TreeEntry::new("old", FileMode::REGULAR, h(1))]);
        assert!(tree.get("old").is_some());

        tree.set_entries(vec![TreeEntry::new("new", FileMode::REGULAR, h(2))]);
        assert!(tree.get("old").is_none());
        assert_eq!(tree.get("new").unwrap().hash, h(2));
        assert!(tree.hash().is_zero());
    }

    #[test]
    fn entry_order_is_preserved() {
        let tree = Tree::new(vec![
            TreeEntry::new("z", FileMode::REGULAR, h(1)),
            TreeEntry::new("a", FileMode::REGULAR, h(2)),
        ]);
        let names: Vec<&str> = tree.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn persist_records_hash() {
        let store = InMemoryObjectStore::new();
        let mut tree = Tree::new(vec![TreeEntry::new("f", FileMode::REGULAR, h(9))]);
        let hash = tree.persist(&store).unwrap();
        assert_eq!(tree.hash(), hash);
        assert!(store.exists(&hash).unwrap());

        let decoded = Tree::decode(&store.get(&hash).unwrap()).unwrap();
        assert_eq!(decoded, tree);
    }
}
