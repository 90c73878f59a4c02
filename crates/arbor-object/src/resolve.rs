//! Path resolution through nested trees.
//!
//! Paths are `/`-separated and relative to the tree they are resolved
//! against. Every segment but the last must name a subtree that is present
//! in the store; the last segment is looked up in the tree reached.
//!
//! Lookup failures are deliberately coarse. A missing intermediate entry, a
//! dangling hash and an intermediate that is not a tree all surface as
//! `DirectoryNotFound`; [`Tree::file`] further folds every not-found cause
//! into `FileNotFound`. Other store failures propagate unchanged.

use arbor_store::{EncodedObject, ObjectKind, ObjectStore, StoreError};

use crate::blob::Blob;
use crate::config::WalkerConfig;
use crate::error::{ObjectError, ObjectResult};
use crate::file::File;
use crate::iter::{FileIter, TreeIter};
use crate::tree::{Tree, TreeEntry};

impl Tree {
    /// Resolve `path` to the entry it names.
    pub fn find_entry(&self, store: &dyn ObjectStore, path: &str) -> ObjectResult<TreeEntry> {
        let segments: Vec<&str> = path.split('/').collect();
        let (last, dirs) = match segments.split_last() {
            Some(split) => split,
            None => return Err(ObjectError::EntryNotFound(path.to_string())),
        };

        let mut owned: Option<Tree> = None;
        for segment in dirs {
            let current = owned.as_ref().unwrap_or(self);
            let next = current.subtree(store, segment)?;
            owned = Some(next);
        }

        let current = owned.as_ref().unwrap_or(self);
        current.entry(last).cloned()
    }

    /// Resolve `path` to a file.
    ///
    /// Fails with `FileNotFound` when the path does not resolve, when its
    /// object is missing from the store, or when it names anything other
    /// than a blob.
    pub fn file(&self, store: &dyn ObjectStore, path: &str) -> ObjectResult<File> {
        let not_found = || ObjectError::FileNotFound(path.to_string());

        let entry = match self.find_entry(store, path) {
            Ok(entry) => entry,
            Err(e) if e.is_not_found() => return Err(not_found()),
            Err(e) => return Err(e),
        };

        let object = match store.get(&entry.hash) {
            Ok(object) => object,
            Err(StoreError::NotFound(_)) => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        if object.kind() != ObjectKind::Blob {
            return Err(not_found());
        }

        let blob = Blob::from_fetched(object, entry.hash)?;
        Ok(File::new(path, entry.mode, blob))
    }

    /// Resolve `path` to a subtree. Every failure to reach one is
    /// `DirectoryNotFound`.
    pub fn tree(&self, store: &dyn ObjectStore, path: &str) -> ObjectResult<Tree> {
        let mut current: Option<Tree> = None;
        for segment in path.split('/') {
            let next = current.as_ref().unwrap_or(self).subtree(store, segment)?;
            current = Some(next);
        }
        current.ok_or_else(|| ObjectError::DirectoryNotFound(path.to_string()))
    }

    /// Iterate over every file reachable from this tree, depth first.
    pub fn files<'a>(&'a self, store: &'a dyn ObjectStore) -> FileIter<'a> {
        FileIter::new(store, self)
    }

    pub fn files_with_config<'a>(
        &'a self,
        store: &'a dyn ObjectStore,
        config: WalkerConfig,
    ) -> FileIter<'a> {
        FileIter::with_config(store, self, config)
    }

    /// Iterate over every subtree reachable from this tree, depth first.
    pub fn trees<'a>(&'a self, store: &'a dyn ObjectStore) -> TreeIter<'a> {
        TreeIter::new(store, self)
    }

    fn subtree(&self, store: &dyn ObjectStore, name: &str) -> ObjectResult<Tree> {
        let not_found = || ObjectError::DirectoryNotFound(name.to_string());

        let Some(entry) = self.get(name) else {
            return Err(not_found());
        };
        let object = match store.get(&entry.hash) {
            Ok(object) => object,
            Err(StoreError::NotFound(_)) => return Err(not_found()),
            Err(e) => return Err(e.into()),
        };
        if object.kind() != ObjectKind::Tree {
            return Err(not_found());
        }
        Tree::decode_with_id(&object, entry.hash)
    }
}
