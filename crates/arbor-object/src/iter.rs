//! Walker views that surface a single kind of result.
//!
//! [`FileIter`] yields the blobs reached by a [`TreeWalker`] as [`File`]
//! values named by their full path, and [`TreeIter`] yields the subtrees.
//! Both own their walker, so closing the view closes the walk.

use std::sync::Arc;

use arbor_store::ObjectStore;
use arbor_types::{CloseableIter, IterFlow};

use crate::config::WalkerConfig;
use crate::error::{ObjectError, ObjectResult};
use crate::file::File;
use crate::object::Object;
use crate::tree::Tree;
use crate::walker::TreeWalker;

/// Every file reachable from a root tree, in walk order.
#[derive(Debug)]
pub struct FileIter<'a> {
    walker: TreeWalker<'a>,
}

impl<'a> FileIter<'a> {
    pub fn new(store: &'a dyn ObjectStore, root: &'a Tree) -> Self {
        Self::with_config(store, root, WalkerConfig::default())
    }

    pub fn with_config(store: &'a dyn ObjectStore, root: &'a Tree, config: WalkerConfig) -> Self {
        Self {
            walker: TreeWalker::with_config(store, root, config),
        }
    }

    /// Close this iterator and visit every file of the same root from the
    /// start, whatever has already been consumed.
    pub fn visit_from_root<E, F>(mut self, f: F) -> Result<(), E>
    where
        E: From<ObjectError>,
        F: FnMut(File) -> Result<IterFlow, E>,
    {
        let fresh = FileIter::with_config(
            self.walker.store(),
            self.walker.root(),
            self.walker.config().clone(),
        );
        self.close();
        fresh.visit(f)
    }
}

impl Iterator for FileIter<'_> {
    type Item = ObjectResult<File>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = match self.walker.next()? {
                Ok(item) => item,
                Err(e) => return Some(Err(e)),
            };
            if let Object::Blob(blob) = item.object {
                return Some(Ok(File::new(item.path, item.entry.mode, blob)));
            }
        }
    }
}

impl CloseableIter for FileIter<'_> {
    fn close(&mut self) {
        self.walker.close();
    }
}

/// Every subtree reachable from a root tree, in walk order. The root itself
/// is not included.
#[derive(Debug)]
pub struct TreeIter<'a> {
    walker: TreeWalker<'a>,
}

impl<'a> TreeIter<'a> {
    pub fn new(store: &'a dyn ObjectStore, root: &'a Tree) -> Self {
        Self::with_config(store, root, WalkerConfig::default())
    }

    pub fn with_config(store: &'a dyn ObjectStore, root: &'a Tree, config: WalkerConfig) -> Self {
        Self {
            walker: TreeWalker::with_config(store, root, config),
        }
    }
}

impl Iterator for TreeIter<'_> {
    type Item = ObjectResult<Arc<Tree>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.walker.next()? {
                Ok(item) => {
                    if let Object::Tree(tree) = item.object {
                        return Some(Ok(tree));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

impl CloseableIter for TreeIter<'_> {
    fn close(&mut self) {
        self.walker.close();
    }
}
