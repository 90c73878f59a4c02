//! Pre-order, depth-first traversal of a tree.
//!
//! [`TreeWalker`] keeps an explicit stack of frames instead of recursing, so
//! the depth of the object graph never touches the call stack. Each frame is
//! a tree, a cursor into its entries and the path that leads to it. When an
//! entry resolves to another tree, a new frame is pushed and its children are
//! produced before the parent's remaining siblings.

use std::ops::Deref;
use std::sync::Arc;

use arbor_store::{ObjectStore, StoreError};
use arbor_types::CloseableIter;
use tracing::{debug, warn};

use crate::config::WalkerConfig;
use crate::error::{ObjectError, ObjectResult};
use crate::object::Object;
use crate::tree::{Tree, TreeEntry};

/// Default maximum number of frames on the walker stack, root included.
pub const MAX_TREE_DEPTH: usize = 1024;

/// One step of a walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkItem {
    /// Slash-separated path from the root tree.
    pub path: String,
    pub entry: TreeEntry,
    pub object: Object,
}

enum FrameTree<'a> {
    Root(&'a Tree),
    Child(Arc<Tree>),
}

impl Deref for FrameTree<'_> {
    type Target = Tree;

    fn deref(&self) -> &Tree {
        match self {
            FrameTree::Root(tree) => tree,
            FrameTree::Child(tree) => tree.as_ref(),
        }
    }
}

struct Frame<'a> {
    tree: FrameTree<'a>,
    pos: usize,
    base: String,
}

/// Depth-first walker over a root tree and everything reachable from it.
///
/// The walker borrows the root and the store. Any error ends the walk: the
/// error is yielded once and every later call to `next` returns `None`.
pub struct TreeWalker<'a> {
    store: &'a dyn ObjectStore,
    root: &'a Tree,
    config: WalkerConfig,
    stack: Vec<Frame<'a>>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(store: &'a dyn ObjectStore, root: &'a Tree) -> Self {
        Self::with_config(store, root, WalkerConfig::default())
    }

    pub fn with_config(store: &'a dyn ObjectStore, root: &'a Tree, config: WalkerConfig) -> Self {
        let stack = vec![Frame {
            tree: FrameTree::Root(root),
            pos: 0,
            base: String::new(),
        }];
        Self {
            store,
            root,
            config,
            stack,
        }
    }

    pub fn store(&self) -> &'a dyn ObjectStore {
        self.store
    }

    pub fn root(&self) -> &'a Tree {
        self.root
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Number of frames currently on the stack. Zero once the walk is over.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn advance(&mut self) -> ObjectResult<Option<WalkItem>> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                return Ok(None);
            };
            if frame.pos >= frame.tree.len() {
                self.stack.pop();
                continue;
            }
            let entry = frame.tree.entries()[frame.pos].clone();
            frame.pos += 1;
            let path = join_path(&frame.base, &entry.name);

            let stored = match self.store.get(&entry.hash) {
                Ok(stored) => stored,
                Err(StoreError::NotFound(_)) if self.config.skip_missing_objects => {
                    debug!(path = %path, hash = %entry.hash.short_hex(), "skipping entry with missing object");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let object = Object::from_fetched(stored, entry.hash)?;
            if let Object::Tree(tree) = &object {
                if self.stack.len() >= self.config.max_depth {
                    warn!(path = %path, limit = self.config.max_depth, "maximum tree depth exceeded");
                    return Err(ObjectError::MaxTreeDepth {
                        limit: self.config.max_depth,
                    });
                }
                self.stack.push(Frame {
                    tree: FrameTree::Child(Arc::clone(tree)),
                    pos: 0,
                    base: path.clone(),
                });
            }

            return Ok(Some(WalkItem {
                path,
                entry,
                object,
            }));
        }
    }
}

fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}/{name}")
    }
}

impl Iterator for TreeWalker<'_> {
    type Item = ObjectResult<WalkItem>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => None,
            Err(e) => {
                self.close();
                Some(Err(e))
            }
        }
    }
}

impl CloseableIter for TreeWalker<'_> {
    fn close(&mut self) {
        self.stack.clear();
    }
}

impl std::fmt::Debug for TreeWalker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeWalker")
            .field("root", &self.root.hash())
            .field("depth", &self.stack.len())
            .field("config", &self.config)
            .finish()
    }
}
