//! Object model for Arbor.
//!
//! Turns the raw encoded objects of an [`ObjectStore`] into typed values and
//! navigates the graph they form:
//!
//! - [`Tree`] / [`TreeEntry`] / [`FileMode`] -- the tree binary format
//!   (`Tree::decode` / `Tree::encode`) and a lazily built name index
//! - [`Tree::find_entry`] / [`Tree::file`] / [`Tree::tree`] -- path resolution
//!   through nested trees
//! - [`TreeWalker`] -- pre-order, depth-first traversal with an explicit frame
//!   stack and a depth limit
//! - [`FileIter`] / [`TreeIter`] -- walker views that surface only files or
//!   only subtrees
//! - [`Storage`] -- the object store and reference store bundled together
//!
//! # Tree wire format
//!
//! A tree body is a sequence of records, with no count prefix and no trailing
//! separator:
//!
//! ```text
//! <octal mode> 0x20 <name bytes> 0x00 <32 raw hash bytes>
//! ```
//!
//! [`ObjectStore`]: arbor_store::ObjectStore

pub mod blob;
pub mod codec;
pub mod config;
pub mod error;
pub mod file;
pub mod iter;
pub mod mode;
pub mod object;
pub mod resolve;
pub mod storage;
pub mod tree;
pub mod walker;

#[cfg(test)]
mod testutil;

pub use blob::Blob;
pub use config::WalkerConfig;
pub use error::{ObjectError, ObjectResult};
pub use file::File;
pub use iter::{FileIter, TreeIter};
pub use mode::{FileMode, ModeKind};
pub use object::Object;
pub use storage::{InMemoryStorage, Storage};
pub use tree::{Tree, TreeEntry};
pub use walker::{TreeWalker, WalkItem, MAX_TREE_DEPTH};
