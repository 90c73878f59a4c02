//! Content-addressed object storage for Arbor.
//!
//! This crate defines the storage contract consumed by the object model: a
//! hash-keyed store of immutable encoded objects, analogous to git's
//! `.git/objects/` directory. Every blob, tree, commit and tag is stored as an
//! [`EncodedObject`] identified by the BLAKE3 hash of its bytes
//! (domain-separated by object kind).
//!
//! # Storage Backends
//!
//! All backends implement the [`ObjectStore`] trait:
//!
//! - [`InMemoryObjectStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. Objects are immutable once written (content-addressing guarantees this).
//! 2. Objects are built through [`ObjectStore::new_object`], filled through
//!    their writer, and only then handed to [`ObjectStore::set`].
//! 3. A missing object is always reported as [`StoreError::NotFound`], so
//!    callers can tell absence apart from backend failure.
//! 4. The store never interprets object contents.

pub mod error;
pub mod iter;
pub mod memory;
pub mod object;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use iter::ObjectIter;
pub use memory::InMemoryObjectStore;
pub use object::{EncodedObject, ObjectKind, StoredObject};
pub use traits::ObjectStore;
