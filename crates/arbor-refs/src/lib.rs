//! Reference management for Arbor.
//!
//! References are the human-readable entry points into the object graph,
//! analogous to git refs. A reference either points straight at an object
//! hash or, symbolically, at another reference (as `HEAD` usually does).
//!
//! # Modules
//!
//! - [`error`] — Error types for ref operations
//! - [`types`] — Core ref types: [`Reference`], [`ReferenceName`], [`RefTarget`]
//! - [`names`] — Git-style reference name validation
//! - [`traits`] — The [`RefStore`] trait defining the storage interface
//! - [`iter`] — The closable [`ReferenceIter`]
//! - [`memory`] — In-memory [`InMemoryRefStore`] for tests

pub mod error;
pub mod iter;
pub mod memory;
pub mod names;
pub mod traits;
pub mod types;

pub use error::{RefError, Result};
pub use iter::ReferenceIter;
pub use memory::InMemoryRefStore;
pub use names::validate_reference_name;
pub use traits::{RefStore, MAX_RESOLVE_DEPTH};
pub use types::{RefTarget, Reference, ReferenceName};
