//! Foundation types for Arbor.
//!
//! Every other Arbor crate depends on `arbor-types`. It holds the pieces that
//! are shared by storage backends, reference stores, and the object model:
//!
//! - [`Hash`] — Fixed-width content identifier (BLAKE3)
//! - [`ContentHasher`] — Domain-separated hashing, one domain per object kind
//! - [`CloseableIter`] / [`IterFlow`] — The forward-only, closable iteration
//!   protocol with its stop signal
//! - [`TypeError`] — Parse errors for the types above

pub mod error;
pub mod hash;
pub mod hasher;
pub mod iter;

pub use error::TypeError;
pub use hash::Hash;
pub use hasher::ContentHasher;
pub use iter::{CloseableIter, IterFlow};
