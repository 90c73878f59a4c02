//! In-memory reference store for testing and ephemeral use.
//!
//! [`InMemoryRefStore`] stores all refs in a `HashMap` protected by a
//! `RwLock`. It implements the full [`RefStore`] trait and is suitable for
//! unit tests and short-lived processes.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::error::{RefError, Result};
use crate::iter::ReferenceIter;
use crate::traits::RefStore;
use crate::types::{Reference, ReferenceName};

/// An in-memory implementation of [`RefStore`].
///
/// All data lives in a `HashMap` behind a `RwLock`. Data is lost when the
/// store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryRefStore {
    refs: RwLock<HashMap<ReferenceName, Reference>>,
}

impl InMemoryRefStore {
    /// Create a new empty ref store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(e: impl std::fmt::Display) -> RefError {
    RefError::Poisoned(e.to_string())
}

impl RefStore for InMemoryRefStore {
    fn get(&self, name: &ReferenceName) -> Result<Reference> {
        let refs = self.refs.read().map_err(poisoned)?;
        refs.get(name).cloned().ok_or_else(|| RefError::NotFound {
            name: name.to_string(),
        })
    }

    fn set(&self, reference: &Reference) -> Result<()> {
        let mut refs = self.refs.write().map_err(poisoned)?;
        debug!(name = %reference.name(), "set ref");
        refs.insert(reference.name().clone(), reference.clone());
        Ok(())
    }

    fn remove(&self, name: &ReferenceName) -> Result<bool> {
        let mut refs = self.refs.write().map_err(poisoned)?;
        Ok(refs.remove(name).is_some())
    }

    fn iter(&self) -> Result<ReferenceIter<'_>> {
        let refs = self.refs.read().map_err(poisoned)?;
        let mut all: Vec<Reference> = refs.values().cloned().collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(ReferenceIter::from_refs(all))
    }
}
