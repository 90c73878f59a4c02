//! Core reference types.
//!
//! A reference is a named pointer into the object graph. It either targets an
//! object hash directly or names another reference.

use std::fmt;

use arbor_types::Hash;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::names::{validate_reference_name, HEAD, REFS_PREFIX};

const BRANCH_PREFIX: &str = "refs/heads/";
const TAG_PREFIX: &str = "refs/tags/";
const REMOTE_PREFIX: &str = "refs/remotes/";

/// A validated, canonical reference name such as `refs/heads/main` or `HEAD`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceName(String);

impl ReferenceName {
    /// Validate and wrap a full reference name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_reference_name(&name)?;
        Ok(Self(name))
    }

    /// The `HEAD` reference.
    pub fn head() -> Self {
        Self(HEAD.to_string())
    }

    /// `refs/heads/{short}`.
    pub fn branch(short: &str) -> Result<Self> {
        Self::new(format!("{BRANCH_PREFIX}{short}"))
    }

    /// `refs/tags/{short}`.
    pub fn tag(short: &str) -> Result<Self> {
        Self::new(format!("{TAG_PREFIX}{short}"))
    }

    /// `refs/remotes/{remote}/{branch}`.
    pub fn remote(remote: &str, branch: &str) -> Result<Self> {
        Self::new(format!("{REMOTE_PREFIX}{remote}/{branch}"))
    }

    /// The full name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for `HEAD`.
    pub fn is_head(&self) -> bool {
        self.0 == HEAD
    }

    /// Returns `true` for names under `refs/heads/`.
    pub fn is_branch(&self) -> bool {
        self.0.starts_with(BRANCH_PREFIX)
    }

    /// Returns `true` for names under `refs/tags/`.
    pub fn is_tag(&self) -> bool {
        self.0.starts_with(TAG_PREFIX)
    }

    /// Returns `true` for names under `refs/remotes/`.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with(REMOTE_PREFIX)
    }

    /// The name without its well-known prefix (`main` for `refs/heads/main`,
    /// `origin/main` for `refs/remotes/origin/main`).
    pub fn short(&self) -> &str {
        [BRANCH_PREFIX, TAG_PREFIX, REMOTE_PREFIX, REFS_PREFIX]
            .iter()
            .find_map(|prefix| self.0.strip_prefix(prefix))
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for ReferenceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ReferenceName {
    type Error = crate::error::RefError;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<ReferenceName> for String {
    fn from(name: ReferenceName) -> Self {
        name.0
    }
}

/// What a reference points at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefTarget {
    /// An object, by hash.
    Hash(Hash),
    /// Another reference, by name.
    Symbolic(ReferenceName),
}

/// A named reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    name: ReferenceName,
    target: RefTarget,
}

impl Reference {
    /// A reference pointing directly at an object.
    pub fn hash(name: ReferenceName, hash: Hash) -> Self {
        Self {
            name,
            target: RefTarget::Hash(hash),
        }
    }

    /// A reference pointing at another reference.
    pub fn symbolic(name: ReferenceName, target: ReferenceName) -> Self {
        Self {
            name,
            target: RefTarget::Symbolic(target),
        }
    }

    /// The name of this reference.
    pub fn name(&self) -> &ReferenceName {
        &self.name
    }

    /// What this reference points at.
    pub fn target(&self) -> &RefTarget {
        &self.target
    }

    /// The object hash, if this is a direct reference.
    pub fn target_hash(&self) -> Option<&Hash> {
        match &self.target {
            RefTarget::Hash(hash) => Some(hash),
            RefTarget::Symbolic(_) => None,
        }
    }

    /// Returns `true` if this reference names another reference.
    pub fn is_symbolic(&self) -> bool {
        matches!(self.target, RefTarget::Symbolic(_))
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            RefTarget::Hash(hash) => write!(f, "{hash} {}", self.name),
            RefTarget::Symbolic(target) => write!(f, "ref: {target} {}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_build_canonical_names() {
        assert_eq!(ReferenceName::branch("main").unwrap().as_str(), "refs/heads/main");
        assert_eq!(ReferenceName::tag("v1.0").unwrap().as_str(), "refs/tags/v1.0");
        assert_eq!(
            ReferenceName::remote("origin", "main").unwrap().as_str(),
            "refs/remotes/origin/main"
        );
        assert!(ReferenceName::head().is_head());
        assert!(ReferenceName::branch("bad..name").is_err());
    }

    #[test]
    fn classification_and_short_names() {
        let branch = ReferenceName::branch("feature/auth").unwrap();
        assert!(branch.is_branch());
        assert!(!branch.is_tag());
        assert_eq!(branch.short(), "feature/auth");

        let remote = ReferenceName::remote("origin", "main").unwrap();
        assert!(remote.is_remote());
        assert_eq!(remote.short(), "origin/main");

        let other = ReferenceName::new("refs/notes/commits").unwrap();
        assert_eq!(other.short(), "notes/commits");
        assert_eq!(ReferenceName::head().short(), "HEAD");
    }

    #[test]
    fn reference_targets() {
        let main = ReferenceName::branch("main").unwrap();
        let direct = Reference::hash(main.clone(), Hash::from_bytes([5; 32]));
        assert!(!direct.is_symbolic());
        assert_eq!(direct.target_hash(), Some(&Hash::from_bytes([5; 32])));

        let head = Reference::symbolic(ReferenceName::head(), main.clone());
        assert!(head.is_symbolic());
        assert!(head.target_hash().is_none());
        assert_eq!(head.target(), &RefTarget::Symbolic(main));
        assert_eq!(head.to_string(), "ref: refs/heads/main HEAD");
    }

    #[test]
    fn serde_validates_names() {
        let name = ReferenceName::branch("main").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"refs/heads/main\"");
        let parsed: ReferenceName = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, name);
        assert!(serde_json::from_str::<ReferenceName>("\"main\"").is_err());
    }

    #[test]
    fn reference_serde_roundtrip() {
        let reference = Reference::hash(
            ReferenceName::tag("v2").unwrap(),
            Hash::from_bytes([0xaa; 32]),
        );
        let json = serde_json::to_string(&reference).unwrap();
        let parsed: Reference = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, reference);
    }
}
