use crate::hash::Hash;

/// Domain-separated BLAKE3 content hasher.
///
/// Each hasher carries a domain tag (e.g. `"arbor-blob-v1"`) that is prepended
/// to every hash computation, so a blob and a tree with identical bytes get
/// different hashes. Within one domain, equal bytes always give an equal hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Hasher for blob objects.
    pub const BLOB: Self = Self {
        domain: "arbor-blob-v1",
    };
    /// Hasher for tree objects.
    pub const TREE: Self = Self {
        domain: "arbor-tree-v1",
    };
    /// Hasher for commit objects.
    pub const COMMIT: Self = Self {
        domain: "arbor-commit-v1",
    };
    /// Hasher for tag objects.
    pub const TAG: Self = Self {
        domain: "arbor-tag-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash raw bytes with domain separation.
    pub fn hash(&self, data: &[u8]) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        Hash::from_bytes(*hasher.finalize().as_bytes())
    }

    /// Verify that data produces the expected hash.
    pub fn verify(&self, data: &[u8], expected: &Hash) -> bool {
        self.hash(data) == *expected
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}
