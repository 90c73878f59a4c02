//! Shared fixtures for unit tests.

use arbor_store::ObjectStore;
use arbor_types::Hash;

use crate::blob::Blob;
use crate::mode::FileMode;
use crate::tree::{Tree, TreeEntry};

pub(crate) fn put_blob(store: &dyn ObjectStore, data: &[u8]) -> Hash {
    Blob::new(data.to_vec()).persist(store).unwrap()
}

pub(crate) fn put_tree(store: &dyn ObjectStore, entries: Vec<TreeEntry>) -> Tree {
    let mut tree = Tree::new(entries);
    tree.persist(store).unwrap();
    tree
}

/// ```text
/// a.txt      "alpha"
/// b/c.txt    "charlie"
/// d.txt      "delta"
/// ```
pub(crate) fn fixture(store: &dyn ObjectStore) -> Tree {
    let a = put_blob(store, b"alpha");
    let c = put_blob(store, b"charlie");
    let d = put_blob(store, b"delta");
    let b = put_tree(store, vec![TreeEntry::new("c.txt", FileMode::REGULAR, c)]);
    put_tree(
        store,
        vec![
            TreeEntry::new("a.txt", FileMode::REGULAR, a),
            TreeEntry::new("b", FileMode::DIRECTORY, b.hash()),
            TreeEntry::new("d.txt", FileMode::REGULAR, d),
        ],
    )
}

/// `trees` nested single-directory trees, root included, with one file in
/// the innermost.
pub(crate) fn nested_chain(store: &dyn ObjectStore, trees: usize) -> Tree {
    let leaf = put_blob(store, b"leaf");
    let mut current = put_tree(store, vec![TreeEntry::new("leaf.txt", FileMode::REGULAR, leaf)]);
    for _ in 1..trees {
        current = put_tree(
            store,
            vec![TreeEntry::new("d", FileMode::DIRECTORY, current.hash())],
        );
    }
    current
}
