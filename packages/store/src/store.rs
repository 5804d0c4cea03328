//! The read-only asset store and its sub-rooted views.

use std::sync::Arc;

use bytes::Bytes;

use crate::tree::Node;
use crate::{AssetSource, Error, Path};

/// An immutable, path-keyed view over a tree of bundled files.
///
/// A store is built exactly once from an [`AssetSource`] and never mutated
/// afterwards. Every view created by [`AssetStore::sub`] shares the same
/// backing tree behind an `Arc` and differs only in its root prefix, so
/// cloning and sub-rooting are cheap and lookups through a view can never
/// escape its subtree.
///
/// All operations take `&self` and touch no shared mutable state, so a
/// store can be read concurrently from any number of threads.
///
/// # Example
///
/// ```rust
/// use staticfs_store::{AssetStore, Bytes, path};
///
/// let store = AssetStore::from_entries([
///     (path!("static/index.html"), Bytes::from_static(b"<body></body>")),
///     (path!("static/css/app.css"), Bytes::from_static(b"body{}")),
/// ]).unwrap();
///
/// let root = store.sub(&path!("static")).unwrap();
/// assert!(root.read_file(&path!("index.html")).is_ok());
/// assert_eq!(root.read_dir(&path!("css")).unwrap(), vec!["app.css"]);
/// ```
#[derive(Clone)]
pub struct AssetStore {
    tree: Arc<Node>,
    root: Path,
}

impl AssetStore {
    /// Build a store from `(path, content)` entries.
    ///
    /// Intermediate directories are created implicitly. Fails with
    /// [`Error::Conflict`] when two entries disagree about whether a path
    /// is a file or a directory.
    pub fn from_entries<I>(entries: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Path, Bytes)>,
    {
        let mut root = Node::empty_dir();
        let mut count = 0usize;
        for (path, data) in entries {
            root.insert(&path, data)?;
            count += 1;
        }
        log::debug!("built asset store with {} files", count);
        Ok(AssetStore {
            tree: Arc::new(root),
            root: Path::root(),
        })
    }

    /// Build a store from anything that can enumerate asset entries.
    pub fn from_source(source: &dyn AssetSource) -> Result<Self, Error> {
        Self::from_entries(source.entries()?)
    }

    /// Derive a new view rooted at `root`.
    ///
    /// Fails with [`Error::NotFound`] when `root` is absent or names a
    /// file. The view shares this store's tree; paths outside `root` are
    /// unreachable through it.
    pub fn sub(&self, root: &Path) -> Result<AssetStore, Error> {
        let full = self.root.join(root);
        match self.tree.lookup(&full) {
            Some(Node::Dir(_)) => Ok(AssetStore {
                tree: Arc::clone(&self.tree),
                root: full,
            }),
            _ => Err(Error::not_found(root)),
        }
    }

    /// Read the full content of the file at `path`, relative to this
    /// view's root.
    ///
    /// Fails with [`Error::NotFound`] when `path` is absent or names a
    /// directory. The returned [`Bytes`] is a cheap reference-counted
    /// handle into the shared tree.
    pub fn read_file(&self, path: &Path) -> Result<Bytes, Error> {
        match self.tree.lookup(&self.root.join(path)) {
            Some(Node::File(data)) => Ok(data.clone()),
            _ => Err(Error::not_found(path)),
        }
    }

    /// List the names of the immediate children of the directory at
    /// `path`, in lexicographic order.
    ///
    /// Fails with [`Error::NotFound`] when `path` is absent or names a
    /// file.
    pub fn read_dir(&self, path: &Path) -> Result<Vec<String>, Error> {
        match self.tree.lookup(&self.root.join(path)) {
            Some(Node::Dir(children)) => Ok(children.keys().cloned().collect()),
            _ => Err(Error::not_found(path)),
        }
    }

    /// Whether `path` exists in this view, as either a file or a directory.
    pub fn contains(&self, path: &Path) -> bool {
        self.tree.lookup(&self.root.join(path)).is_some()
    }

    /// Whether `path` exists in this view and names a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        matches!(
            self.tree.lookup(&self.root.join(path)),
            Some(Node::Dir(_))
        )
    }
}

impl std::fmt::Debug for AssetStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetStore")
            .field("root", &self.root.to_string())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    fn sample_store() -> AssetStore {
        AssetStore::from_entries([
            (
                path!("static/index.html"),
                Bytes::from_static(b"<html><body>hi</body></html>"),
            ),
            (
                path!("static/favicon.ico"),
                Bytes::from_static(&[0x00, 0x00, 0x01, 0x00]),
            ),
            (
                path!("static/_next/static/chunks/main.js"),
                Bytes::from_static(b"console.log(1)"),
            ),
            (
                path!("static/_next/static/css/app.css"),
                Bytes::from_static(b"body{margin:0}"),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn read_file_returns_content() {
        let store = sample_store();
        let data = store.read_file(&path!("static/index.html")).unwrap();
        assert_eq!(data.as_ref(), b"<html><body>hi</body></html>");
    }

    #[test]
    fn read_file_missing_is_not_found() {
        let store = sample_store();
        let err = store.read_file(&path!("static/missing.html")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(err.to_string().contains("static/missing.html"));
    }

    #[test]
    fn read_file_on_directory_is_not_found() {
        let store = sample_store();
        let err = store.read_file(&path!("static")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn read_dir_lists_children_sorted() {
        let store = sample_store();
        let names = store.read_dir(&path!("static")).unwrap();
        assert_eq!(names, vec!["_next", "favicon.ico", "index.html"]);
    }

    #[test]
    fn read_dir_on_file_is_not_found() {
        let store = sample_store();
        let err = store.read_dir(&path!("static/index.html")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn sub_confines_lookups() {
        let store = sample_store();
        let rooted = store.sub(&path!("static")).unwrap();

        assert!(rooted.read_file(&path!("index.html")).is_ok());
        // The original root prefix is not visible through the view.
        assert!(rooted.read_file(&path!("static/index.html")).is_err());
        assert!(!rooted.contains(&path!("static")));
    }

    #[test]
    fn sub_of_missing_directory_fails() {
        let store = sample_store();
        let err = store.sub(&path!("nope")).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn sub_of_file_fails() {
        let store = sample_store();
        assert!(store.sub(&path!("static/index.html")).is_err());
    }

    #[test]
    fn sub_can_be_nested() {
        let store = sample_store();
        let rooted = store.sub(&path!("static")).unwrap();
        let chunks = rooted.sub(&path!("_next/static/chunks")).unwrap();
        assert!(chunks.read_file(&path!("main.js")).is_ok());
    }

    #[test]
    fn repeated_reads_are_identical() {
        let store = sample_store();
        let p = path!("static/_next/static/css/app.css");
        let first = store.read_file(&p).unwrap();
        let second = store.read_file(&p).unwrap();
        assert_eq!(first, second);

        let d = path!("static/_next/static/chunks");
        assert_eq!(store.read_dir(&d).unwrap(), store.read_dir(&d).unwrap());
    }

    #[test]
    fn contains_and_is_dir() {
        let store = sample_store();
        assert!(store.contains(&path!("static/favicon.ico")));
        assert!(store.contains(&path!("static/_next")));
        assert!(!store.contains(&path!("static/nope")));

        assert!(store.is_dir(&path!("static/_next")));
        assert!(!store.is_dir(&path!("static/favicon.ico")));
        assert!(!store.is_dir(&path!("static/nope")));
    }

    #[test]
    fn clones_share_the_tree() {
        let store = sample_store();
        let clone = store.clone();
        assert_eq!(
            store.read_file(&path!("static/index.html")).unwrap(),
            clone.read_file(&path!("static/index.html")).unwrap()
        );
    }

    #[test]
    fn concurrent_reads() {
        let store = std::sync::Arc::new(sample_store().sub(&path!("static")).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        store.read_file(&path!("index.html")).unwrap();
                        store.read_dir(&path!("_next/static")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn debug_names_the_root() {
        let store = sample_store().sub(&path!("static")).unwrap();
        assert!(format!("{:?}", store).contains("static"));
    }
}
