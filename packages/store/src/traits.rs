//! Store traits: AssetRead, AssetSource.

use bytes::Bytes;

use crate::{AssetStore, Error, Path};

/// Read files and directory listings from an asset tree.
///
/// This is the seam handed to serving collaborators: a server can hold a
/// `&dyn AssetRead` rooted at its document root and map [`Error::NotFound`]
/// to its 404 without knowing how the tree was produced.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn AssetRead>`.
pub trait AssetRead: Send + Sync {
    /// Read the full content of the file at `path`.
    fn read_file(&self, path: &Path) -> Result<Bytes, Error>;

    /// List the immediate child names of the directory at `path`,
    /// lexicographically ordered.
    fn read_dir(&self, path: &Path) -> Result<Vec<String>, Error>;

    /// String-boundary convenience: parse and read a file.
    ///
    /// Request paths arrive as strings; invalid syntax (traversal
    /// sequences, embedded separators) is rejected before any lookup.
    fn get(&self, path: &str) -> Result<Bytes, Error> {
        self.read_file(&Path::parse(path)?)
    }

    /// String-boundary convenience: parse and list a directory.
    fn list(&self, path: &str) -> Result<Vec<String>, Error> {
        self.read_dir(&Path::parse(path)?)
    }
}

impl AssetRead for AssetStore {
    fn read_file(&self, path: &Path) -> Result<Bytes, Error> {
        AssetStore::read_file(self, path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>, Error> {
        AssetStore::read_dir(self, path)
    }
}

/// Anything that can enumerate `(path, content)` entries for store
/// construction: an embedded bundle, a directory on disk, a test fixture.
pub trait AssetSource {
    /// Enumerate every file in the source.
    ///
    /// Only files are listed; directories are implied by file paths.
    fn entries(&self) -> Result<Vec<(Path, Bytes)>, Error>;
}

// Blanket implementations for references and boxes

impl<T: AssetRead + ?Sized> AssetRead for &T {
    fn read_file(&self, path: &Path) -> Result<Bytes, Error> {
        (**self).read_file(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>, Error> {
        (**self).read_dir(path)
    }
}

impl<T: AssetRead + ?Sized> AssetRead for Box<T> {
    fn read_file(&self, path: &Path) -> Result<Bytes, Error> {
        self.as_ref().read_file(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>, Error> {
        self.as_ref().read_dir(path)
    }
}

impl<T: AssetRead + ?Sized> AssetRead for std::sync::Arc<T> {
    fn read_file(&self, path: &Path) -> Result<Bytes, Error> {
        self.as_ref().read_file(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>, Error> {
        self.as_ref().read_dir(path)
    }
}

impl<T: AssetSource + ?Sized> AssetSource for &T {
    fn entries(&self) -> Result<Vec<(Path, Bytes)>, Error> {
        (**self).entries()
    }
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn entries(&self) -> Result<Vec<(Path, Bytes)>, Error> {
        self.as_ref().entries()
    }
}
