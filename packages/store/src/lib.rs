//! StaticFS store: read-only, path-keyed access to bundled files.
//!
//! The store is an immutable virtual file tree built once from an
//! [`AssetSource`] and queried by validated relative [`Path`]s:
//! - [`AssetStore::read_file`]: full content bytes of a file
//! - [`AssetStore::read_dir`]: lexicographic listing of a directory
//! - [`AssetStore::sub`]: a view re-rooted at a subtree, through which
//!   paths outside that subtree are unreachable
//!
//! Lookups have a single failure mode, [`Error::NotFound`], raised for
//! absent paths and for file/directory kind mismatches. Everything is a
//! pure in-memory lookup; a store is freely shared across threads.
//!
//! # Example
//!
//! ```rust
//! use staticfs_store::{AssetRead, AssetStore, Bytes, path};
//!
//! fn serve(root: &dyn AssetRead) -> Result<Bytes, staticfs_store::Error> {
//!     root.get("index.html")
//! }
//!
//! let store = AssetStore::from_entries([
//!     (path!("static/index.html"), Bytes::from_static(b"<body></body>")),
//! ]).unwrap();
//! let root = store.sub(&path!("static")).unwrap();
//! assert!(serve(&root).is_ok());
//! ```

pub use bytes::Bytes;

mod disk;
mod error;
mod path;
mod store;
mod traits;
mod tree;

pub use disk::DirSource;
pub use error::Error;
pub use path::{Path, PathError};
pub use store::AssetStore;
pub use traits::{AssetRead, AssetSource};
