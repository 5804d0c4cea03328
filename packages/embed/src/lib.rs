//! Embedded front-end assets (built into the server binary).
//!
//! This crate isolates the (potentially large) embedded bundle from the
//! rest of the workspace, so touching server code does not re-embed the
//! front-end build output. The bundle is exposed as a read-only
//! [`AssetStore`]: the full tree via [`bundle`], and the servable document
//! root (everything under [`ROOT_PATH`]) via [`assets`].
//!
//! The `assets/` directory holds the front-end build output; its `static/`
//! subtree is the document root served to browsers.

use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use staticfs_store::{path, AssetStore};

mod source;

pub use source::EmbedSource;

/// The logical subtree of the bundle that constitutes the servable
/// document root.
pub const ROOT_PATH: &str = "static";

/// The default document, relative to the full bundle.
pub const INDEX_PATH: &str = "static/index.html";

/// The embedded front-end build output.
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct BundledAssets;

lazy_static! {
    static ref BUNDLE: AssetStore =
        AssetStore::from_source(&EmbedSource::<BundledAssets>::new())
            .expect("embedded asset bundle is malformed");
    static ref DOCUMENT_ROOT: AssetStore = BUNDLE
        .sub(&path!(ROOT_PATH))
        .expect("embedded asset bundle has no static document root");
}

/// The full embedded bundle, rooted above [`ROOT_PATH`].
pub fn bundle() -> &'static AssetStore {
    &BUNDLE
}

/// The document root: the bundle re-rooted at [`ROOT_PATH`].
///
/// Built once, on first access, for the lifetime of the process. Paths
/// outside [`ROOT_PATH`] are unreachable through this store.
pub fn assets() -> &'static AssetStore {
    &DOCUMENT_ROOT
}
