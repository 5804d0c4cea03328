//! Bridge from a rust-embed payload to an [`AssetSource`].

use std::borrow::Cow;
use std::marker::PhantomData;

use bytes::Bytes;
use rust_embed::RustEmbed;
use staticfs_store::{AssetSource, Error, Path};

/// An [`AssetSource`] over any `#[derive(RustEmbed)]` payload.
///
/// Embedded payloads are `'static`, so release-mode entries are handed to
/// the store zero-copy via [`Bytes::from_static`]. (In debug builds
/// rust-embed reads from disk and the bytes are owned.)
pub struct EmbedSource<E: RustEmbed> {
    _payload: PhantomData<E>,
}

impl<E: RustEmbed> EmbedSource<E> {
    pub fn new() -> Self {
        Self {
            _payload: PhantomData,
        }
    }
}

impl<E: RustEmbed> Default for EmbedSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: RustEmbed> AssetSource for EmbedSource<E> {
    fn entries(&self) -> Result<Vec<(Path, Bytes)>, Error> {
        let mut entries = Vec::new();
        for name in E::iter() {
            let path = Path::parse(&name)?;
            // iter() only yields embedded names, but the lookup is still
            // fallible at the API level.
            let file = E::get(&name).ok_or_else(|| Error::NotFound { path: path.clone() })?;
            let data = match file.data {
                Cow::Borrowed(bytes) => Bytes::from_static(bytes),
                Cow::Owned(bytes) => Bytes::from(bytes),
            };
            entries.push((path, data));
        }
        log::debug!("enumerated {} embedded assets", entries.len());
        Ok(entries)
    }
}
