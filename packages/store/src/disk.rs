//! Disk-backed asset source.
//!
//! Loads a directory tree from the local filesystem into store entries.
//! This is the un-embedded counterpart to a compile-time bundle, useful
//! for development flows where the front-end output sits next to the
//! binary instead of inside it. The resulting store is a point-in-time
//! snapshot; later changes on disk are not observed.

use std::fs;
use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use walkdir::WalkDir;

use crate::path::PathError;
use crate::{AssetSource, Error, Path};

/// An [`AssetSource`] that enumerates every file under a root directory.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn entries(&self) -> Result<Vec<(Path, Bytes)>, Error> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(io::Error::other)?;
            let mut components = Vec::new();
            for (i, component) in relative.components().enumerate() {
                let name = component.as_os_str().to_str().ok_or_else(|| {
                    PathError::InvalidComponent {
                        component: component.as_os_str().to_string_lossy().into_owned(),
                        position: i,
                        message: "not valid UTF-8".to_string(),
                    }
                })?;
                components.push(name.to_string());
            }
            let path = Path::try_from_components(components)?;

            log::debug!("reading {}...", entry.path().display());
            let data = fs::read(entry.path())?;
            entries.push((path, Bytes::from(data)));
        }
        Ok(entries)
    }
}
