//! The in-memory asset tree.
//!
//! Nodes form the shared backing structure behind every [`crate::AssetStore`]
//! view. The tree is only mutated while a store is being constructed from a
//! source; afterwards it sits behind an `Arc` and is read-only.

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::{Error, Path};

/// A single entry in the asset tree: file bytes or a directory of children.
///
/// Directories use `BTreeMap` so listings come out lexicographic without a
/// sort pass, and stay stable across calls.
#[derive(Debug, Clone)]
pub(crate) enum Node {
    File(Bytes),
    Dir(BTreeMap<String, Node>),
}

impl Node {
    pub(crate) fn empty_dir() -> Self {
        Node::Dir(BTreeMap::new())
    }

    /// Insert file content at `path`, creating intermediate directories.
    ///
    /// Fails with [`Error::Conflict`] when the path runs through an existing
    /// file, or when a directory already exists where the file should go.
    /// Re-inserting an existing file overwrites it (sources enumerate each
    /// file once, so this only matters for hand-built trees).
    pub(crate) fn insert(&mut self, path: &Path, data: Bytes) -> Result<(), Error> {
        let Some((file_name, parents)) = path.components.split_last() else {
            // The root is always a directory; a file cannot live at "".
            return Err(Error::Conflict { path: path.clone() });
        };

        let mut node = self;
        for (i, component) in parents.iter().enumerate() {
            let children = match node {
                Node::Dir(children) => children,
                Node::File(_) => {
                    return Err(Error::Conflict {
                        path: Path {
                            components: path.components[..i].to_vec(),
                        },
                    })
                }
            };
            node = children
                .entry(component.clone())
                .or_insert_with(Node::empty_dir);
        }

        match node {
            Node::Dir(children) => {
                if matches!(children.get(file_name), Some(Node::Dir(_))) {
                    return Err(Error::Conflict { path: path.clone() });
                }
                children.insert(file_name.clone(), Node::File(data));
                Ok(())
            }
            Node::File(_) => Err(Error::Conflict {
                path: Path {
                    components: parents.to_vec(),
                },
            }),
        }
    }

    /// Resolve `path` relative to this node.
    ///
    /// Returns `None` when the path is absent or runs through a file.
    pub(crate) fn lookup(&self, path: &Path) -> Option<&Node> {
        let mut node = self;
        for component in path.iter() {
            match node {
                Node::Dir(children) => node = children.get(component)?,
                Node::File(_) => return None,
            }
        }
        Some(node)
    }
}
