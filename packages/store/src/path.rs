//! Relative asset path with validated file-name components.

use std::fmt;

/// Errors related to asset path parsing and validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A path component is not a valid file name.
    #[error("invalid path component '{component}' at position {position}: {message}")]
    InvalidComponent {
        component: String,
        position: usize,
        message: String,
    },
}

/// A validated relative path into an asset tree.
///
/// Path components are plain file names: any non-empty UTF-8 string that is
/// not `.` or `..` and contains no separator or NUL characters. Traversal
/// sequences are rejected outright rather than normalized, so a path can
/// never escape the tree it is resolved against.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// Parse a path string, validating components.
    ///
    /// # Path Syntax
    ///
    /// - Components are separated by `/`
    /// - Empty components are ignored (normalizes `//`, leading and
    ///   trailing `/`)
    /// - `.` and `..` components are rejected
    ///
    /// # Examples
    ///
    /// ```rust
    /// use staticfs_store::Path;
    ///
    /// let path = Path::parse("_next/static/chunks/main.js").unwrap();
    /// assert_eq!(path.len(), 4);
    ///
    /// // Trailing slashes are normalized
    /// assert_eq!(Path::parse("css/app.css/").unwrap(), Path::parse("css/app.css").unwrap());
    ///
    /// // Traversal is rejected, not normalized
    /// assert!(Path::parse("../secrets").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let components: Vec<String> = s
            .split('/')
            .filter(|c| !c.is_empty())
            .map(|c| c.to_string())
            .collect();

        for (i, component) in components.iter().enumerate() {
            Self::validate_component(component, i)?;
        }

        Ok(Path { components })
    }

    /// The empty path (the root of whatever tree it is resolved against).
    pub fn root() -> Self {
        Path {
            components: Vec::new(),
        }
    }

    /// Try to create a path from components, validating each.
    pub fn try_from_components(components: Vec<String>) -> Result<Self, PathError> {
        for (i, component) in components.iter().enumerate() {
            Self::validate_component(component, i)?;
        }
        Ok(Path { components })
    }

    /// Validate a single path component.
    fn validate_component(component: &str, position: usize) -> Result<(), PathError> {
        if component.is_empty() {
            return Err(PathError::InvalidComponent {
                component: component.to_string(),
                position,
                message: "empty component".to_string(),
            });
        }

        if component == "." || component == ".." {
            return Err(PathError::InvalidComponent {
                component: component.to_string(),
                position,
                message: "directory traversal component".to_string(),
            });
        }

        for c in component.chars() {
            if c == '/' || c == '\\' || c == '\0' {
                return Err(PathError::InvalidComponent {
                    component: component.to_string(),
                    position,
                    message: format!("invalid character {:?} in file name", c),
                });
            }
        }

        Ok(())
    }

    /// Check if this path is empty (root path).
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Get the number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Iterate over components.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.components.iter()
    }

    /// Join this path with another.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Path { components }
    }

    /// Check if this path has the given prefix.
    pub fn has_prefix(&self, prefix: &Path) -> bool {
        prefix.components.len() <= self.components.len()
            && prefix.components == self.components[..prefix.components.len()]
    }

    /// Strip a prefix from this path.
    ///
    /// Returns `None` if the prefix doesn't match.
    #[must_use]
    pub fn strip_prefix(&self, prefix: &Path) -> Option<Path> {
        if self.has_prefix(prefix) {
            Some(Path {
                components: self.components[prefix.components.len()..].to_vec(),
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

impl std::str::FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

/// Macro for creating paths from literals.
///
/// # Example
///
/// ```rust
/// use staticfs_store::path;
///
/// let p = path!("_next/static/css");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s).expect("invalid path literal")
    };
}
