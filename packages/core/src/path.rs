//! Path type and the structural rules of the remote tree store.

use std::fmt;
use std::str::FromStr;

/// Maximum number of segments in a path.
pub const MAX_DEPTH: usize = 32;

/// Maximum byte length of a path, segments plus separators.
pub const MAX_PATH_BYTES: usize = 768;

/// Characters the store reserves for its own addressing syntax.
pub const RESERVED_CHARACTERS: [char; 5] = ['.', '$', '#', '[', ']'];

/// Errors related to path validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has more segments than the store allows.
    #[error("path is {depth} segments deep, the maximum is {max}", max = MAX_DEPTH)]
    TooDeep { depth: usize },

    /// The encoded path is longer than the store allows.
    #[error("path is {length} bytes long, the maximum is {max}", max = MAX_PATH_BYTES)]
    TooLong { length: usize },

    /// A segment contains a reserved character.
    #[error("invalid character '{character}' in path segment '{segment}' at position {position}")]
    IllegalCharacter {
        segment: String,
        character: char,
        position: usize,
    },
}

/// A path in the remote tree.
///
/// Constructing a `Path` with [`Path::new`] only splits and normalizes; it
/// never fails. Use [`Path::parse`] or [`Path::validate`] to check the
/// structural limits the store enforces.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    pub components: Vec<String>,
}

impl Path {
    /// The root path.
    pub fn root() -> Self {
        Path {
            components: Vec::new(),
        }
    }

    /// Split a path string into segments.
    ///
    /// Empty segments are dropped, so leading, trailing and doubled slashes
    /// are normalized away.
    ///
    /// ```rust
    /// use rtdb_core::Path;
    ///
    /// assert_eq!(Path::new("/users//alice/"), Path::new("users/alice"));
    /// assert!(Path::new("").is_empty());
    /// ```
    pub fn new(s: &str) -> Self {
        Path {
            components: s
                .split('/')
                .filter(|c| !c.is_empty())
                .map(|c| c.to_string())
                .collect(),
        }
    }

    /// Split and validate a path string.
    ///
    /// ```rust
    /// use rtdb_core::{Path, PathError};
    ///
    /// assert_eq!(Path::parse("users/alice").unwrap().len(), 2);
    /// assert!(matches!(
    ///     Path::parse("users/a.b"),
    ///     Err(PathError::IllegalCharacter { .. })
    /// ));
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        let path = Path::new(s);
        path.validate()?;
        Ok(path)
    }

    /// Check this path against the store's depth, size and character rules.
    ///
    /// Checks run in that order and the first failure is reported.
    pub fn validate(&self) -> Result<(), PathError> {
        if self.components.len() > MAX_DEPTH {
            return Err(PathError::TooDeep {
                depth: self.components.len(),
            });
        }

        let length = self.encoded_len();
        if length > MAX_PATH_BYTES {
            return Err(PathError::TooLong { length });
        }

        for (position, segment) in self.components.iter().enumerate() {
            if let Some(character) = segment.chars().find(|c| RESERVED_CHARACTERS.contains(c)) {
                return Err(PathError::IllegalCharacter {
                    segment: segment.clone(),
                    character,
                    position,
                });
            }
        }

        Ok(())
    }

    /// Byte length of the `/`-joined form.
    pub fn encoded_len(&self) -> usize {
        let separators = self.components.len().saturating_sub(1);
        self.components.iter().map(String::len).sum::<usize>() + separators
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

    /// The last segment, or `None` for the root.
    pub fn key(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// The path one level up, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        if self.is_empty() {
            return None;
        }
        Some(Path {
            components: self.components[..self.components.len() - 1].to_vec(),
        })
    }

    /// Join this path with another.
    ///
    /// The result is not re-validated; a joined path may exceed the store's
    /// limits and is rejected when a query is built for it.
    #[must_use]
    pub fn join(&self, other: &Path) -> Path {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Path { components }
    }
}

/// Validate a path string without keeping the parsed form.
pub fn validate(path: &str) -> Result<(), PathError> {
    Path::new(path).validate()
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("/"))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::new(s)
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.components[i]
    }
}

/// Macro for creating validated path literals.
///
/// # Example
///
/// ```rust
/// use rtdb_core::path;
///
/// let p = path!("users/alice/name");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s).expect("invalid path literal")
    };
}
