//! Qualified type names.
//!
//! A qualified name is a Rust path with at least one segment, stored in its
//! canonical `a::b::C` form so equality and hashing are plain string ops.

use std::fmt;

/// Separator between path segments.
const SEPARATOR: &str = "::";

/// Error when a string is not a valid qualified name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The input was empty.
    Empty,
    /// A segment between separators was empty (e.g. `a::::b` or `::a`).
    EmptySegment(String),
    /// A segment contained a character that cannot appear in an identifier.
    InvalidSegment(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::Empty => write!(f, "qualified name is empty"),
            PathError::EmptySegment(path) => {
                write!(f, "qualified name `{path}` has an empty segment")
            }
            PathError::InvalidSegment(segment) => {
                write!(f, "`{segment}` is not a valid path segment")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Fully qualified name of a type, e.g. `crate::store::Meal`.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QualifiedName {
    path: Box<str>,
}

impl QualifiedName {
    /// Parse a `::`-separated path.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        for segment in path.split(SEPARATOR) {
            validate_segment(segment, path)?;
        }
        Ok(QualifiedName { path: path.into() })
    }

    /// The root of the current crate, `crate`.
    pub fn crate_root() -> Self {
        QualifiedName {
            path: "crate".into(),
        }
    }

    /// Build a name from individual segments.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut path = String::new();
        for segment in segments {
            if !path.is_empty() {
                path.push_str(SEPARATOR);
            }
            path.push_str(segment.as_ref());
        }
        Self::parse(&path)
    }

    /// The canonical `a::b::C` text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Iterate over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split(SEPARATOR)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// Always false; a qualified name has at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Last segment (`Meal` for `crate::store::Meal`).
    pub fn simple_name(&self) -> &str {
        self.path
            .rsplit_once(SEPARATOR)
            .map_or(&*self.path, |(_, last)| last)
    }

    /// Everything before the last segment, if there is anything.
    pub fn parent(&self) -> Option<QualifiedName> {
        self.path
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| QualifiedName {
                path: parent.into(),
            })
    }

    /// Append one segment.
    pub fn child(&self, segment: &str) -> Result<QualifiedName, PathError> {
        let path = format!("{}{SEPARATOR}{segment}", self.path);
        validate_segment(segment, &path)?;
        Ok(QualifiedName { path: path.into() })
    }
}

fn validate_segment(segment: &str, path: &str) -> Result<(), PathError> {
    if segment.is_empty() {
        return Err(PathError::EmptySegment(path.to_string()));
    }
    if !segment.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(PathError::InvalidSegment(segment.to_string()));
    }
    Ok(())
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl fmt::Debug for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QualifiedName({})", self.path)
    }
}

impl std::str::FromStr for QualifiedName {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for QualifiedName {
    fn as_ref(&self) -> &str {
        &self.path
    }
}
