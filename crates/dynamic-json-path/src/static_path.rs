//! Precompiled key paths.

use std::fmt;
use std::str::FromStr;

use crate::resolve::{split_path, KeyPath, DELIMITER};
use crate::PathError;

/// A key path validated once at construction.
///
/// A `StaticPath` always holds at least one segment and no segment is empty,
/// so resolving it never has to split or check a string again. It resolves
/// exactly like the equivalent dot-delimited string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StaticPath {
    segments: Vec<String>,
}

impl StaticPath {
    /// Parse a dot-delimited path.
    ///
    /// # Errors
    ///
    /// - `PathError::EmptyPath` - if `path` is empty
    /// - `PathError::EmptySegment` - if any segment between delimiters is empty
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_json_path::{PathError, StaticPath};
    ///
    /// let path = StaticPath::parse("a.b").unwrap();
    /// assert_eq!(path.segments(), ["a", "b"]);
    ///
    /// assert_eq!(StaticPath::parse(""), Err(PathError::EmptyPath));
    /// assert_eq!(StaticPath::parse("a..b"), Err(PathError::EmptySegment { position: 1 }));
    /// ```
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Self::from_segments(path.split(DELIMITER))
    }

    /// Build a path from individual keys. Keys may contain the delimiter.
    pub fn from_segments<I, S>(segments: I) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.is_empty() {
            return Err(PathError::EmptyPath);
        }
        if let Some(position) = segments.iter().position(String::is_empty) {
            return Err(PathError::EmptySegment { position });
        }
        Ok(Self { segments })
    }

    /// Extend the path by one key.
    pub fn child(&self, key: impl Into<String>) -> Result<Self, PathError> {
        let key = key.into();
        if key.is_empty() {
            return Err(PathError::EmptySegment {
                position: self.segments.len(),
            });
        }
        let mut segments = self.segments.clone();
        segments.push(key);
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[doc(hidden)]
    pub fn __from_idents(idents: &[&'static str]) -> Self {
        Self {
            segments: idents.iter().map(|ident| (*ident).to_owned()).collect(),
        }
    }
}

impl KeyPath for StaticPath {
    fn segments(&self) -> Option<Vec<&str>> {
        Some(self.segments.iter().map(String::as_str).collect())
    }
}

impl fmt::Display for StaticPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{DELIMITER}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for StaticPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for StaticPath {
    type Error = PathError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::parse(path)
    }
}

/// Check that a string path is well formed without building a [`StaticPath`].
pub fn is_valid_path(path: &str) -> bool {
    split_path(path).is_some()
}
