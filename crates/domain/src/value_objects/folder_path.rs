//! Folder path in the media service's folder tree

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A folder path with edge slashes removed. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FolderPath(String);

impl FolderPath {
    /// Normalize a path; never fails, an empty input yields the root.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self(path.trim().trim_matches('/').to_string())
    }

    /// Normalize a path that must name a real folder.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the path is the root.
    pub fn required(path: impl Into<String>) -> Result<Self, DomainError> {
        let folder = Self::new(path);
        if folder.is_root() {
            return Err(DomainError::validation("Folder path cannot be empty"));
        }
        Ok(folder)
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FolderPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for FolderPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<FolderPath> for String {
    fn from(path: FolderPath) -> String {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_edge_slashes() {
        assert_eq!(FolderPath::new("/photos/2024/").as_str(), "photos/2024");
        assert_eq!(FolderPath::new("  photos ").as_str(), "photos");
    }

    #[test]
    fn empty_is_root() {
        assert!(FolderPath::new("").is_root());
        assert!(FolderPath::new("///").is_root());
        assert!(!FolderPath::new("a").is_root());
    }

    #[test]
    fn required_rejects_root() {
        assert!(FolderPath::required(" / ").is_err());
        assert_eq!(FolderPath::required("x/y").unwrap().as_str(), "x/y");
    }
}
