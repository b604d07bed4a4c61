//! Validated public identifier of an asset
//!
//! The media service keys every asset by its public id. Uniqueness is enforced
//! by the service; locally we only make sure the id is well formed before it is
//! put into a URL path or a signed parameter list.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length the media service accepts for a public id
const MAX_PUBLIC_ID_LENGTH: usize = 255;

/// A validated public id (non-empty, <=255 chars, trimmed, no edge slashes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PublicId(String);

impl PublicId {
    /// Create a new validated public id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The id is empty after trimming
    /// - The id exceeds 255 characters after trimming
    /// - The id starts or ends with `/`
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Public ID cannot be empty"));
        }
        if trimmed.len() > MAX_PUBLIC_ID_LENGTH {
            return Err(DomainError::validation(format!(
                "Public ID cannot exceed {} characters",
                MAX_PUBLIC_ID_LENGTH
            )));
        }
        if trimmed.starts_with('/') || trimmed.ends_with('/') {
            return Err(DomainError::validation(
                "Public ID cannot start or end with '/'",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PublicId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PublicId> for String {
    fn from(id: PublicId) -> String {
        id.0
    }
}

/// Validate a batch of ids, failing on the first bad one.
pub fn parse_public_ids<I, S>(ids: I) -> Result<Vec<PublicId>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ids.into_iter().map(PublicId::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let id = PublicId::new("  samples/cat  ").unwrap();
        assert_eq!(id.as_str(), "samples/cat");
    }

    #[test]
    fn rejects_empty() {
        assert!(PublicId::new("").is_err());
        assert!(PublicId::new("   ").is_err());
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(256);
        assert!(PublicId::new(long).is_err());
        assert!(PublicId::new("a".repeat(255)).is_ok());
    }

    #[test]
    fn rejects_edge_slashes() {
        assert!(PublicId::new("/cat").is_err());
        assert!(PublicId::new("cat/").is_err());
    }

    #[test]
    fn deserializes_with_validation() {
        let ok: Result<PublicId, _> = serde_json::from_str("\"cat\"");
        assert!(ok.is_ok());
        let bad: Result<PublicId, _> = serde_json::from_str("\"\"");
        assert!(bad.is_err());
    }

    #[test]
    fn parse_batch_stops_at_first_invalid() {
        assert_eq!(parse_public_ids(["a", "b"]).unwrap().len(), 2);
        assert!(parse_public_ids(["a", " "]).is_err());
    }
}
