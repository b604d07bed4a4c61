//! Small enumerations the media service understands as plain strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

// ============================================================================
// ResourceKind
// ============================================================================

/// Kind of media stored under a public id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    #[default]
    Image,
    Video,
    Raw,
    /// Let the service detect the kind. Only meaningful for uploads.
    Auto,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Raw => "raw",
            Self::Auto => "auto",
        }
    }

    /// Parse an optional query/body value, falling back to `image`.
    pub fn parse_or_default(value: Option<&str>) -> Result<Self, DomainError> {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => v.parse(),
            None => Ok(Self::default()),
        }
    }

    /// Kinds that address stored assets; `auto` is upload-only.
    pub fn require_concrete(self) -> Result<Self, DomainError> {
        if self == Self::Auto {
            return Err(DomainError::validation(
                "Resource type 'auto' is only valid for uploads",
            ));
        }
        Ok(self)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "raw" => Ok(Self::Raw),
            "auto" => Ok(Self::Auto),
            other => Err(DomainError::parse(format!("Unknown resource type: {other}"))),
        }
    }
}

// ============================================================================
// TagCommand
// ============================================================================

/// What a tag update does to the listed assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCommand {
    #[default]
    Add,
    Remove,
    Replace,
    RemoveAll,
}

impl TagCommand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Replace => "replace",
            Self::RemoveAll => "remove_all",
        }
    }

    /// `remove_all` is the only command that does not take a tag list.
    pub fn needs_tags(&self) -> bool {
        !matches!(self, Self::RemoveAll)
    }
}

impl fmt::Display for TagCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagCommand {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "remove" => Ok(Self::Remove),
            "replace" => Ok(Self::Replace),
            "remove_all" => Ok(Self::RemoveAll),
            other => Err(DomainError::parse(format!("Unknown tag command: {other}"))),
        }
    }
}

// ============================================================================
// ArchiveFormat
// ============================================================================

/// Container format of a generated archive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    #[default]
    Zip,
    Tgz,
}

impl ArchiveFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tgz => "tgz",
        }
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArchiveFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zip" => Ok(Self::Zip),
            "tgz" => Ok(Self::Tgz),
            other => Err(DomainError::parse(format!("Unsupported archive format: {other}"))),
        }
    }
}
