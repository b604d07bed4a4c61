//! External media service port.
//!
//! One method per call the asset routes make. Records come back as the
//! domain's read-through types; usage statistics stay opaque JSON.

use async_trait::async_trait;
use mediadesk_domain::{
    ArchiveFormat, Asset, AssetPage, DestroyOutcome, FolderCreated, FolderDeleted, FolderListing,
    FolderPath, PublicId, ResourceKind, TagCommand, TagList, TagListing, TagUpdate,
    Transformation,
};

use super::error::MediaError;

// =============================================================================
// Request Types
// =============================================================================

/// A file to store.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub folder: FolderPath,
    pub public_id: Option<PublicId>,
    pub tags: TagList,
    pub resource_type: ResourceKind,
}

/// One page of assets, either under a folder prefix or carrying a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRequest {
    pub resource_type: ResourceKind,
    pub prefix: FolderPath,
    pub tag: Option<String>,
    pub max_results: u32,
    pub next_cursor: Option<String>,
}

/// A search-expression query.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub expression: String,
    pub max_results: u32,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenameRequest {
    pub from: PublicId,
    pub to: PublicId,
    pub overwrite: bool,
    pub resource_type: ResourceKind,
}

/// Eagerly derive a transformed version of a stored asset.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplicitRequest {
    pub public_id: PublicId,
    pub resource_type: ResourceKind,
    pub eager: Transformation,
    pub eager_async: bool,
    pub notification_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagUpdateRequest {
    pub public_ids: Vec<PublicId>,
    pub tags: TagList,
    pub command: TagCommand,
    pub resource_type: ResourceKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListTagsRequest {
    pub resource_type: ResourceKind,
    pub max_results: u32,
    pub next_cursor: Option<String>,
}

/// Which assets go into an archive.
#[derive(Debug, Clone, PartialEq)]
pub enum ArchiveSelection {
    PublicIds(Vec<PublicId>),
    Tags(TagList),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveRequest {
    pub selection: ArchiveSelection,
    pub resource_type: ResourceKind,
    pub format: ArchiveFormat,
}

// =============================================================================
// Media Service Port
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaServicePort: Send + Sync {
    async fn upload(&self, request: UploadRequest) -> Result<Asset, MediaError>;
    async fn destroy(
        &self,
        public_id: PublicId,
        resource_type: ResourceKind,
    ) -> Result<DestroyOutcome, MediaError>;
    async fn list(&self, request: ListRequest) -> Result<AssetPage, MediaError>;
    async fn details(
        &self,
        public_id: PublicId,
        resource_type: ResourceKind,
    ) -> Result<Asset, MediaError>;
    async fn search(&self, request: SearchRequest) -> Result<AssetPage, MediaError>;
    async fn rename(&self, request: RenameRequest) -> Result<Asset, MediaError>;
    async fn explicit(&self, request: ExplicitRequest) -> Result<Asset, MediaError>;
    async fn update_tags(&self, request: TagUpdateRequest) -> Result<TagUpdate, MediaError>;
    async fn list_tags(&self, request: ListTagsRequest) -> Result<TagListing, MediaError>;
    /// Root folders when `parent` is the root, otherwise its direct children.
    async fn folders(&self, parent: FolderPath) -> Result<FolderListing, MediaError>;
    async fn create_folder(&self, path: FolderPath) -> Result<FolderCreated, MediaError>;
    async fn delete_folder(&self, path: FolderPath) -> Result<FolderDeleted, MediaError>;
    async fn usage(&self) -> Result<serde_json::Value, MediaError>;
    /// Signed download link for an archive; computed locally, no request.
    fn archive_url(&self, request: ArchiveRequest) -> Result<String, MediaError>;
}
