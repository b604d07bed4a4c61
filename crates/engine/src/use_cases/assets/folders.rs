//! Folder browsing and management.

use std::sync::Arc;

use mediadesk_domain::{FolderCreated, FolderDeleted, FolderListing, FolderPath};

use super::AssetError;
use crate::infrastructure::ports::MediaServicePort;

/// Root folders, or the direct children of `path`.
pub struct ListFolders {
    media: Arc<dyn MediaServicePort>,
}

impl ListFolders {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, path: FolderPath) -> Result<FolderListing, AssetError> {
        let listing = self.media.folders(path.clone()).await?;
        tracing::debug!(path = %path, count = listing.folders.len(), "Listed folders");
        Ok(listing)
    }
}

pub struct CreateFolder {
    media: Arc<dyn MediaServicePort>,
}

impl CreateFolder {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    /// `path` must not be the root.
    pub async fn execute(&self, path: FolderPath) -> Result<FolderCreated, AssetError> {
        let path = FolderPath::required(path.as_str())?;
        let created = self.media.create_folder(path).await?;
        tracing::info!(path = %created.path, "Folder created");
        Ok(created)
    }
}

/// The service only deletes empty folders.
pub struct DeleteFolder {
    media: Arc<dyn MediaServicePort>,
}

impl DeleteFolder {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, path: FolderPath) -> Result<FolderDeleted, AssetError> {
        let path = FolderPath::required(path.as_str())?;
        let deleted = self.media.delete_folder(path).await?;
        tracing::info!(deleted = ?deleted.deleted, "Folder deleted");
        Ok(deleted)
    }
}
