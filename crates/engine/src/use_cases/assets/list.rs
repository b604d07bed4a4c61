//! Paged listing and single-asset details.

use std::sync::Arc;

use mediadesk_domain::{Asset, AssetPage, FolderPath, PublicId, ResourceKind};

use super::AssetError;
use crate::infrastructure::ports::{ListRequest, MediaServicePort};

#[derive(Debug, Clone, Default)]
pub struct ListAssetsInput {
    pub folder: FolderPath,
    pub resource_type: ResourceKind,
    /// Lists assets carrying this tag instead of a folder prefix.
    pub tag: Option<String>,
    pub max_results: u32,
    pub next_cursor: Option<String>,
}

pub struct ListAssets {
    media: Arc<dyn MediaServicePort>,
}

impl ListAssets {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, input: ListAssetsInput) -> Result<AssetPage, AssetError> {
        let resource_type = input.resource_type.require_concrete()?;
        let tag = input
            .tag
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let next_cursor = input.next_cursor.filter(|c| !c.is_empty());
        if let Some(tag) = tag.as_deref().filter(|_| !input.folder.is_root()) {
            tracing::warn!(tag = %tag, folder = %input.folder, "Tag listing ignores the folder filter");
        }

        let page = self
            .media
            .list(ListRequest {
                resource_type,
                prefix: input.folder,
                tag,
                max_results: input.max_results,
                next_cursor,
            })
            .await?;

        tracing::debug!(
            count = page.resources.len(),
            last_page = page.is_last(),
            "Listed assets"
        );
        Ok(page)
    }
}

pub struct GetAssetDetails {
    media: Arc<dyn MediaServicePort>,
}

impl GetAssetDetails {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(
        &self,
        public_id: PublicId,
        resource_type: ResourceKind,
    ) -> Result<Asset, AssetError> {
        let resource_type = resource_type.require_concrete()?;
        Ok(self.media.details(public_id, resource_type).await?)
    }
}
