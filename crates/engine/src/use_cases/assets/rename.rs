//! Rename an asset's public id.

use std::sync::Arc;

use mediadesk_domain::{Asset, PublicId, ResourceKind};

use super::AssetError;
use crate::infrastructure::ports::{MediaServicePort, RenameRequest};

pub struct RenameAsset {
    media: Arc<dyn MediaServicePort>,
}

impl RenameAsset {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(
        &self,
        from: PublicId,
        to: PublicId,
        overwrite: bool,
        resource_type: ResourceKind,
    ) -> Result<Asset, AssetError> {
        let resource_type = resource_type.require_concrete()?;
        tracing::info!(from = %from, to = %to, overwrite, "Renaming asset");

        Ok(self
            .media
            .rename(RenameRequest {
                from,
                to,
                overwrite,
                resource_type,
            })
            .await?)
    }
}
