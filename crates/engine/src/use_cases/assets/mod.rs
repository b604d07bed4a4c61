//! Asset use cases.
//!
//! Each use case takes validated domain values, applies the documented
//! defaults and forwards one call (or, for bulk delete, N calls) to the media
//! service. Nothing is cached or stored.

use std::sync::Arc;

use mediadesk_domain::DomainError;

use crate::infrastructure::ports::MediaError;

mod archive;
mod delete;
mod delivery;
mod folders;
mod list;
mod rename;
mod search;
mod tags;
mod transform;
mod upload;
mod usage;

pub use archive::{ArchiveInput, GenerateArchive};
pub use delete::{BulkDeleteAssets, DeleteAsset};
pub use delivery::OptimizedUrl;
pub use folders::{CreateFolder, DeleteFolder, ListFolders};
pub use list::{GetAssetDetails, ListAssets, ListAssetsInput};
pub use search::{search_expression, SearchAssets, SearchAssetsInput};
pub use tags::{ListTags, TagAssets, TagAssetsInput};
pub use transform::TransformAsset;
pub use rename::RenameAsset;
pub use upload::{UploadAsset, UploadInput};
pub use usage::GetUsage;

/// Page size when the client does not ask for one.
pub const DEFAULT_MAX_RESULTS: u32 = 30;

/// Largest page the media service returns.
pub const MAX_RESULTS_LIMIT: u32 = 500;

/// Parse a `max_results` query value, clamped to the service limit.
pub fn parse_max_results(raw: Option<&str>) -> Result<u32, DomainError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(DEFAULT_MAX_RESULTS);
    };
    let value: u64 = raw
        .parse()
        .map_err(|_| DomainError::validation(format!("Invalid max_results: {raw}")))?;
    if value == 0 {
        return Err(DomainError::validation("max_results must be at least 1"));
    }
    Ok(value.min(u64::from(MAX_RESULTS_LIMIT)) as u32)
}

/// Use case failure: bad input, or the media service failed.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error(transparent)]
    Upstream(#[from] MediaError),
}

/// Container for asset use cases.
pub struct AssetUseCases {
    pub upload: Arc<UploadAsset>,
    pub delete: Arc<DeleteAsset>,
    pub bulk_delete: Arc<BulkDeleteAssets>,
    pub list: Arc<ListAssets>,
    pub details: Arc<GetAssetDetails>,
    pub search: Arc<SearchAssets>,
    pub rename: Arc<RenameAsset>,
    pub transform: Arc<TransformAsset>,
    pub tag: Arc<TagAssets>,
    pub list_tags: Arc<ListTags>,
    pub archive: Arc<GenerateArchive>,
    pub folders: Arc<ListFolders>,
    pub create_folder: Arc<CreateFolder>,
    pub delete_folder: Arc<DeleteFolder>,
    pub usage: Arc<GetUsage>,
    pub optimized_url: Arc<OptimizedUrl>,
}

#[cfg(test)]
pub(crate) mod test_support {
    use mediadesk_domain::{Asset, DestroyOutcome};
    use serde_json::json;

    pub fn asset(public_id: &str) -> Asset {
        serde_json::from_value(json!({
            "asset_id": format!("id-{public_id}"),
            "public_id": public_id,
            "version": 1,
            "resource_type": "image",
            "type": "upload",
            "bytes": 2048,
        }))
        .unwrap()
    }

    pub fn destroyed(result: &str) -> DestroyOutcome {
        serde_json::from_value(json!({ "result": result })).unwrap()
    }
}
