//! Application state and composition.

use std::sync::Arc;

use mediadesk_domain::FolderPath;

use crate::infrastructure::{config::AppConfig, ports::MediaServicePort, sessions::SessionStore};
use crate::use_cases::assets::{
    AssetUseCases, BulkDeleteAssets, CreateFolder, DeleteAsset, DeleteFolder, GenerateArchive,
    GetAssetDetails, GetUsage, ListAssets, ListFolders, ListTags, OptimizedUrl, RenameAsset,
    SearchAssets, TagAssets, TransformAsset, UploadAsset,
};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    pub sessions: SessionStore,
    /// Largest accepted multipart body.
    pub max_upload_bytes: usize,
}

/// Container for all use cases.
pub struct UseCases {
    pub assets: AssetUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(media: Arc<dyn MediaServicePort>, config: &AppConfig) -> Self {
        let assets = AssetUseCases {
            upload: Arc::new(UploadAsset::new(
                media.clone(),
                FolderPath::new(config.uploads.default_folder.as_str()),
            )),
            delete: Arc::new(DeleteAsset::new(media.clone())),
            bulk_delete: Arc::new(BulkDeleteAssets::new(media.clone())),
            list: Arc::new(ListAssets::new(media.clone())),
            details: Arc::new(GetAssetDetails::new(media.clone())),
            search: Arc::new(SearchAssets::new(media.clone())),
            rename: Arc::new(RenameAsset::new(media.clone())),
            transform: Arc::new(TransformAsset::new(
                media.clone(),
                config.cloudinary.notification_url.clone(),
            )),
            tag: Arc::new(TagAssets::new(media.clone())),
            list_tags: Arc::new(ListTags::new(media.clone())),
            archive: Arc::new(GenerateArchive::new(media.clone())),
            folders: Arc::new(ListFolders::new(media.clone())),
            create_folder: Arc::new(CreateFolder::new(media.clone())),
            delete_folder: Arc::new(DeleteFolder::new(media.clone())),
            usage: Arc::new(GetUsage::new(media)),
            optimized_url: Arc::new(OptimizedUrl::new(config.cloudinary.cloud_name.as_str())),
        };

        let sessions = SessionStore::new(&config.sessions);
        if sessions.is_empty() {
            tracing::warn!("SESSION_TOKENS is empty; every private route will answer 401");
        }

        Self {
            use_cases: UseCases { assets },
            sessions,
            max_upload_bytes: config.uploads.max_bytes,
        }
    }
}
