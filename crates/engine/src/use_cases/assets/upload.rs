//! Upload a file to the media service.

use std::sync::Arc;

use mediadesk_domain::{Asset, FolderPath, PublicId, ResourceKind, TagList};

use super::AssetError;
use crate::infrastructure::ports::{MediaServicePort, UploadRequest};

/// A file received from the client.
#[derive(Debug, Clone)]
pub struct UploadInput {
    pub file: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
    /// Root means "use the configured default folder".
    pub folder: FolderPath,
    pub public_id: Option<PublicId>,
    pub tags: TagList,
}

pub struct UploadAsset {
    media: Arc<dyn MediaServicePort>,
    default_folder: FolderPath,
}

impl UploadAsset {
    pub fn new(media: Arc<dyn MediaServicePort>, default_folder: FolderPath) -> Self {
        Self {
            media,
            default_folder,
        }
    }

    /// Store the file. The service detects the resource kind.
    pub async fn execute(&self, input: UploadInput) -> Result<Asset, AssetError> {
        let folder = if input.folder.is_root() {
            self.default_folder.clone()
        } else {
            input.folder
        };

        tracing::debug!(
            file_name = %input.file_name,
            bytes = input.file.len(),
            folder = %folder,
            "Uploading asset"
        );

        let asset = self
            .media
            .upload(UploadRequest {
                file: input.file,
                file_name: input.file_name,
                content_type: input.content_type,
                folder,
                public_id: input.public_id,
                tags: input.tags,
                resource_type: ResourceKind::Auto,
            })
            .await?;

        tracing::info!(
            public_id = %asset.public_id,
            size = %asset.human_size(),
            "Asset uploaded"
        );
        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MediaError, MockMediaServicePort};
    use crate::use_cases::assets::test_support::asset;

    fn input(folder: &str) -> UploadInput {
        UploadInput {
            file: vec![0xFF, 0xD8, 0xFF],
            file_name: "cat.jpg".to_string(),
            content_type: Some("image/jpeg".to_string()),
            folder: FolderPath::new(folder),
            public_id: None,
            tags: TagList::from_csv("pets, cute"),
        }
    }

    #[tokio::test]
    async fn uses_default_folder_and_auto_kind() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_upload()
            .withf(|req| {
                req.folder.as_str() == "uploads"
                    && req.resource_type == ResourceKind::Auto
                    && req.tags.joined() == "pets,cute"
                    && req.file_name == "cat.jpg"
                    && req.file.len() == 3
            })
            .times(1)
            .returning(|_| Ok(asset("uploads/cat")));

        let use_case = UploadAsset::new(Arc::new(media), FolderPath::new("uploads"));
        let uploaded = use_case.execute(input("")).await.unwrap();

        assert_eq!(uploaded.public_id, "uploads/cat");
    }

    #[tokio::test]
    async fn explicit_folder_is_forwarded() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_upload()
            .withf(|req| req.folder.as_str() == "campaigns/2024")
            .returning(|_| Ok(asset("campaigns/2024/cat")));

        let use_case = UploadAsset::new(Arc::new(media), FolderPath::new("uploads"));
        assert!(use_case.execute(input("/campaigns/2024/")).await.is_ok());
    }

    #[tokio::test]
    async fn service_failure_is_upstream_error() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_upload()
            .returning(|_| Err(MediaError::rejected(400, "Invalid image file")));

        let use_case = UploadAsset::new(Arc::new(media), FolderPath::new("uploads"));
        let err = use_case.execute(input("")).await.unwrap_err();

        assert!(matches!(err, AssetError::Upstream(MediaError::Rejected { .. })));
    }
}
