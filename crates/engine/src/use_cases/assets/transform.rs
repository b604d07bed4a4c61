//! Eager transformation of a stored asset.

use std::sync::Arc;

use mediadesk_domain::{Asset, DomainError, PublicId, ResourceKind, Transformation};

use super::AssetError;
use crate::infrastructure::ports::{ExplicitRequest, MediaServicePort};

/// Asks the service to derive a transformed version asynchronously. The
/// returned record describes the original; the derived version is reported
/// to the notification URL when one is configured.
pub struct TransformAsset {
    media: Arc<dyn MediaServicePort>,
    notification_url: Option<String>,
}

impl TransformAsset {
    pub fn new(media: Arc<dyn MediaServicePort>, notification_url: Option<String>) -> Self {
        Self {
            media,
            notification_url,
        }
    }

    pub async fn execute(
        &self,
        public_id: PublicId,
        transformation: Transformation,
        resource_type: ResourceKind,
    ) -> Result<Asset, AssetError> {
        if transformation.is_empty() {
            return Err(DomainError::validation("Public ID and transformations required").into());
        }
        let resource_type = resource_type.require_concrete()?;

        tracing::info!(
            public_id = %public_id,
            transformation = %transformation,
            "Requesting eager transformation"
        );

        Ok(self
            .media
            .explicit(ExplicitRequest {
                public_id,
                resource_type,
                eager: transformation,
                eager_async: true,
                notification_url: self.notification_url.clone(),
            })
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockMediaServicePort;
    use crate::use_cases::assets::test_support::asset;

    fn resize() -> Transformation {
        Transformation::from_pairs([("width", "300"), ("crop", "fill")]).unwrap()
    }

    #[tokio::test]
    async fn requests_async_eager_with_notification_url() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_explicit()
            .withf(|req| {
                req.public_id.as_str() == "cat"
                    && req.eager.to_string() == "c_fill,w_300"
                    && req.eager_async
                    && req.notification_url.as_deref() == Some("https://hooks.example.com")
            })
            .times(1)
            .returning(|_| Ok(asset("cat")));

        let use_case = TransformAsset::new(
            Arc::new(media),
            Some("https://hooks.example.com".to_string()),
        );
        let result = use_case
            .execute(PublicId::new("cat").unwrap(), resize(), ResourceKind::Image)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn empty_transformation_is_invalid() {
        let media = MockMediaServicePort::new();
        let use_case = TransformAsset::new(Arc::new(media), None);

        let err = use_case
            .execute(
                PublicId::new("cat").unwrap(),
                Transformation::new(),
                ResourceKind::Image,
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AssetError::Invalid(_)));
    }
}
