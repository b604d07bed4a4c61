//! Single and bulk asset deletion.

use futures_util::future::join_all;
use std::sync::Arc;

use mediadesk_domain::{DestroyOutcome, PublicId, ResourceKind};

use super::AssetError;
use crate::infrastructure::ports::MediaServicePort;

pub struct DeleteAsset {
    media: Arc<dyn MediaServicePort>,
}

impl DeleteAsset {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    /// A `not found` outcome is returned as-is, not as an error.
    pub async fn execute(
        &self,
        public_id: PublicId,
        resource_type: ResourceKind,
    ) -> Result<DestroyOutcome, AssetError> {
        let resource_type = resource_type.require_concrete()?;
        let outcome = self.media.destroy(public_id.clone(), resource_type).await?;

        if outcome.is_ok() {
            tracing::info!(public_id = %public_id, "Asset destroyed");
        } else {
            tracing::info!(public_id = %public_id, result = %outcome.result, "Nothing to destroy");
        }
        Ok(outcome)
    }
}

/// Destroys every id concurrently and waits for all of them.
pub struct BulkDeleteAssets {
    media: Arc<dyn MediaServicePort>,
}

impl BulkDeleteAssets {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    /// Outcomes in input order. Any failed destroy fails the batch, but only
    /// after every destroy has finished.
    pub async fn execute(
        &self,
        public_ids: Vec<PublicId>,
        resource_type: ResourceKind,
    ) -> Result<Vec<DestroyOutcome>, AssetError> {
        let resource_type = resource_type.require_concrete()?;
        let count = public_ids.len();

        let results = join_all(
            public_ids
                .into_iter()
                .map(|id| self.media.destroy(id, resource_type)),
        )
        .await;

        let mut outcomes = Vec::with_capacity(count);
        let mut first_error = None;
        for result in results {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::warn!(error = %e, "Destroy failed during bulk delete");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e.into());
        }

        tracing::info!(count, "Bulk delete completed");
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MediaError, MockMediaServicePort};
    use crate::use_cases::assets::test_support::destroyed;
    use mediadesk_domain::parse_public_ids;
    use mockall::predicate::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn delete_forwards_id_and_kind() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_destroy()
            .with(eq(PublicId::new("samples/cat").unwrap()), eq(ResourceKind::Video))
            .times(1)
            .returning(|_, _| Ok(destroyed("ok")));

        let use_case = DeleteAsset::new(Arc::new(media));
        let outcome = use_case
            .execute(PublicId::new("samples/cat").unwrap(), ResourceKind::Video)
            .await
            .unwrap();

        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn delete_passes_not_found_through() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_destroy()
            .returning(|_, _| Ok(destroyed("not found")));

        let use_case = DeleteAsset::new(Arc::new(media));
        let outcome = use_case
            .execute(PublicId::new("missing").unwrap(), ResourceKind::Image)
            .await
            .unwrap();

        assert!(!outcome.is_ok());
    }

    #[tokio::test]
    async fn delete_rejects_auto_kind() {
        let media = MockMediaServicePort::new();
        let use_case = DeleteAsset::new(Arc::new(media));

        let err = use_case
            .execute(PublicId::new("x").unwrap(), ResourceKind::Auto)
            .await
            .unwrap_err();

        assert!(matches!(err, AssetError::Invalid(_)));
    }

    #[tokio::test]
    async fn bulk_delete_issues_one_destroy_per_id_in_order() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_destroy()
            .times(3)
            .returning(|id, _| {
                let result = if id.as_str() == "b" { "not found" } else { "ok" };
                Ok(destroyed(result))
            });

        let use_case = BulkDeleteAssets::new(Arc::new(media));
        let ids = parse_public_ids(["a", "b", "c"]).unwrap();
        let outcomes = use_case.execute(ids, ResourceKind::Image).await.unwrap();

        let results: Vec<&str> = outcomes.iter().map(|o| o.result.as_str()).collect();
        assert_eq!(results, vec!["ok", "not found", "ok"]);
    }

    #[tokio::test]
    async fn bulk_delete_attempts_all_before_failing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut media = MockMediaServicePort::new();
        media.expect_destroy().times(4).returning(move |id, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            if id.as_str() == "b" {
                Err(MediaError::rejected(420, "Rate Limited"))
            } else {
                Ok(destroyed("ok"))
            }
        });

        let use_case = BulkDeleteAssets::new(Arc::new(media));
        let ids = parse_public_ids(["a", "b", "c", "d"]).unwrap();
        let err = use_case.execute(ids, ResourceKind::Image).await.unwrap_err();

        assert_eq!(calls.load(Ordering::SeqCst), 4);
        match err {
            AssetError::Upstream(e) => assert_eq!(e.external_message(), Some("Rate Limited")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
