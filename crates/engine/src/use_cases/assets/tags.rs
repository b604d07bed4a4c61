//! Tag updates and tag listing.

use std::sync::Arc;

use mediadesk_domain::{DomainError, PublicId, ResourceKind, TagCommand, TagList, TagListing, TagUpdate};

use super::AssetError;
use crate::infrastructure::ports::{ListTagsRequest, MediaServicePort, TagUpdateRequest};

#[derive(Debug, Clone)]
pub struct TagAssetsInput {
    pub public_ids: Vec<PublicId>,
    pub tags: TagList,
    pub command: TagCommand,
    pub resource_type: ResourceKind,
}

pub struct TagAssets {
    media: Arc<dyn MediaServicePort>,
}

impl TagAssets {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, input: TagAssetsInput) -> Result<TagUpdate, AssetError> {
        if input.public_ids.is_empty() {
            return Err(DomainError::validation("Public IDs and tags required").into());
        }
        if input.command.needs_tags() && input.tags.is_empty() {
            return Err(DomainError::validation("Public IDs and tags required").into());
        }
        let resource_type = input.resource_type.require_concrete()?;

        tracing::info!(
            command = %input.command,
            assets = input.public_ids.len(),
            tags = %input.tags.joined(),
            "Updating tags"
        );

        Ok(self
            .media
            .update_tags(TagUpdateRequest {
                public_ids: input.public_ids,
                tags: input.tags,
                command: input.command,
                resource_type,
            })
            .await?)
    }
}

pub struct ListTags {
    media: Arc<dyn MediaServicePort>,
}

impl ListTags {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(
        &self,
        resource_type: ResourceKind,
        max_results: u32,
        next_cursor: Option<String>,
    ) -> Result<TagListing, AssetError> {
        let resource_type = resource_type.require_concrete()?;
        Ok(self
            .media
            .list_tags(ListTagsRequest {
                resource_type,
                max_results,
                next_cursor: next_cursor.filter(|c| !c.is_empty()),
            })
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockMediaServicePort;
    use mediadesk_domain::parse_public_ids;

    fn input(command: TagCommand, tags: &str) -> TagAssetsInput {
        TagAssetsInput {
            public_ids: parse_public_ids(["a", "b"]).unwrap(),
            tags: TagList::from_csv(tags),
            command,
            resource_type: ResourceKind::Image,
        }
    }

    #[tokio::test]
    async fn forwards_command_and_tags() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_update_tags()
            .withf(|req| {
                req.command == TagCommand::Replace
                    && req.tags.joined() == "summer,beach"
                    && req.public_ids.len() == 2
            })
            .times(1)
            .returning(|_| {
                Ok(TagUpdate {
                    public_ids: vec!["a".to_string(), "b".to_string()],
                    ..Default::default()
                })
            });

        let use_case = TagAssets::new(Arc::new(media));
        let update = use_case
            .execute(input(TagCommand::Replace, "summer, beach"))
            .await
            .unwrap();

        assert_eq!(update.public_ids.len(), 2);
    }

    #[tokio::test]
    async fn remove_all_needs_no_tags() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_update_tags()
            .withf(|req| req.command == TagCommand::RemoveAll && req.tags.is_empty())
            .returning(|_| Ok(TagUpdate::default()));

        let use_case = TagAssets::new(Arc::new(media));
        assert!(use_case.execute(input(TagCommand::RemoveAll, "")).await.is_ok());
    }

    #[tokio::test]
    async fn missing_tags_are_invalid_for_add() {
        let media = MockMediaServicePort::new();
        let use_case = TagAssets::new(Arc::new(media));

        let err = use_case.execute(input(TagCommand::Add, " , ")).await.unwrap_err();
        assert!(matches!(err, AssetError::Invalid(_)));
    }

    #[tokio::test]
    async fn list_tags_forwards_kind() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_list_tags()
            .withf(|req| req.resource_type == ResourceKind::Video && req.max_results == 30)
            .returning(|_| {
                Ok(TagListing {
                    tags: vec!["intro".to_string()],
                    ..Default::default()
                })
            });

        let use_case = ListTags::new(Arc::new(media));
        let listing = use_case
            .execute(ResourceKind::Video, 30, None)
            .await
            .unwrap();

        assert_eq!(listing.tags, vec!["intro"]);
    }
}
