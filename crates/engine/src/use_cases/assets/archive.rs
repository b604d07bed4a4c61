//! Signed archive download links.

use std::sync::Arc;

use mediadesk_domain::{ArchiveFormat, DomainError, PublicId, ResourceKind, TagList};

use super::AssetError;
use crate::infrastructure::ports::{ArchiveRequest, ArchiveSelection, MediaServicePort};

#[derive(Debug, Clone, Default)]
pub struct ArchiveInput {
    pub public_ids: Option<Vec<PublicId>>,
    pub tags: Option<TagList>,
    pub resource_type: ResourceKind,
    pub format: ArchiveFormat,
}

pub struct GenerateArchive {
    media: Arc<dyn MediaServicePort>,
}

impl GenerateArchive {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    /// Exactly one of ids or tags selects the contents; empty lists count as absent.
    pub fn execute(&self, input: ArchiveInput) -> Result<String, AssetError> {
        let ids = input.public_ids.filter(|ids| !ids.is_empty());
        let tags = input.tags.filter(|tags| !tags.is_empty());

        let selection = match (ids, tags) {
            (Some(ids), None) => ArchiveSelection::PublicIds(ids),
            (None, Some(tags)) => ArchiveSelection::Tags(tags),
            _ => {
                return Err(DomainError::validation(
                    "Provide either publicIds or tags, not both or neither",
                )
                .into())
            }
        };
        let resource_type = input.resource_type.require_concrete()?;

        let url = self.media.archive_url(ArchiveRequest {
            selection,
            resource_type,
            format: input.format,
        })?;

        tracing::info!(format = %input.format, "Generated archive link");
        Ok(url)
    }
}
