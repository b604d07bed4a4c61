use serde::{Deserialize, Serialize};

use super::TagsInput;

/// Body of `POST /generateArchive`. Exactly one of `public_ids` and `tags`
/// selects the assets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateArchiveRequest {
    #[serde(default)]
    pub public_ids: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<TagsInput>,
    #[serde(default)]
    pub resource_type: Option<String>,
    /// Archive format, `zip` when absent.
    #[serde(default, rename = "type")]
    pub format: Option<String>,
}
