use serde::{Deserialize, Serialize};

use mediadesk_domain::TagList;

/// Tags arrive either as a comma separated string or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    Csv(String),
    List(Vec<String>),
}

impl TagsInput {
    pub fn to_tag_list(&self) -> TagList {
        match self {
            Self::Csv(raw) => TagList::from_csv(raw),
            Self::List(tags) => tags.iter().collect(),
        }
    }
}

/// Body of `POST /tag`, `POST /tags` and `DELETE /tags`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagAssetsRequest {
    #[serde(default)]
    pub public_ids: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<TagsInput>,
    #[serde(default)]
    pub command: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}
