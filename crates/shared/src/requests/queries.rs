use serde::{Deserialize, Serialize};

/// Query of `GET /list`. `max_results` stays a string so a non-numeric value
/// is reported by the handler.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAssetsQuery {
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub max_results: Option<String>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Query of `GET /search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchAssetsQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub max_results: Option<String>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Query of `GET /details`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetailsQuery {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// Query of `GET /folders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoldersQuery {
    #[serde(default)]
    pub path: Option<String>,
}

/// Query of `GET /tags`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagsQuery {
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub max_results: Option<String>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}
