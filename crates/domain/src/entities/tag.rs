//! Tag records returned by the media service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// All tags in use for one resource kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagListing {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Public ids touched by a tag update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagUpdate {
    #[serde(default)]
    pub public_ids: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
