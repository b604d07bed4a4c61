use serde::{Deserialize, Serialize};

/// Body of `POST|DELETE /delete`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAssetRequest {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// Body of `POST /bulkDelete`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteRequest {
    #[serde(default)]
    pub public_ids: Option<Vec<String>>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// Body of `POST /rename`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameAssetRequest {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub new_public_id: Option<String>,
    #[serde(default)]
    pub overwrite: Option<bool>,
    #[serde(default)]
    pub resource_type: Option<String>,
}

/// Body of `POST /transform`. `transformations` is an object of parameter
/// names to scalar values, e.g. `{"width": 300, "crop": "fill"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformAssetRequest {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub transformations: Option<serde_json::Value>,
    #[serde(default)]
    pub resource_type: Option<String>,
}
