//! Asset entity - read-through projection of a media-service record
//!
//! The service owns every asset; these types only mirror its JSON. Fields we
//! do not model are kept in `extra` so a record forwarded to the client is
//! byte-for-byte as informative as the one we received.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::ResourceKind;

/// Timestamps of the latest metadata changes.
///
/// Kept as the service's strings; it mixes `Z` and `+00:00` offsets and the
/// client sees them unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastUpdated {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// `tags_updated_at`, `public_id_updated_at`, `metadata_updated_at`, ...
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A media object stored by the external service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    pub public_id: String,
    #[serde(default)]
    pub version: u64,
    pub resource_type: ResourceKind,
    /// Delivery type, `upload` for everything this service creates.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub delivery_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_folder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<LastUpdated>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Asset {
    /// Size for log lines, e.g. `1.5 MB`.
    pub fn human_size(&self) -> String {
        format_file_size(self.bytes)
    }
}

/// One page of a listing or search.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetPage {
    #[serde(default)]
    pub resources: Vec<Asset>,
    /// Opaque cursor for the next page; absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AssetPage {
    pub fn is_last(&self) -> bool {
        self.next_cursor.is_none()
    }
}

/// Result of destroying one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestroyOutcome {
    /// `"ok"` or `"not found"`
    pub result: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DestroyOutcome {
    pub fn is_ok(&self) -> bool {
        self.result == "ok"
    }
}

/// Human readable byte count using 1024 steps and two decimals at most.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let rounded = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "asset_id": "3515c6000a548515f1134043f9785c2f",
            "public_id": "samples/cat",
            "version": 1719309138,
            "resource_type": "image",
            "type": "upload",
            "url": "http://res.cloudinary.com/demo/image/upload/v1719309138/samples/cat.jpg",
            "secure_url": "https://res.cloudinary.com/demo/image/upload/v1719309138/samples/cat.jpg",
            "display_name": "cat",
            "format": "jpg",
            "bytes": 120253,
            "asset_folder": "samples",
            "width": 864,
            "height": 576,
            "tags": ["pets"],
            "created_at": "2024-06-25T09:52:18Z",
            "last_updated": { "updated_at": "2024-06-26T10:00:00Z" },
            "etag": "abc123",
            "placeholder": false
        })
    }

    #[test]
    fn deserializes_service_record_and_keeps_extras() {
        let asset: Asset = serde_json::from_value(sample()).unwrap();
        assert_eq!(asset.public_id, "samples/cat");
        assert_eq!(asset.delivery_type.as_deref(), Some("upload"));
        assert_eq!(asset.resource_type, ResourceKind::Image);
        assert_eq!(asset.tags.as_deref(), Some(&["pets".to_string()][..]));
        assert_eq!(asset.extra.get("etag"), Some(&json!("abc123")));

        let back = serde_json::to_value(&asset).unwrap();
        assert_eq!(back["etag"], json!("abc123"));
        assert_eq!(back["type"], json!("upload"));
        assert_eq!(back["placeholder"], json!(false));
    }

    #[test]
    fn raw_assets_without_dimensions_parse() {
        let asset: Asset = serde_json::from_value(json!({
            "public_id": "docs/readme.txt",
            "resource_type": "raw",
            "bytes": 42
        }))
        .unwrap();
        assert_eq!(asset.width, None);
        assert_eq!(asset.tags, None);
        assert_eq!(asset.resource_type, ResourceKind::Raw);
    }

    #[test]
    fn last_updated_round_trips_unchanged() {
        let mut record = sample();
        record["last_updated"] = json!({
            "updated_at": "2024-06-25T09:52:18+00:00",
            "tags_updated_at": "2024-06-25T09:52:18+00:00",
            "public_id_updated_at": "2024-06-26T11:00:00Z",
            "metadata_updated_at": "2024-06-27T12:30:00+00:00"
        });

        let asset: Asset = serde_json::from_value(record.clone()).unwrap();
        let last = asset.last_updated.as_ref().unwrap();
        assert_eq!(last.updated_at.as_deref(), Some("2024-06-25T09:52:18+00:00"));

        let back = serde_json::to_value(&asset).unwrap();
        assert_eq!(back["last_updated"], record["last_updated"]);
    }

    #[test]
    fn page_cursor() {
        let page: AssetPage = serde_json::from_value(json!({
            "resources": [sample()],
            "next_cursor": "abc",
            "rate_limit_allowed": 500
        }))
        .unwrap();
        assert_eq!(page.resources.len(), 1);
        assert!(!page.is_last());
        assert!(page.extra.contains_key("rate_limit_allowed"));
    }

    #[test]
    fn destroy_outcome() {
        let ok: DestroyOutcome = serde_json::from_value(json!({"result": "ok"})).unwrap();
        let missing: DestroyOutcome =
            serde_json::from_value(json!({"result": "not found"})).unwrap();
        assert!(ok.is_ok());
        assert!(!missing.is_ok());
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5 MB");
    }
}
