//! Response bodies the service builds itself.
//!
//! Most routes forward a media-service record from `mediadesk_domain`
//! unchanged; the types here cover errors and the few aggregated answers.

use serde::{Deserialize, Serialize};

use mediadesk_domain::DestroyOutcome;

/// Body of every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Destroy results of a bulk delete, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub results: Vec<DestroyOutcome>,
}

/// Signed archive download link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveResponse {
    pub download_url: String,
}

/// Optimized delivery URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryUrlResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_response_is_camel_case() {
        let body = serde_json::to_string(&ArchiveResponse {
            download_url: "https://x".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"downloadUrl":"https://x"}"#);
    }

    #[test]
    fn error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("No file provided")).unwrap();
        assert_eq!(body["error"], "No file provided");
    }
}
