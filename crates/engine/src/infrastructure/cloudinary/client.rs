//! Cloudinary HTTP client
//!
//! Implements MediaServicePort against the Upload API (signed form posts) and
//! the Admin API (HTTP Basic auth).

use async_trait::async_trait;
use reqwest::{multipart, Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

use mediadesk_domain::{
    Asset, AssetPage, DestroyOutcome, FolderCreated, FolderDeleted, FolderListing, FolderPath,
    PublicId, ResourceKind, TagCommand, TagListing, TagUpdate,
};

use super::signing::{Params, Signer};
use crate::infrastructure::config::CloudinaryConfig;
use crate::infrastructure::ports::{
    ArchiveRequest, ArchiveSelection, ClockPort, ExplicitRequest, ListRequest, ListTagsRequest,
    MediaError, MediaServicePort, RenameRequest, SearchRequest, TagUpdateRequest, UploadRequest,
};

/// Default API host.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

/// Client for the Cloudinary Upload and Admin APIs
#[derive(Clone)]
pub struct CloudinaryClient {
    client: Client,
    api_base: String,
    cloud_name: String,
    signer: Signer,
}

impl CloudinaryClient {
    pub fn new(config: &CloudinaryConfig, clock: Arc<dyn ClockPort>) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            cloud_name: config.cloud_name.clone(),
            signer: Signer::new(
                config.api_key.clone(),
                config.api_secret.clone(),
                config.signature_algorithm,
                clock,
            ),
        }
    }

    /// `{base}/v1_1/{cloud}/{segments...}`; each segment may contain `/`.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, MediaError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|e| MediaError::InvalidRequest(format!("Invalid API base: {e}")))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| MediaError::InvalidRequest("API base cannot be a base".to_string()))?;
            path.pop_if_empty().push("v1_1").push(&self.cloud_name);
            for segment in segments {
                path.extend(segment.split('/').filter(|s| !s.is_empty()));
            }
        }
        Ok(url)
    }

    fn admin(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(self.signer.api_key(), Some(self.signer.api_secret()))
    }

    /// Signed `application/x-www-form-urlencoded` post to the Upload API.
    async fn post_signed<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        params: Params,
    ) -> Result<T, MediaError> {
        let url = self.endpoint(segments)?;
        let signed = self.signer.sign(params);
        let response = self
            .client
            .post(url)
            .form(&signed.pairs())
            .send()
            .await
            .map_err(|e| MediaError::RequestFailed(e.to_string()))?;
        read_json(response).await
    }

    async fn admin_json<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, MediaError> {
        let url = self.endpoint(segments)?;
        let response = self
            .admin(method, url)
            .query(query)
            .send()
            .await
            .map_err(|e| MediaError::RequestFailed(e.to_string()))?;
        read_json(response).await
    }
}

/// Query pairs shared by the paginated Admin API listings.
fn page_query(max_results: u32, next_cursor: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![("max_results", max_results.to_string())];
    if let Some(cursor) = next_cursor.filter(|c| !c.is_empty()) {
        query.push(("next_cursor", cursor.to_string()));
    }
    query
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, MediaError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Unknown error").to_string());
        return Err(MediaError::rejected(status.as_u16(), message));
    }

    response
        .json()
        .await
        .map_err(|e| MediaError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl MediaServicePort for CloudinaryClient {
    async fn upload(&self, request: UploadRequest) -> Result<Asset, MediaError> {
        let url = self.endpoint(&[request.resource_type.as_str(), "upload"])?;

        let params = Params::new()
            .set("folder", request.folder.as_str())
            .set_opt("public_id", request.public_id.as_ref().map(PublicId::as_str))
            .set("tags", request.tags.joined());
        let signed = self.signer.sign(params);

        let mut part = multipart::Part::bytes(request.file).file_name(request.file_name);
        if let Some(content_type) = request.content_type.as_deref() {
            part = part
                .mime_str(content_type)
                .map_err(|e| MediaError::InvalidRequest(e.to_string()))?;
        }
        let mut form = multipart::Form::new();
        for (key, value) in signed.pairs() {
            form = form.text(key, value);
        }
        let form = form.part("file", part);

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::RequestFailed(e.to_string()))?;
        read_json(response).await
    }

    async fn destroy(
        &self,
        public_id: PublicId,
        resource_type: ResourceKind,
    ) -> Result<DestroyOutcome, MediaError> {
        let params = Params::new()
            .set("public_id", public_id.as_str())
            .set("type", "upload");
        self.post_signed(&[resource_type.as_str(), "destroy"], params)
            .await
    }

    async fn list(&self, request: ListRequest) -> Result<AssetPage, MediaError> {
        let mut query = page_query(request.max_results, request.next_cursor.as_deref());
        match request.tag.as_deref() {
            Some(tag) => {
                self.admin_json(
                    Method::GET,
                    &["resources", request.resource_type.as_str(), "tags", tag],
                    &query,
                )
                .await
            }
            None => {
                if !request.prefix.is_root() {
                    query.push(("prefix", request.prefix.to_string()));
                }
                self.admin_json(
                    Method::GET,
                    &["resources", request.resource_type.as_str(), "upload"],
                    &query,
                )
                .await
            }
        }
    }

    async fn details(
        &self,
        public_id: PublicId,
        resource_type: ResourceKind,
    ) -> Result<Asset, MediaError> {
        self.admin_json(
            Method::GET,
            &["resources", resource_type.as_str(), "upload", public_id.as_str()],
            &[],
        )
        .await
    }

    async fn search(&self, request: SearchRequest) -> Result<AssetPage, MediaError> {
        let url = self.endpoint(&["resources", "search"])?;
        let body = SearchBody {
            expression: &request.expression,
            max_results: request.max_results,
            next_cursor: request.next_cursor.as_deref(),
        };
        let response = self
            .admin(Method::POST, url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MediaError::RequestFailed(e.to_string()))?;
        read_json(response).await
    }

    async fn rename(&self, request: RenameRequest) -> Result<Asset, MediaError> {
        let params = Params::new()
            .set("from_public_id", request.from.as_str())
            .set("to_public_id", request.to.as_str())
            .set("overwrite", request.overwrite.to_string());
        self.post_signed(&[request.resource_type.as_str(), "rename"], params)
            .await
    }

    async fn explicit(&self, request: ExplicitRequest) -> Result<Asset, MediaError> {
        let params = Params::new()
            .set("public_id", request.public_id.as_str())
            .set("type", "upload")
            .set("eager", request.eager.to_string())
            .set("eager_async", request.eager_async.to_string())
            .set_opt("eager_notification_url", request.notification_url);
        self.post_signed(&[request.resource_type.as_str(), "explicit"], params)
            .await
    }

    async fn update_tags(&self, request: TagUpdateRequest) -> Result<TagUpdate, MediaError> {
        let mut params = Params::new()
            .set("command", request.command.as_str())
            .set_list(
                "public_ids",
                request.public_ids.iter().map(|id| id.as_str().to_string()),
            );
        if request.command != TagCommand::RemoveAll {
            params = params.set("tag", request.tags.joined());
        }
        self.post_signed(&[request.resource_type.as_str(), "tags"], params)
            .await
    }

    async fn list_tags(&self, request: ListTagsRequest) -> Result<TagListing, MediaError> {
        let query = page_query(request.max_results, request.next_cursor.as_deref());
        self.admin_json(Method::GET, &["tags", request.resource_type.as_str()], &query)
            .await
    }

    async fn folders(&self, parent: FolderPath) -> Result<FolderListing, MediaError> {
        self.admin_json(Method::GET, &["folders", parent.as_str()], &[])
            .await
    }

    async fn create_folder(&self, path: FolderPath) -> Result<FolderCreated, MediaError> {
        self.admin_json(Method::POST, &["folders", path.as_str()], &[])
            .await
    }

    async fn delete_folder(&self, path: FolderPath) -> Result<FolderDeleted, MediaError> {
        self.admin_json(Method::DELETE, &["folders", path.as_str()], &[])
            .await
    }

    async fn usage(&self) -> Result<serde_json::Value, MediaError> {
        self.admin_json(Method::GET, &["usage"], &[]).await
    }

    fn archive_url(&self, request: ArchiveRequest) -> Result<String, MediaError> {
        let mut url = self.endpoint(&[request.resource_type.as_str(), "generate_archive"])?;

        let params = Params::new()
            .set("mode", "download")
            .set("target_format", request.format.as_str())
            .set("type", "upload");
        let params = match request.selection {
            ArchiveSelection::PublicIds(ids) => {
                if ids.is_empty() {
                    return Err(MediaError::InvalidRequest(
                        "Archive needs at least one public id".to_string(),
                    ));
                }
                params.set_list("public_ids", ids.into_iter().map(String::from))
            }
            ArchiveSelection::Tags(tags) => {
                if tags.is_empty() {
                    return Err(MediaError::InvalidRequest(
                        "Archive needs at least one tag".to_string(),
                    ));
                }
                params.set_list("tags", tags.into_vec())
            }
        };
        let signed = self.signer.sign(params);

        url.query_pairs_mut().extend_pairs(signed.pairs());
        Ok(url.into())
    }
}

// =============================================================================
// Cloudinary API types
// =============================================================================

#[derive(Debug, Serialize)]
struct SearchBody<'a> {
    expression: &'a str,
    max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_cursor: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use crate::infrastructure::cloudinary::SignatureAlgorithm;
    use mediadesk_domain::{ArchiveFormat, TagList};
    use std::time::Duration;

    fn client() -> CloudinaryClient {
        let clock = FixedClock(Utc.timestamp_opt(1700000000, 0).unwrap());
        let config = CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            signature_algorithm: SignatureAlgorithm::default(),
            notification_url: None,
            timeout: Duration::from_secs(60),
        };
        CloudinaryClient::new(&config, Arc::new(clock))
    }

    #[test]
    fn endpoint_keeps_folder_slashes_and_encodes_spaces() {
        let url = client()
            .endpoint(&["resources", "image", "upload", "my folder/cat"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.cloudinary.com/v1_1/demo/resources/image/upload/my%20folder/cat"
        );
    }

    #[test]
    fn root_folder_endpoint_has_no_trailing_segment() {
        let url = client().endpoint(&["folders", ""]).unwrap();
        assert_eq!(url.as_str(), "https://api.cloudinary.com/v1_1/demo/folders");
    }

    #[test]
    fn page_query_skips_empty_cursor() {
        assert_eq!(page_query(30, Some("")), vec![("max_results", "30".to_string())]);
        assert_eq!(page_query(5, Some("abc")).len(), 2);
    }

    #[test]
    fn archive_url_is_signed_and_lists_ids() {
        let url = client()
            .archive_url(ArchiveRequest {
                selection: ArchiveSelection::PublicIds(vec![
                    PublicId::new("a").unwrap(),
                    PublicId::new("b").unwrap(),
                ]),
                resource_type: ResourceKind::Image,
                format: ArchiveFormat::Zip,
            })
            .unwrap();
        let parsed = Url::parse(&url).unwrap();
        assert_eq!(parsed.path(), "/v1_1/demo/image/generate_archive");

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let ids: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| k == "public_ids[]")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(pairs.iter().any(|(k, v)| k == "mode" && v == "download"));
        assert!(pairs.iter().any(|(k, v)| k == "timestamp" && v == "1700000000"));
        assert!(pairs.iter().any(|(k, v)| k == "api_key" && v == "key"));
        assert!(pairs.iter().any(|(k, _)| k == "signature"));
    }

    #[test]
    fn archive_url_rejects_empty_selection() {
        let result = client().archive_url(ArchiveRequest {
            selection: ArchiveSelection::Tags(TagList::default()),
            resource_type: ResourceKind::Image,
            format: ArchiveFormat::Zip,
        });
        assert!(matches!(result, Err(MediaError::InvalidRequest(_))));
    }

    #[test]
    fn error_envelope_parses() {
        let envelope: ErrorEnvelope =
            serde_json::from_str(r#"{"error":{"message":"Resource not found - cat"}}"#).unwrap();
        assert_eq!(envelope.error.message, "Resource not found - cat");
    }
}
