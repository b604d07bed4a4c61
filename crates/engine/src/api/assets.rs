//! Authenticated asset routes under `/api/private/assets`.
//!
//! Handlers check required fields, turn the wire values into domain types
//! and call one use case. Unknown actions and unsupported methods answer
//! 400 `Invalid action`.

use axum::{
    extract::{
        multipart::MultipartRejection, DefaultBodyLimit, FromRequest, FromRequestParts, Multipart,
        State,
    },
    routing::{any, get, post, MethodRouter},
    Json, Router,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

use mediadesk_domain::{
    parse_public_ids, ArchiveFormat, Asset, AssetPage, DestroyOutcome, FolderCreated,
    FolderDeleted, FolderListing, FolderPath, PublicId, ResourceKind, TagCommand, TagList,
    TagListing, TagUpdate, Transformation,
};
use mediadesk_shared::{
    ArchiveResponse, BulkDeleteRequest, BulkDeleteResponse, DeleteAssetRequest,
    DeliveryUrlResponse, DetailsQuery, FolderRequest, FoldersQuery, GenerateArchiveRequest,
    ListAssetsQuery, RenameAssetRequest, SearchAssetsQuery, TagAssetsRequest, TagsQuery,
    TransformAssetRequest,
};

use super::auth::Auth;
use super::http::{failure, ApiError};
use crate::app::App;
use crate::use_cases::assets::{
    parse_max_results, ArchiveInput, ListAssetsInput, SearchAssetsInput, TagAssetsInput,
    UploadInput,
};

/// JSON body whose rejection renders as an `{"error": ..}` 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

/// Query string whose rejection renders as an `{"error": ..}` 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

pub fn routes(max_upload_bytes: usize) -> Router<Arc<App>> {
    Router::new()
        .route(
            "/upload",
            action(post(upload)).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/delete", action(post(delete_asset).delete(delete_asset)))
        .route("/bulkDelete", action(post(bulk_delete)))
        .route("/list", action(get(list_assets)))
        .route("/details", action(get(asset_details)))
        .route("/search", action(get(search_assets)))
        .route("/rename", action(post(rename_asset)))
        .route("/transform", action(post(transform_asset)))
        .route("/tag", action(post(add_tags)))
        .route(
            "/tags",
            action(get(list_tags).post(add_tags).delete(remove_tags)),
        )
        .route("/generateArchive", action(post(generate_archive)))
        .route(
            "/folders",
            action(get(list_folders).post(create_folder).delete(delete_folder)),
        )
        .route("/createFolder", action(post(create_folder)))
        .route("/usage", action(get(usage)))
        .route("/url", action(get(optimized_url)))
        .route("/{*action}", any(invalid_action))
}

/// Unsupported methods on a known path are invalid actions too.
fn action(router: MethodRouter<Arc<App>>) -> MethodRouter<Arc<App>> {
    router.fallback(invalid_action)
}

async fn invalid_action() -> ApiError {
    ApiError::bad_request("Invalid action")
}

/// Trimmed, non-blank value or a 400 with `message`.
fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(message))
}

fn resource_kind(value: Option<&str>) -> Result<ResourceKind, ApiError> {
    Ok(ResourceKind::parse_or_default(value)?)
}

// =============================================================================
// Upload and delete
// =============================================================================

async fn upload(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Asset>, ApiError> {
    let mut multipart = multipart?;
    let mut file = None;
    let mut folder = None;
    let mut public_id = None;
    let mut tags = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    file = Some((bytes.to_vec(), file_name, content_type));
                }
            }
            Some("folder") => folder = Some(field.text().await?),
            Some("publicId") => public_id = Some(field.text().await?),
            Some("tags") => tags = Some(field.text().await?),
            _ => {}
        }
    }

    let (file, file_name, content_type) =
        file.ok_or_else(|| ApiError::bad_request("No file provided"))?;
    let public_id = match public_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => Some(PublicId::new(id)?),
        None => None,
    };

    tracing::info!(user_id = %user.user_id, file_name = %file_name, "Upload requested");

    let asset = app
        .use_cases
        .assets
        .upload
        .execute(UploadInput {
            file,
            file_name,
            content_type,
            folder: FolderPath::new(folder.unwrap_or_default()),
            public_id,
            tags: TagList::from_csv(tags.as_deref().unwrap_or_default()),
        })
        .await
        .map_err(failure("Upload failed"))?;
    Ok(Json(asset))
}

async fn delete_asset(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<DeleteAssetRequest>,
) -> Result<Json<DestroyOutcome>, ApiError> {
    let public_id = PublicId::new(required(body.public_id.as_deref(), "No public ID provided")?)?;
    let kind = resource_kind(body.resource_type.as_deref())?;

    tracing::info!(user_id = %user.user_id, public_id = %public_id, "Delete requested");

    let outcome = app
        .use_cases
        .assets
        .delete
        .execute(public_id, kind)
        .await
        .map_err(failure("Delete failed"))?;
    Ok(Json(outcome))
}

async fn bulk_delete(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<BulkDeleteRequest>,
) -> Result<Json<BulkDeleteResponse>, ApiError> {
    let ids = body
        .public_ids
        .filter(|ids| !ids.is_empty())
        .ok_or_else(|| ApiError::bad_request("No public IDs provided"))?;
    let ids = parse_public_ids(ids)?;
    let kind = resource_kind(body.resource_type.as_deref())?;

    tracing::info!(user_id = %user.user_id, count = ids.len(), "Bulk delete requested");

    let results = app
        .use_cases
        .assets
        .bulk_delete
        .execute(ids, kind)
        .await
        .map_err(failure("Bulk delete failed"))?;
    Ok(Json(BulkDeleteResponse { results }))
}

// =============================================================================
// Browse
// =============================================================================

async fn list_assets(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<ListAssetsQuery>,
) -> Result<Json<AssetPage>, ApiError> {
    let input = ListAssetsInput {
        folder: FolderPath::new(query.folder.unwrap_or_default()),
        resource_type: resource_kind(query.resource_type.as_deref())?,
        tag: query.tags,
        max_results: parse_max_results(query.max_results.as_deref())?,
        next_cursor: query.next_cursor,
    };

    let page = app
        .use_cases
        .assets
        .list
        .execute(input)
        .await
        .map_err(failure("List failed"))?;
    Ok(Json(page))
}

async fn asset_details(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<DetailsQuery>,
) -> Result<Json<Asset>, ApiError> {
    let public_id = PublicId::new(required(query.public_id.as_deref(), "No public ID provided")?)?;
    let kind = resource_kind(query.resource_type.as_deref())?;

    let asset = app
        .use_cases
        .assets
        .details
        .execute(public_id, kind)
        .await
        .map_err(failure("Get details failed"))?;
    Ok(Json(asset))
}

async fn search_assets(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<SearchAssetsQuery>,
) -> Result<Json<AssetPage>, ApiError> {
    let input = SearchAssetsInput {
        query: query.query.unwrap_or_default(),
        resource_type: resource_kind(query.resource_type.as_deref())?,
        max_results: parse_max_results(query.max_results.as_deref())?,
        next_cursor: query.next_cursor,
    };

    let page = app
        .use_cases
        .assets
        .search
        .execute(input)
        .await
        .map_err(failure("Failed to search resources"))?;
    Ok(Json(page))
}

// =============================================================================
// Modify
// =============================================================================

async fn rename_asset(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<RenameAssetRequest>,
) -> Result<Json<Asset>, ApiError> {
    const MISSING: &str = "Both current and new public IDs required";
    let from = PublicId::new(required(body.public_id.as_deref(), MISSING)?)?;
    let to = PublicId::new(required(body.new_public_id.as_deref(), MISSING)?)?;
    let kind = resource_kind(body.resource_type.as_deref())?;

    tracing::info!(user_id = %user.user_id, from = %from, to = %to, "Rename requested");

    let asset = app
        .use_cases
        .assets
        .rename
        .execute(from, to, body.overwrite.unwrap_or(false), kind)
        .await
        .map_err(failure("Rename failed"))?;
    Ok(Json(asset))
}

/// An object of parameters, or a component string such as `w_300,c_fill`.
fn parse_transformation(value: &Value) -> Result<Transformation, ApiError> {
    match value {
        Value::Object(map) => Ok(Transformation::from_json(map)?),
        Value::String(raw) => {
            let pairs = raw
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|component| {
                    component.split_once('_').ok_or_else(|| {
                        ApiError::bad_request(format!("Invalid transformation component: {component}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Transformation::from_pairs(pairs)?)
        }
        _ => Err(ApiError::bad_request(
            "Transformations must be an object or a string",
        )),
    }
}

async fn transform_asset(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<TransformAssetRequest>,
) -> Result<Json<Asset>, ApiError> {
    const MISSING: &str = "Public ID and transformations required";
    let public_id = PublicId::new(required(body.public_id.as_deref(), MISSING)?)?;
    let transformation = match body.transformations.as_ref() {
        Some(value) if !value.is_null() => parse_transformation(value)?,
        _ => return Err(ApiError::bad_request(MISSING)),
    };
    let kind = resource_kind(body.resource_type.as_deref())?;

    tracing::info!(user_id = %user.user_id, public_id = %public_id, "Transform requested");

    let asset = app
        .use_cases
        .assets
        .transform
        .execute(public_id, transformation, kind)
        .await
        .map_err(failure("Transform failed"))?;
    Ok(Json(asset))
}

fn tag_input(body: TagAssetsRequest, default: TagCommand) -> Result<TagAssetsInput, ApiError> {
    const MISSING: &str = "Public IDs and tags required";

    let command = match body.command.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(raw) => raw.parse::<TagCommand>()?,
        None => default,
    };
    let ids = body
        .public_ids
        .filter(|ids| !ids.is_empty())
        .ok_or_else(|| ApiError::bad_request(MISSING))?;
    let tags = body.tags.map(|t| t.to_tag_list()).unwrap_or_default();
    if command.needs_tags() && tags.is_empty() {
        return Err(ApiError::bad_request(MISSING));
    }

    Ok(TagAssetsInput {
        public_ids: parse_public_ids(ids)?,
        tags,
        command,
        resource_type: resource_kind(body.resource_type.as_deref())?,
    })
}

async fn add_tags(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<TagAssetsRequest>,
) -> Result<Json<TagUpdate>, ApiError> {
    let input = tag_input(body, TagCommand::Add)?;
    tracing::debug!(user_id = %user.user_id, "Tag update requested");

    let update = app
        .use_cases
        .assets
        .tag
        .execute(input)
        .await
        .map_err(failure("Tag operation failed"))?;
    Ok(Json(update))
}

async fn remove_tags(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<TagAssetsRequest>,
) -> Result<Json<TagUpdate>, ApiError> {
    let input = tag_input(body, TagCommand::Remove)?;
    tracing::debug!(user_id = %user.user_id, "Tag removal requested");

    let update = app
        .use_cases
        .assets
        .tag
        .execute(input)
        .await
        .map_err(failure("Failed to remove tags"))?;
    Ok(Json(update))
}

async fn list_tags(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<TagsQuery>,
) -> Result<Json<TagListing>, ApiError> {
    let kind = resource_kind(query.resource_type.as_deref())?;
    let max_results = parse_max_results(query.max_results.as_deref())?;

    let listing = app
        .use_cases
        .assets
        .list_tags
        .execute(kind, max_results, query.next_cursor)
        .await
        .map_err(failure("Failed to list tags"))?;
    Ok(Json(listing))
}

async fn generate_archive(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<GenerateArchiveRequest>,
) -> Result<Json<ArchiveResponse>, ApiError> {
    // Empty lists count as absent; the use case checks the selection.
    let format = match body.format.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        Some(raw) => raw.parse::<ArchiveFormat>()?,
        None => ArchiveFormat::default(),
    };
    let input = ArchiveInput {
        public_ids: body.public_ids.map(parse_public_ids).transpose()?,
        tags: body.tags.map(|t| t.to_tag_list()),
        resource_type: resource_kind(body.resource_type.as_deref())?,
        format,
    };

    tracing::info!(user_id = %user.user_id, format = %format, "Archive requested");

    let download_url = app
        .use_cases
        .assets
        .archive
        .execute(input)
        .map_err(failure("Generate archive failed"))?;
    Ok(Json(ArchiveResponse { download_url }))
}

// =============================================================================
// Folders and account
// =============================================================================

async fn list_folders(
    State(app): State<Arc<App>>,
    QueryParams(query): QueryParams<FoldersQuery>,
) -> Result<Json<FolderListing>, ApiError> {
    let listing = app
        .use_cases
        .assets
        .folders
        .execute(FolderPath::new(query.path.unwrap_or_default()))
        .await
        .map_err(failure("Get folders failed"))?;
    Ok(Json(listing))
}

async fn create_folder(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<FolderRequest>,
) -> Result<Json<FolderCreated>, ApiError> {
    let path = FolderPath::required(required(body.requested_path(), "No folder path provided")?)?;
    tracing::info!(user_id = %user.user_id, path = %path, "Create folder requested");

    let created = app
        .use_cases
        .assets
        .create_folder
        .execute(path)
        .await
        .map_err(failure("Create folder failed"))?;
    Ok(Json(created))
}

async fn delete_folder(
    State(app): State<Arc<App>>,
    Auth(user): Auth,
    JsonBody(body): JsonBody<FolderRequest>,
) -> Result<Json<FolderDeleted>, ApiError> {
    let path = FolderPath::required(required(body.requested_path(), "No folder path provided")?)?;
    tracing::info!(user_id = %user.user_id, path = %path, "Delete folder requested");

    let deleted = app
        .use_cases
        .assets
        .delete_folder
        .execute(path)
        .await
        .map_err(failure("Failed to delete folder"))?;
    Ok(Json(deleted))
}

async fn usage(State(app): State<Arc<App>>) -> Result<Json<Value>, ApiError> {
    let report = app
        .use_cases
        .assets
        .usage
        .execute()
        .await
        .map_err(failure("Get usage failed"))?;
    Ok(Json(report))
}

/// `public_id` and `resource_type` select the asset; every other query
/// parameter is a transformation parameter.
async fn optimized_url(
    State(app): State<Arc<App>>,
    QueryParams(mut query): QueryParams<BTreeMap<String, String>>,
) -> Result<Json<DeliveryUrlResponse>, ApiError> {
    let public_id = query
        .remove("public_id")
        .ok_or_else(|| ApiError::bad_request("No public ID provided"))?;
    let public_id = PublicId::new(required(Some(public_id.as_str()), "No public ID provided")?)?;
    let kind = resource_kind(query.remove("resource_type").as_deref())?;
    let transformation = Transformation::from_pairs(query)?;

    let url = app
        .use_cases
        .assets
        .optimized_url
        .execute(&public_id, kind, transformation)
        .map_err(failure("Failed to build URL"))?;
    Ok(Json(DeliveryUrlResponse { url }))
}
