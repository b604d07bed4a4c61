//! Mediadesk Shared - wire types between the engine and the browser client
//!
//! This crate contains the JSON shapes the asset routes accept and return:
//! - Request bodies (camelCase, as the browser sends them)
//! - Query strings (snake_case, as the media service names them)
//! - Error and aggregated response bodies
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain crate
//! 2. **No business logic** - Validation happens in the engine's use cases
//! 3. **Lenient decoding** - Optional fields so missing input becomes a 400

pub mod requests;
pub mod responses;

pub use requests::{
    BulkDeleteRequest, DeleteAssetRequest, DetailsQuery, FolderRequest, FoldersQuery,
    GenerateArchiveRequest, ListAssetsQuery, RenameAssetRequest, SearchAssetsQuery,
    TagAssetsRequest, TagsInput, TagsQuery, TransformAssetRequest,
};
pub use responses::{ArchiveResponse, BulkDeleteResponse, DeliveryUrlResponse, ErrorResponse};
