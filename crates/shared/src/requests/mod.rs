//! Request bodies and query strings accepted by the asset routes.
//!
//! Every field is optional on the wire so a missing value reaches the handler
//! and is reported as a 400 with a specific message instead of a generic
//! deserialization failure.

mod archive;
mod assets;
mod folders;
mod queries;
mod tags;

pub use archive::GenerateArchiveRequest;
pub use assets::{BulkDeleteRequest, DeleteAssetRequest, RenameAssetRequest, TransformAssetRequest};
pub use folders::FolderRequest;
pub use queries::{DetailsQuery, FoldersQuery, ListAssetsQuery, SearchAssetsQuery, TagsQuery};
pub use tags::{TagAssetsRequest, TagsInput};
