//! Mediadesk domain types.
//!
//! Read-through projections of media-service records, the value objects that
//! validate client input before it reaches the service, and pure URL
//! construction. Nothing in this crate performs I/O.

pub mod delivery;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{
    format_file_size, Asset, AssetPage, DestroyOutcome, Folder, FolderCreated, FolderDeleted,
    FolderListing, LastUpdated, TagListing, TagUpdate,
};
pub use error::DomainError;
pub use value_objects::{
    parse_public_ids, ArchiveFormat, FolderPath, PublicId, ResourceKind, TagCommand, TagList,
    Transformation,
};
