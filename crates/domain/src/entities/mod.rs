//! Domain entities - records owned by the external media service

mod asset;
mod folder;
mod tag;

pub use asset::{format_file_size, Asset, AssetPage, DestroyOutcome, LastUpdated};
pub use folder::{Folder, FolderCreated, FolderDeleted, FolderListing};
pub use tag::{TagListing, TagUpdate};
