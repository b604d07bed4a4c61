//! Value objects - Immutable objects defined by their attributes

mod folder_path;
mod kinds;
mod public_id;
mod tags;
mod transformation;

pub use folder_path::FolderPath;
pub use kinds::{ArchiveFormat, ResourceKind, TagCommand};
pub use public_id::{parse_public_ids, PublicId};
pub use tags::TagList;
pub use transformation::Transformation;
