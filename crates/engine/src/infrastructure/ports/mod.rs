//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - The external media service (could swap Cloudinary -> any compatible API)
//! - Clock (signing timestamps, for testing)

mod error;
mod external;
mod testing;

pub use error::MediaError;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ArchiveRequest, ArchiveSelection, ExplicitRequest, ListRequest, ListTagsRequest,
    MediaServicePort, RenameRequest, SearchRequest, TagUpdateRequest, UploadRequest,
};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockMediaServicePort;

#[cfg(test)]
pub use testing::MockClockPort;
