//! Use cases - request orchestration over the media service port.
//!
//! Handlers decode and validate input, then call exactly one use case.

pub mod assets;

pub use assets::{AssetError, AssetUseCases};
