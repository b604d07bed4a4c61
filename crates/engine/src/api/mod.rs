//! API layer - HTTP entry points.

pub mod assets;
pub mod auth;
pub mod http;

pub use auth::{Auth, AuthenticatedUser};
