//! Mediadesk Engine library.
//!
//! Server-side code for the Mediadesk asset service: an authenticated HTTP
//! front for a Cloudinary-compatible media service.
//!
//! ## Structure
//!
//! - `use_cases/` - Request orchestration over the media service port
//! - `infrastructure/` - External dependency implementations (ports + adapters), config
//! - `api/` - HTTP entry points, session authentication
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
