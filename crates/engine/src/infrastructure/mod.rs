//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod cloudinary;
pub mod config;
pub mod ports;
pub mod sessions;
