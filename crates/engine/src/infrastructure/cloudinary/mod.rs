//! Cloudinary adapter for the media service port.

mod client;
mod signing;

pub use client::{CloudinaryClient, DEFAULT_API_BASE};
pub use signing::{sign, ParamValue, Params, SignatureAlgorithm, Signer};
