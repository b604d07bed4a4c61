//! Delivery URL construction.
//!
//! Delivery URLs are public and unsigned: they name the cloud, the resource
//! kind, the transformation and the public id. No request is made to build
//! one.

use url::Url;

use crate::error::DomainError;
use crate::value_objects::{PublicId, ResourceKind, Transformation};

/// Host that serves delivered assets.
pub const DELIVERY_BASE_URL: &str = "https://res.cloudinary.com";

/// Components every optimized URL carries unless the caller overrides them.
pub const OPTIMIZED_DEFAULTS: &[(&str, &str)] = &[("q", "auto"), ("f", "auto")];

/// Build `https://res.cloudinary.com/{cloud}/{kind}/upload/{transformation}/{public_id}`.
///
/// Automatic quality and format are merged underneath the caller's
/// transformation.
///
/// # Errors
///
/// Returns `DomainError::Validation` for an empty cloud name or the `auto`
/// resource kind.
pub fn optimized_url(
    cloud_name: &str,
    kind: ResourceKind,
    public_id: &PublicId,
    transformation: Transformation,
) -> Result<String, DomainError> {
    let transformation = transformation.with_defaults(OPTIMIZED_DEFAULTS);
    delivery_url(DELIVERY_BASE_URL, cloud_name, kind, public_id, &transformation)
}

/// Build a delivery URL against an arbitrary base, without defaults.
pub fn delivery_url(
    base: &str,
    cloud_name: &str,
    kind: ResourceKind,
    public_id: &PublicId,
    transformation: &Transformation,
) -> Result<String, DomainError> {
    let cloud_name = cloud_name.trim();
    if cloud_name.is_empty() {
        return Err(DomainError::validation("Cloud name is not configured"));
    }
    let kind = kind.require_concrete()?;

    let mut url = Url::parse(base)
        .map_err(|e| DomainError::validation(format!("Invalid delivery base URL: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| DomainError::validation("Delivery base URL cannot have a path"))?;
        segments.pop_if_empty();
        segments.push(cloud_name).push(kind.as_str()).push("upload");
        if !transformation.is_empty() {
            segments.push(&transformation.to_string());
        }
        segments.extend(public_id.as_str().split('/'));
    }
    Ok(url.into())
}
