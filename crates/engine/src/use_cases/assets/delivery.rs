//! Optimized delivery URLs, built locally.

use mediadesk_domain::delivery::optimized_url;
use mediadesk_domain::{PublicId, ResourceKind, Transformation};

use super::AssetError;

pub struct OptimizedUrl {
    cloud_name: String,
}

impl OptimizedUrl {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self {
            cloud_name: cloud_name.into(),
        }
    }

    pub fn execute(
        &self,
        public_id: &PublicId,
        resource_type: ResourceKind,
        transformation: Transformation,
    ) -> Result<String, AssetError> {
        Ok(optimized_url(
            &self.cloud_name,
            resource_type,
            public_id,
            transformation,
        )?)
    }
}
