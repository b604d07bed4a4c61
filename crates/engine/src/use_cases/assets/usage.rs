//! Account usage statistics.

use std::sync::Arc;

use super::AssetError;
use crate::infrastructure::ports::MediaServicePort;

/// Forwards the service's usage report unchanged.
pub struct GetUsage {
    media: Arc<dyn MediaServicePort>,
}

impl GetUsage {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self) -> Result<serde_json::Value, AssetError> {
        Ok(self.media.usage().await?)
    }
}
