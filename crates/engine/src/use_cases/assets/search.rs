//! Free-text asset search.

use std::sync::Arc;

use mediadesk_domain::{AssetPage, ResourceKind};

use super::AssetError;
use crate::infrastructure::ports::{MediaServicePort, SearchRequest};

#[derive(Debug, Clone, Default)]
pub struct SearchAssetsInput {
    pub query: String,
    pub resource_type: ResourceKind,
    pub max_results: u32,
    pub next_cursor: Option<String>,
}

/// `resource_type:{kind}`, narrowed by public id or tag when `query` is set.
pub fn search_expression(resource_type: ResourceKind, query: &str) -> String {
    let query = query.trim();
    let mut expression = format!("resource_type:{resource_type}");
    if !query.is_empty() {
        expression.push_str(&format!(" AND (public_id:*{query}* OR tags:{query})"));
    }
    expression
}

pub struct SearchAssets {
    media: Arc<dyn MediaServicePort>,
}

impl SearchAssets {
    pub fn new(media: Arc<dyn MediaServicePort>) -> Self {
        Self { media }
    }

    pub async fn execute(&self, input: SearchAssetsInput) -> Result<AssetPage, AssetError> {
        let resource_type = input.resource_type.require_concrete()?;
        let expression = search_expression(resource_type, &input.query);
        tracing::debug!(expression = %expression, "Searching assets");

        Ok(self
            .media
            .search(SearchRequest {
                expression,
                max_results: input.max_results,
                next_cursor: input.next_cursor.filter(|c| !c.is_empty()),
            })
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockMediaServicePort;

    #[test]
    fn expression_without_query_filters_kind_only() {
        assert_eq!(search_expression(ResourceKind::Image, ""), "resource_type:image");
        assert_eq!(search_expression(ResourceKind::Video, "   "), "resource_type:video");
    }

    #[test]
    fn expression_with_query_matches_id_or_tag() {
        assert_eq!(
            search_expression(ResourceKind::Image, "cat"),
            "resource_type:image AND (public_id:*cat* OR tags:cat)"
        );
    }

    #[tokio::test]
    async fn forwards_expression_and_paging() {
        let mut media = MockMediaServicePort::new();
        media
            .expect_search()
            .withf(|req| {
                req.expression == "resource_type:raw AND (public_id:*report* OR tags:report)"
                    && req.max_results == 50
                    && req.next_cursor.as_deref() == Some("xyz")
            })
            .times(1)
            .returning(|_| Ok(AssetPage::default()));

        let use_case = SearchAssets::new(Arc::new(media));
        let result = use_case
            .execute(SearchAssetsInput {
                query: "report".to_string(),
                resource_type: ResourceKind::Raw,
                max_results: 50,
                next_cursor: Some("xyz".to_string()),
            })
            .await;

        assert!(result.is_ok());
    }
}
