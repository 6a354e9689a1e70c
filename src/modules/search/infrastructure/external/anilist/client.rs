use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::modules::search::domain::{CatalogEntry, CatalogSearchRepository};
use crate::modules::search::infrastructure::cache::{cache_key, ResponseCache};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::http::HttpHandler;
use crate::shared::utils::RateLimiter;

use super::{
    dto::{AniListRequest, AniListResponse, PageResponse},
    graphql::AniListQueries,
    mapper::AniListMapper,
};

const SEARCH_PAGE_SIZE: usize = 25;

/// GraphQL client for the AniList metadata catalog.
pub struct AniListClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    cache: ResponseCache<CatalogEntry>,
}

impl AniListClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(30, "Nagare-Anime-App/1.0")?;

        Ok(Self {
            client,
            base_url: config.anilist_base_url.clone(),
            // AniList current rate limit: 30 requests per minute = 0.5 per second
            rate_limiter: RateLimiter::new(0.5),
            cache: ResponseCache::with_defaults(),
        })
    }

    /// Execute a GraphQL query with retry logic
    async fn execute_query(&self, query: &str, variables: Value) -> AppResult<Value> {
        let request = AniListRequest {
            query: query.to_string(),
            variables: Some(variables),
        };

        let response = HttpHandler::execute_with_retry(
            || self.client.post(&self.base_url).json(&request).send(),
            "AniList",
            "GraphQL query",
        )
        .await?;

        let anilist_response: AniListResponse<Value> = response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse AniList response: {}", e)))?;

        // Handle GraphQL errors
        if let Some(errors) = anilist_response.errors {
            let error_messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(AppError::ApiError(format!(
                "AniList GraphQL errors: {}",
                error_messages.join(", ")
            )));
        }

        anilist_response
            .data
            .ok_or_else(|| AppError::ApiError("AniList response contained no data".to_string()))
    }
}

#[async_trait]
impl CatalogSearchRepository for AniListClient {
    async fn search_by_title(&self, query: String) -> AppResult<Vec<CatalogEntry>> {
        let key = cache_key("anilist", &query);
        if let Some(cached) = self.cache.get(&key) {
            debug!("AniList search cache hit for '{}'", query);
            return Ok(cached);
        }

        self.rate_limiter.wait().await;

        let variables = AniListQueries::search_variables(&query, SEARCH_PAGE_SIZE);
        let data = self
            .execute_query(AniListQueries::search_anime(), variables)
            .await?;

        let page_response: PageResponse = serde_json::from_value(data).map_err(|e| {
            AppError::ApiError(format!("Failed to parse AniList search response: {}", e))
        })?;

        let results: Vec<CatalogEntry> = page_response
            .page
            .media
            .into_iter()
            .map(AniListMapper::to_domain)
            .collect();

        info!("AniList search '{}' returned {} results", query, results.len());
        self.cache.insert(key, results.clone());
        Ok(results)
    }
}
