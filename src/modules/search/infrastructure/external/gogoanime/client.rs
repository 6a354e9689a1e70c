use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::modules::search::domain::{StreamEntry, StreamSearchRepository};
use crate::modules::search::infrastructure::cache::{cache_key, ResponseCache};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::http::HttpHandler;
use crate::shared::utils::RateLimiter;

use super::{dto::GogoSearchItem, mapper::GogoAnimeMapper};

/// REST client for the Gogoanime-consumer streaming index.
pub struct GogoAnimeClient {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    cache: ResponseCache<StreamEntry>,
}

impl GogoAnimeClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = HttpHandler::create_http_client(30, "Nagare-Anime-App/1.0")?;

        Ok(Self {
            client,
            base_url: config.gogoanime_base_url.clone(),
            rate_limiter: RateLimiter::new(2.0),
            cache: ResponseCache::with_defaults(),
        })
    }
}

#[async_trait]
impl StreamSearchRepository for GogoAnimeClient {
    async fn search_by_title(&self, query: String) -> AppResult<Vec<StreamEntry>> {
        let key = cache_key("gogoanime", &query);
        if let Some(cached) = self.cache.get(&key) {
            debug!("GogoAnime search cache hit for '{}'", query);
            return Ok(cached);
        }

        self.rate_limiter.wait().await;

        let url = format!(
            "{}/search?keyw={}",
            self.base_url,
            urlencoding::encode(query.trim())
        );
        let response = HttpHandler::execute_with_retry(
            || self.client.get(&url).send(),
            "GogoAnime",
            "search media",
        )
        .await?;

        let items = response.json::<Vec<GogoSearchItem>>().await.map_err(|e| {
            AppError::ApiError(format!("Failed to parse GogoAnime response: {}", e))
        })?;

        let results: Vec<StreamEntry> = items.into_iter().map(GogoAnimeMapper::to_domain).collect();

        info!(
            "GogoAnime search '{}' returned {} results",
            query,
            results.len()
        );
        self.cache.insert(key, results.clone());
        Ok(results)
    }
}
