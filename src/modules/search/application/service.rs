use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::debug;
use tokio::sync::RwLock;

use crate::modules::search::application::view::SearchResultsView;
use crate::modules::search::domain::{
    CatalogSearchRepository, SearchPageState, StreamSearchRepository,
};
use crate::modules::search::infrastructure::external::{
    anilist::AniListClient, gogoanime::GogoAnimeClient,
};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};

/// Aggregates free-text search over the metadata catalog and the streaming
/// index.
///
/// The two lookups run sequentially: the streaming index is not queried
/// until the catalog resolves. Overlapping searches are allowed, but each
/// carries a request token and only the latest-issued request may commit
/// its outcome, so a slow earlier response can never overwrite a newer one.
pub struct SearchService {
    catalog: Arc<dyn CatalogSearchRepository>,
    streams: Arc<dyn StreamSearchRepository>,
    state: RwLock<SearchPageState>,
    request_seq: AtomicU64,
}

impl SearchService {
    pub fn new(
        catalog: Arc<dyn CatalogSearchRepository>,
        streams: Arc<dyn StreamSearchRepository>,
    ) -> Self {
        Self {
            catalog,
            streams,
            state: RwLock::new(SearchPageState::default()),
            request_seq: AtomicU64::new(0),
        }
    }

    /// Wire up the real catalog and streaming-index clients.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let catalog = Arc::new(AniListClient::new(config)?);
        let streams = Arc::new(GogoAnimeClient::new(config)?);
        Ok(Self::new(catalog, streams))
    }

    /// Run a search for `query` and store both result lists.
    ///
    /// An empty query is a no-op; whitespace-only input of non-zero length
    /// still searches. A source failure is recorded on the state and
    /// returned; the streaming index is not queried when the catalog fails.
    pub async fn search(&self, query: &str) -> AppResult<()> {
        if query.is_empty() {
            debug!("ignoring search with empty query");
            return Ok(());
        }

        let token = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().await;
            state.query = query.to_string();
            state.loading = true;
            state.fetched = false;
            state.error = None;
        }

        let catalog_results = match self.catalog.search_by_title(query.to_string()).await {
            Ok(results) => results,
            Err(err) => return self.fail(token, err).await,
        };

        let stream_results = match self.streams.search_by_title(query.to_string()).await {
            Ok(results) => results,
            Err(err) => return self.fail(token, err).await,
        };

        let mut state = self.state.write().await;
        if self.request_seq.load(Ordering::SeqCst) != token {
            debug!("discarding stale search response for '{}'", query);
            return Ok(());
        }

        debug!(
            "search '{}' resolved: {} catalog hits, {} stream hits",
            query,
            catalog_results.len(),
            stream_results.len()
        );

        state.catalog = Some(catalog_results);
        state.streams = Some(stream_results);
        state.fetched = true;
        state.loading = false;
        Ok(())
    }

    /// Hide the results section. Stored lists and the query text remain
    /// until the next search overwrites them.
    pub async fn clear(&self) {
        self.state.write().await.fetched = false;
    }

    pub async fn snapshot(&self) -> SearchPageState {
        self.state.read().await.clone()
    }

    /// Build the results view model, or `None` while nothing is fetched.
    pub async fn render(&self) -> Option<SearchResultsView> {
        SearchResultsView::from_state(&self.snapshot().await)
    }

    async fn fail(&self, token: u64, err: AppError) -> AppResult<()> {
        let mut state = self.state.write().await;
        if self.request_seq.load(Ordering::SeqCst) == token {
            state.loading = false;
            state.error = Some(err.to_string());
        }
        Err(err)
    }
}
