use async_trait::async_trait;

use crate::{modules::search::domain::entities::StreamEntry, shared::errors::AppResult};

/// Contract for the streaming index (source B).
#[async_trait]
pub trait StreamSearchRepository: Send + Sync {
    /// Search the index by title.
    async fn search_by_title(&self, query: String) -> AppResult<Vec<StreamEntry>>;
}
