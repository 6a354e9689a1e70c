use async_trait::async_trait;

use crate::{modules::search::domain::entities::CatalogEntry, shared::errors::AppResult};

/// Contract for the metadata catalog (source A).
#[async_trait]
pub trait CatalogSearchRepository: Send + Sync {
    /// Search the catalog by title.
    async fn search_by_title(&self, query: String) -> AppResult<Vec<CatalogEntry>>;
}
