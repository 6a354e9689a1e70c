pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::SearchService;
pub use application::view::{CatalogCard, SearchResultsView, StreamCard};
pub use domain::{
    CatalogEntry, CatalogSearchRepository, MediaTitle, SearchPageState, StreamEntry,
    StreamSearchRepository,
};
