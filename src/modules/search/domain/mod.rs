pub mod entities;
pub mod repositories;
pub mod state;

// Re-exports for easy access
pub use entities::{CatalogEntry, MediaTitle, StreamEntry};
pub use repositories::{CatalogSearchRepository, StreamSearchRepository};
pub use state::SearchPageState;
