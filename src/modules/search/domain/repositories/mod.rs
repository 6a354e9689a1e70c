mod catalog_search_repo;
mod stream_search_repo;

pub use catalog_search_repo::*;
pub use stream_search_repo::*;
