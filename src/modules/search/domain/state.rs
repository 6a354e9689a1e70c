use super::entities::{CatalogEntry, StreamEntry};

/// State of the search page.
///
/// Result lists are `None` until a search has stored them; `Some(vec![])`
/// means a search completed and the source returned nothing. `clear()` only
/// resets `fetched`; the lists and query text stay in memory until the next
/// search overwrites them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPageState {
    pub query: String,
    pub loading: bool,
    pub fetched: bool,
    pub catalog: Option<Vec<CatalogEntry>>,
    pub streams: Option<Vec<StreamEntry>>,
    pub error: Option<String>,
}
