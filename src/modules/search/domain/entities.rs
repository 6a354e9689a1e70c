use serde::{Deserialize, Serialize};

/// Title variants carried by the metadata catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub native: Option<String>,
}

/// One search hit from the metadata catalog (source A).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: i32,
    pub title: MediaTitle,
    pub cover_image: Option<String>,
    pub start_year: Option<i32>,
    pub genres: Vec<String>,
    pub format: Option<String>,
}

/// One search hit from the streaming index (source B). Every field is
/// optional; the index makes no guarantees about its records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    pub id: Option<String>,
    pub title: Option<String>,
    pub cover_image: Option<String>,
    pub status: Option<String>,
}
