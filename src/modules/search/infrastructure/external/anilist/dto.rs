use serde::{Deserialize, Serialize};
use serde_json::Value;

/// AniList GraphQL response wrapper
#[derive(Debug, Clone, Deserialize)]
pub struct AniListResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<AniListError>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListError {
    pub message: String,
    pub status: Option<i32>,
}

/// AniList GraphQL request
#[derive(Debug, Clone, Serialize)]
pub struct AniListRequest {
    pub query: String,
    pub variables: Option<Value>,
}

/// Search query response
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    #[serde(rename = "Page")]
    pub page: AniListPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListPage {
    pub media: Vec<AniListMedia>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListMedia {
    pub id: i32,
    pub title: AniListTitle,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<AniListCoverImage>,
    #[serde(rename = "startDate")]
    pub start_date: Option<AniListDate>,
    pub genres: Option<Vec<String>>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListTitle {
    pub romaji: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListCoverImage {
    pub medium: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AniListDate {
    pub year: Option<i32>,
}
