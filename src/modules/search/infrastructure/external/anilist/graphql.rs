//! GraphQL query templates for the AniList API.

use serde_json::{json, Value};

/// Anime search query, requesting only the fields the result cards consume.
const ANIME_SEARCH_QUERY: &str = r#"
query ($search: String, $page: Int, $perPage: Int) {
  Page(page: $page, perPage: $perPage) {
    media(search: $search, type: ANIME, sort: SEARCH_MATCH) {
      id
      title {
        romaji
        native
      }
      coverImage {
        medium
      }
      startDate {
        year
      }
      genres
      format
    }
  }
}
"#;

pub struct AniListQueries;

impl AniListQueries {
    pub fn search_anime() -> &'static str {
        ANIME_SEARCH_QUERY
    }

    pub fn search_variables(query: &str, per_page: usize) -> Value {
        json!({
            "search": query,
            "page": 1,
            "perPage": per_page,
        })
    }
}
