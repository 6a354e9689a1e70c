use serde::Serialize;

use crate::modules::search::domain::{CatalogEntry, SearchPageState, StreamEntry};

/// Characters kept when a title is shortened for a result card.
const TITLE_DISPLAY_CHARS: usize = 20;

/// Genre tags shown per catalog card.
const MAX_GENRE_TAGS: usize = 3;

/// Streaming-index cards shown regardless of how many hits came back.
const MAX_STREAM_CARDS: usize = 5;

/// Label displayed on every streaming-index card.
const STREAM_SOURCE_LABEL: &str = "GogoAnime";

/// View model for the results section.
///
/// `None` sections mean the source returned nothing and the section is not
/// rendered at all; one source being empty never hides the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultsView {
    pub heading_query: String,
    pub catalog: Option<Vec<CatalogCard>>,
    pub streams: Option<Vec<StreamCard>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogCard {
    pub detail_route: String,
    pub cover_url: Option<String>,
    pub title: Option<String>,
    pub native_title: Option<String>,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StreamCard {
    pub detail_route: Option<String>,
    pub cover_url: Option<String>,
    pub title: Option<String>,
    pub source_label: &'static str,
    pub status: Option<String>,
}

impl SearchResultsView {
    /// Build the results view from the page state. Returns `None` unless a
    /// search has fetched results and they have not been cleared.
    pub fn from_state(state: &SearchPageState) -> Option<Self> {
        if !state.fetched {
            return None;
        }

        let catalog = state
            .catalog
            .as_deref()
            .filter(|entries| !entries.is_empty())
            .map(|entries| entries.iter().map(CatalogCard::from_entry).collect());

        let streams = state
            .streams
            .as_deref()
            .filter(|entries| !entries.is_empty())
            .map(|entries| {
                entries
                    .iter()
                    .take(MAX_STREAM_CARDS)
                    .map(StreamCard::from_entry)
                    .collect()
            });

        Some(Self {
            heading_query: state.query.clone(),
            catalog,
            streams,
        })
    }
}

impl CatalogCard {
    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            detail_route: format!("/anime/{}", entry.id),
            cover_url: entry.cover_image.clone(),
            title: entry.title.romaji.as_deref().map(truncate_title),
            native_title: entry.title.native.as_deref().map(truncate_title),
            year: entry.start_year,
            genres: entry.genres.iter().take(MAX_GENRE_TAGS).cloned().collect(),
            format: entry.format.clone(),
        }
    }
}

impl StreamCard {
    fn from_entry(entry: &StreamEntry) -> Self {
        Self {
            detail_route: entry.id.as_deref().map(|id| format!("/anime/v2/{}", id)),
            cover_url: entry.cover_image.clone(),
            title: entry.title.as_deref().map(truncate_title),
            source_label: STREAM_SOURCE_LABEL,
            status: entry.status.clone(),
        }
    }
}

fn truncate_title(title: &str) -> String {
    title.chars().take(TITLE_DISPLAY_CHARS).collect()
}
