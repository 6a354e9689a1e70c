use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Initial per-account record written to the document store once, right
/// after account creation succeeds. Owned by the store from then on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileSeed {
    pub bookmarks: Vec<Value>,
    pub keep_watching: Vec<Value>,
    pub comments: Map<String, Value>,
    pub episodes_watched_by_source: Map<String, Value>,
    pub video_source: String,
    pub video_quality: String,
    pub video_subtitle_language: String,
}

impl Default for UserProfileSeed {
    fn default() -> Self {
        Self {
            bookmarks: Vec::new(),
            keep_watching: Vec::new(),
            comments: Map::new(),
            episodes_watched_by_source: Map::new(),
            video_source: "crunchyroll".to_string(),
            video_quality: "auto".to_string(),
            video_subtitle_language: "English".to_string(),
        }
    }
}
