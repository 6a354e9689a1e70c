use serde::Deserialize;

/// One record from the streaming index's search endpoint. The endpoint
/// returns a bare JSON array of these.
#[derive(Debug, Clone, Deserialize)]
pub struct GogoSearchItem {
    #[serde(rename = "animeId")]
    pub anime_id: Option<String>,
    #[serde(rename = "animeTitle")]
    pub anime_title: Option<String>,
    #[serde(rename = "animeImg")]
    pub anime_img: Option<String>,
    pub status: Option<String>,
}
