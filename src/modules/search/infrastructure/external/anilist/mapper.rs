use crate::modules::search::domain::{CatalogEntry, MediaTitle};

use super::dto::AniListMedia;

pub struct AniListMapper;

impl AniListMapper {
    pub fn to_domain(media: AniListMedia) -> CatalogEntry {
        CatalogEntry {
            id: media.id,
            title: MediaTitle {
                romaji: media.title.romaji,
                native: media.title.native,
            },
            cover_image: media.cover_image.and_then(|image| image.medium),
            start_year: media.start_date.and_then(|date| date.year),
            genres: media.genres.unwrap_or_default(),
            format: media.format,
        }
    }
}
