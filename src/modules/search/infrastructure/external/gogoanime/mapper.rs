use crate::modules::search::domain::StreamEntry;

use super::dto::GogoSearchItem;

pub struct GogoAnimeMapper;

impl GogoAnimeMapper {
    pub fn to_domain(item: GogoSearchItem) -> StreamEntry {
        StreamEntry {
            id: item.anime_id,
            title: item.anime_title,
            cover_image: item.anime_img,
            status: item.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_record_fields() {
        let item = GogoSearchItem {
            anime_id: Some("naruto".to_string()),
            anime_title: Some("Naruto".to_string()),
            anime_img: Some("https://img.example/naruto.jpg".to_string()),
            status: Some("Completed".to_string()),
        };

        let entry = GogoAnimeMapper::to_domain(item);
        assert_eq!(entry.id.as_deref(), Some("naruto"));
        assert_eq!(entry.title.as_deref(), Some("Naruto"));
        assert_eq!(entry.cover_image.as_deref(), Some("https://img.example/naruto.jpg"));
        assert_eq!(entry.status.as_deref(), Some("Completed"));
    }
}
