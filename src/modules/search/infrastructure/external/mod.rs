pub mod anilist;
pub mod gogoanime;
