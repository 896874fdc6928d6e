use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::tracks)]
pub struct Track {
    pub id: i32,
    pub album_id: i32,
    pub title: String,
    pub spotify_id: String,
    pub youtube_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tracks)]
pub struct NewTrack {
    pub album_id: i32,
    pub title: String,
    pub spotify_id: String,
    pub youtube_id: String,
}

/// Admins paste full share URLs; the ids are extracted on submit.
#[derive(Deserialize)]
pub struct TrackForm {
    pub title: String,
    #[serde(default)]
    pub spotify_url: String,
    #[serde(default)]
    pub youtube_url: String,
}
