use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub content_id: String,
    pub content_type: String,
    pub title: String,
    pub extra_data: Option<String>,
    pub date_added: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::favorites)]
pub struct NewFavorite {
    pub user_id: i32,
    pub content_id: String,
    pub content_type: String,
    pub title: String,
    pub extra_data: Option<String>,
}

#[derive(Deserialize)]
pub struct FavoriteForm {
    pub content_id: String,
    pub content_type: String,
    pub title: String,
    pub extra_data: Option<String>,
}

/// The favorites page shows one section per content type.
pub struct GroupedFavorites {
    pub albums: Vec<Favorite>,
    pub tracks: Vec<Favorite>,
    pub videos: Vec<Favorite>,
}

impl GroupedFavorites {
    /// Splits rows by content type; unknown types are dropped.
    pub fn from_rows(rows: Vec<Favorite>) -> Self {
        let mut grouped = GroupedFavorites {
            albums: Vec::new(),
            tracks: Vec::new(),
            videos: Vec::new(),
        };

        for row in rows {
            match row.content_type.as_str() {
                "album" => grouped.albums.push(row),
                "track" => grouped.tracks.push(row),
                "video" => grouped.videos.push(row),
                _ => {}
            }
        }

        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(content_type: &str, title: &str) -> Favorite {
        Favorite {
            id: 0,
            user_id: 1,
            content_id: "42".to_string(),
            content_type: content_type.to_string(),
            title: title.to_string(),
            extra_data: None,
            date_added: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn groups_rows_by_content_type() {
        let rows = vec![
            favorite("album", "Kyougen"),
            favorite("track", "Usseewa"),
            favorite("video", "Live 2023"),
            favorite("track", "Gira Gira"),
        ];

        let grouped = GroupedFavorites::from_rows(rows);

        assert_eq!(grouped.albums.len(), 1);
        assert_eq!(grouped.tracks.len(), 2);
        assert_eq!(grouped.videos.len(), 1);
        assert_eq!(grouped.tracks[1].title, "Gira Gira");
    }

    #[test]
    fn drops_unknown_content_types() {
        let grouped = GroupedFavorites::from_rows(vec![favorite("playlist", "whatever")]);

        assert!(grouped.albums.is_empty());
        assert!(grouped.tracks.is_empty());
        assert!(grouped.videos.is_empty());
    }
}
