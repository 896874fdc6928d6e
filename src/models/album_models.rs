use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::albums)]
pub struct Album {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub description: String,
    pub image_url: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::albums)]
pub struct NewAlbum {
    pub title: String,
    pub release_year: i32,
    pub description: String,
    pub image_url: String,
}

/// Field names match the admin form on the discography page.
#[derive(Deserialize)]
pub struct AlbumForm {
    pub title: String,
    pub year: i32,
    pub desc: String,
    pub url: String,
}
