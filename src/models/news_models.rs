use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::news)]
pub struct NewsItem {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::news)]
pub struct NewNews {
    pub title: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct NewsForm {
    pub title: String,
    pub content: String,
}
