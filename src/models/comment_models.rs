use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::about_comments)]
pub struct AboutComment {
    pub id: i32,
    pub username: String,
    pub text: String,
    pub date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::about_comments)]
pub struct NewAboutComment {
    pub username: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct CommentForm {
    pub text: String,
}
