use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct Review {
    pub id: i32,
    pub username: String,
    pub text: String,
    pub date: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub username: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct ReviewForm {
    pub text: String,
}
