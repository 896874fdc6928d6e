use chrono::NaiveDate;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::concerts)]
pub struct Concert {
    pub id: i32,
    pub city: String,
    pub venue: String,
    pub concert_date: NaiveDate,
    pub ticket_url: String,
    pub is_sold_out: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::concerts)]
pub struct NewConcert {
    pub city: String,
    pub venue: String,
    pub concert_date: NaiveDate,
    pub ticket_url: String,
    pub is_sold_out: bool,
}

/// `date` arrives as YYYY-MM-DD from the form's date input.
#[derive(Deserialize)]
pub struct ConcertForm {
    pub city: String,
    pub venue: String,
    pub date: String,
    pub url: String,
}
