use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;

#[derive(Queryable, Selectable, Clone, Debug)]
#[diesel(table_name = crate::schema::sessions)]
pub struct Session {
    pub id: String,
    pub user_id: i32,
    pub token: String,
    pub created_at: Option<NaiveDateTime>,
    pub expires_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession {
    pub id: String,
    pub user_id: i32,
    pub token: String,
    pub created_at: Option<NaiveDateTime>,
    pub expires_at: Option<NaiveDateTime>,
}
