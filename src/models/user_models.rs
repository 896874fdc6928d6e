use diesel::prelude::{Insertable, Queryable};
use diesel::Selectable;
use serde::Deserialize;

#[derive(Queryable, Selectable)]
#[diesel(table_name = crate::schema::users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Logged-in user, attached to the request by the session middleware.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub is_admin: bool,
}

impl From<User> for CurrentUser {
    fn from(u: User) -> Self {
        CurrentUser {
            id: u.id,
            username: u.username,
            is_admin: u.is_admin,
        }
    }
}

/// Shared payload of the register and login forms.
#[derive(Deserialize)]
pub struct CredentialsForm {
    pub username: String,
    pub password: String,
}
