use actix_web::http::header::REFERER;
use actix_web::web::ReqData;
use actix_web::{web, HttpRequest, Responder, ResponseError};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::favorite_models::{Favorite, FavoriteForm, GroupedFavorites, NewFavorite};
use crate::models::user_models::CurrentUser;
use crate::pages::favorite_pages;
use crate::schema::favorites;
use crate::utils::flash_utils::take_flash;
use crate::utils::response_utils::{html_page, redirect_with_flash};

pub async fn favorites_page(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    user: ReqData<CurrentUser>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let result = favorites::table
        .filter(favorites::user_id.eq(user.id))
        .order(favorites::date_added.desc())
        .select(Favorite::as_select())
        .load::<Favorite>(&mut conn);

    match result {
        Ok(rows) => {
            let grouped = GroupedFavorites::from_rows(rows);
            let flash = take_flash(&req);
            html_page(
                favorite_pages::favorites_page(&grouped, Some(&*user), flash.as_deref()),
                flash.is_some(),
            )
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn add_favorite(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    form: web::Form<FavoriteForm>,
    user: ReqData<CurrentUser>,
) -> impl Responder {
    let data = form.into_inner();

    // Send the user back to whatever page the button was on
    let back = req
        .headers()
        .get(REFERER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("/")
        .to_string();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let existing = favorites::table
        .filter(favorites::user_id.eq(user.id))
        .filter(favorites::content_id.eq(&data.content_id))
        .filter(favorites::content_type.eq(&data.content_type))
        .select(Favorite::as_select())
        .first::<Favorite>(&mut conn)
        .optional();

    match existing {
        Ok(Some(_)) => redirect_with_flash(&back, "Already in favorites!"),
        Ok(None) => {
            let new_favorite = NewFavorite {
                user_id: user.id,
                content_id: data.content_id,
                content_type: data.content_type,
                title: data.title,
                extra_data: data.extra_data,
            };

            match diesel::insert_into(favorites::table)
                .values(&new_favorite)
                .execute(&mut conn)
            {
                Ok(_) => redirect_with_flash(&back, "Added to favorites ❤️"),
                // Lost the race against another tab; same outcome as the check
                Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                    redirect_with_flash(&back, "Already in favorites!")
                }
                Err(e) => SiteError::from(e).error_response(),
            }
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}
