use actix_web::web::ReqData;
use actix_web::{web, HttpRequest, Responder, ResponseError};
use diesel::prelude::*;

use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::review_models::Review;
use crate::models::user_models::CurrentUser;
use crate::pages::site_pages;
use crate::schema::reviews;
use crate::utils::flash_utils::take_flash;
use crate::utils::response_utils::html_page;

const HOME_REVIEW_COUNT: i64 = 6;

pub async fn home_page(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let result = reviews::table
        .order(reviews::date.desc())
        .limit(HOME_REVIEW_COUNT)
        .select(Review::as_select())
        .load::<Review>(&mut conn);

    match result {
        Ok(review_list) => {
            let flash = take_flash(&req);
            html_page(
                site_pages::home_page(&review_list, user.as_deref(), flash.as_deref()),
                flash.is_some(),
            )
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn site_info_page(req: HttpRequest, user: Option<ReqData<CurrentUser>>) -> impl Responder {
    let flash = take_flash(&req);
    html_page(
        site_pages::site_info_page(user.as_deref(), flash.as_deref()),
        flash.is_some(),
    )
}
