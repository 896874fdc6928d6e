use actix_web::web::ReqData;
use actix_web::{web, Responder, ResponseError};
use diesel::prelude::*;

use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::review_models::{NewReview, ReviewForm};
use crate::models::user_models::CurrentUser;
use crate::schema::reviews;
use crate::utils::response_utils::{redirect, redirect_with_flash};

pub async fn add_review(
    pool: web::Data<DbPool>,
    form: web::Form<ReviewForm>,
    user: ReqData<CurrentUser>,
) -> impl Responder {
    let text = form.into_inner().text;

    // Blank submissions are silently dropped
    if text.trim().is_empty() {
        return redirect("/news");
    }

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_review = NewReview {
        username: user.username.clone(),
        text,
    };

    match diesel::insert_into(reviews::table)
        .values(&new_review)
        .execute(&mut conn)
    {
        Ok(_) => redirect("/news"),
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn delete_review(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
    let review_id = path.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    match diesel::delete(reviews::table.find(review_id)).execute(&mut conn) {
        Ok(_) => redirect_with_flash("/news", "Review deleted"),
        Err(e) => SiteError::from(e).error_response(),
    }
}
