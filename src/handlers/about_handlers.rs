use actix_web::web::ReqData;
use actix_web::{web, HttpRequest, Responder, ResponseError};
use diesel::prelude::*;

use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::comment_models::{AboutComment, CommentForm, NewAboutComment};
use crate::models::user_models::CurrentUser;
use crate::pages::about_pages;
use crate::schema::about_comments;
use crate::utils::flash_utils::take_flash;
use crate::utils::response_utils::{html_page, redirect};

pub async fn about_page(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let result = about_comments::table
        .order(about_comments::date.desc())
        .select(AboutComment::as_select())
        .load::<AboutComment>(&mut conn);

    match result {
        Ok(comments) => {
            let flash = take_flash(&req);
            html_page(
                about_pages::about_page(&comments, user.as_deref(), flash.as_deref()),
                flash.is_some(),
            )
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn add_about_comment(
    pool: web::Data<DbPool>,
    form: web::Form<CommentForm>,
    user: ReqData<CurrentUser>,
) -> impl Responder {
    let text = form.into_inner().text;

    // Blank submissions are silently dropped
    if text.trim().is_empty() {
        return redirect("/about");
    }

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_comment = NewAboutComment {
        username: user.username.clone(),
        text,
    };

    match diesel::insert_into(about_comments::table)
        .values(&new_comment)
        .execute(&mut conn)
    {
        Ok(_) => redirect("/about"),
        Err(e) => SiteError::from(e).error_response(),
    }
}
