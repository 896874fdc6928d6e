use actix_web::web::ReqData;
use actix_web::{web, HttpRequest, Responder, ResponseError};
use diesel::prelude::*;

use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::news_models::{NewNews, NewsForm, NewsItem};
use crate::models::user_models::CurrentUser;
use crate::pages::news_pages;
use crate::schema::news;
use crate::utils::flash_utils::take_flash;
use crate::utils::response_utils::{html_page, redirect, redirect_with_flash};

/// Serves both `/` and `/news`.
pub async fn news_page(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let result = news::table
        .order(news::date.desc())
        .select(NewsItem::as_select())
        .load::<NewsItem>(&mut conn);

    match result {
        Ok(items) => {
            let flash = take_flash(&req);
            html_page(
                news_pages::news_page(&items, user.as_deref(), flash.as_deref()),
                flash.is_some(),
            )
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn add_news(pool: web::Data<DbPool>, form: web::Form<NewsForm>) -> impl Responder {
    let data = form.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_news = NewNews {
        title: data.title,
        content: data.content,
    };

    match diesel::insert_into(news::table)
        .values(&new_news)
        .execute(&mut conn)
    {
        Ok(_) => redirect("/news"),
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn delete_news(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
    let news_id = path.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    match diesel::delete(news::table.find(news_id)).execute(&mut conn) {
        Ok(_) => redirect_with_flash("/news", "News deleted"),
        Err(e) => SiteError::from(e).error_response(),
    }
}
