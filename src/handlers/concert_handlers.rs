use actix_web::web::ReqData;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use chrono::NaiveDate;
use diesel::prelude::*;

use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::concert_models::{Concert, ConcertForm, NewConcert};
use crate::models::user_models::CurrentUser;
use crate::pages::concert_pages;
use crate::schema::concerts;
use crate::utils::flash_utils::take_flash;
use crate::utils::response_utils::{html_page, redirect};

pub async fn concerts_page(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let result = concerts::table
        .order(concerts::concert_date.asc())
        .select(Concert::as_select())
        .load::<Concert>(&mut conn);

    match result {
        Ok(concert_list) => {
            let flash = take_flash(&req);
            html_page(
                concert_pages::concerts_page(&concert_list, user.as_deref(), flash.as_deref()),
                flash.is_some(),
            )
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn add_concert(pool: web::Data<DbPool>, form: web::Form<ConcertForm>) -> impl Responder {
    let data = form.into_inner();

    let concert_date = match NaiveDate::parse_from_str(&data.date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return HttpResponse::BadRequest().body("Invalid concert date"),
    };

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_concert = NewConcert {
        city: data.city,
        venue: data.venue,
        concert_date,
        ticket_url: data.url,
        is_sold_out: false,
    };

    match diesel::insert_into(concerts::table)
        .values(&new_concert)
        .execute(&mut conn)
    {
        Ok(_) => redirect("/concerts"),
        Err(e) => SiteError::from(e).error_response(),
    }
}
