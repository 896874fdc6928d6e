use actix_web::web::ReqData;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::album_models::{Album, AlbumForm, NewAlbum};
use crate::models::track_models::{NewTrack, Track, TrackForm};
use crate::models::user_models::CurrentUser;
use crate::pages::discography_pages;
use crate::schema::{albums, tracks};
use crate::utils::flash_utils::take_flash;
use crate::utils::link_utils::{spotify_track_id, youtube_video_id};
use crate::utils::response_utils::{html_page, redirect};

pub async fn discography_page(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let result = albums::table
        .order(albums::release_year.desc())
        .select(Album::as_select())
        .load::<Album>(&mut conn);

    match result {
        Ok(album_list) => {
            let flash = take_flash(&req);
            html_page(
                discography_pages::discography_page(&album_list, user.as_deref(), flash.as_deref()),
                flash.is_some(),
            )
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn add_album(pool: web::Data<DbPool>, form: web::Form<AlbumForm>) -> impl Responder {
    let data = form.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_album = NewAlbum {
        title: data.title,
        release_year: data.year,
        description: data.desc,
        image_url: data.url,
    };

    match diesel::insert_into(albums::table)
        .values(&new_album)
        .execute(&mut conn)
    {
        Ok(_) => redirect("/discography"),
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn album_page(
    req: HttpRequest,
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let album_id = path.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let album_result = albums::table
        .find(album_id)
        .select(Album::as_select())
        .first::<Album>(&mut conn)
        .optional();

    let album = match album_result {
        Ok(Some(album)) => album,
        Ok(None) => return HttpResponse::NotFound().body("Album not found"),
        Err(e) => return SiteError::from(e).error_response(),
    };

    let tracks_result = tracks::table
        .filter(tracks::album_id.eq(album_id))
        .order(tracks::id.asc())
        .select(Track::as_select())
        .load::<Track>(&mut conn);

    match tracks_result {
        Ok(track_list) => {
            let flash = take_flash(&req);
            html_page(
                discography_pages::album_page(
                    &album,
                    &track_list,
                    user.as_deref(),
                    flash.as_deref(),
                ),
                flash.is_some(),
            )
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn add_track(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    form: web::Form<TrackForm>,
) -> impl Responder {
    let album_id = path.into_inner();
    let data = form.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let new_track = NewTrack {
        album_id,
        title: data.title,
        spotify_id: spotify_track_id(&data.spotify_url),
        youtube_id: youtube_video_id(&data.youtube_url),
    };

    match diesel::insert_into(tracks::table)
        .values(&new_track)
        .execute(&mut conn)
    {
        Ok(_) => redirect(&format!("/album/{album_id}")),
        Err(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => {
            HttpResponse::BadRequest().body("Invalid album id: does not exist")
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn delete_album(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
    let album_id = path.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    // Tracks reference the album, so they go first
    if let Err(e) = diesel::delete(tracks::table.filter(tracks::album_id.eq(album_id)))
        .execute(&mut conn)
    {
        return SiteError::from(e).error_response();
    }

    match diesel::delete(albums::table.find(album_id)).execute(&mut conn) {
        Ok(_) => redirect("/discography"),
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn delete_track(pool: web::Data<DbPool>, path: web::Path<i32>) -> impl Responder {
    let track_id = path.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    // Remember the owning album so the redirect lands back on its page
    let album_id_result = tracks::table
        .find(track_id)
        .select(tracks::album_id)
        .first::<i32>(&mut conn)
        .optional();

    let album_id = match album_id_result {
        Ok(id) => id,
        Err(e) => return SiteError::from(e).error_response(),
    };

    match diesel::delete(tracks::table.find(track_id)).execute(&mut conn) {
        Ok(_) => match album_id {
            Some(id) => redirect(&format!("/album/{id}")),
            None => redirect("/discography"),
        },
        Err(e) => SiteError::from(e).error_response(),
    }
}
