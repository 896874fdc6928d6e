use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header::LOCATION;
use actix_web::web::ReqData;
use actix_web::{web, HttpRequest, HttpResponse, Responder, ResponseError};
use bcrypt::{hash, verify};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use crate::constants::middleware_constants::SESSION_COOKIE;
use crate::db::{get_conn, DbPool};
use crate::errors::SiteError;
use crate::models::session_models::NewSession;
use crate::models::user_models::{CredentialsForm, CurrentUser, NewUser, User};
use crate::pages::auth_pages;
use crate::schema::{sessions, users};
use crate::utils::flash_utils::take_flash;
use crate::utils::response_utils::{html_page, redirect_with_flash};
use crate::utils::token_utils::{generate_session_token, SESSION_DURATION_DAYS};

pub async fn register_form(req: HttpRequest, user: Option<ReqData<CurrentUser>>) -> impl Responder {
    let flash = take_flash(&req);
    html_page(
        auth_pages::register_page(user.as_deref(), flash.as_deref()),
        flash.is_some(),
    )
}

pub async fn register(
    pool: web::Data<DbPool>,
    form: web::Form<CredentialsForm>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let data = form.into_inner();

    if data.username.trim().is_empty() || data.password.is_empty() {
        return html_page(
            auth_pages::register_page(user.as_deref(), Some("Username and password are required")),
            false,
        );
    }

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let password_hash = match hash(&data.password, bcrypt::DEFAULT_COST) {
        Ok(h) => h,
        Err(_) => return HttpResponse::InternalServerError().body("Failed to hash password"),
    };

    let new_user = NewUser {
        username: data.username.trim().to_string(),
        password_hash,
        is_admin: false,
    };

    match diesel::insert_into(users::table)
        .values(&new_user)
        .execute(&mut conn)
    {
        Ok(_) => redirect_with_flash("/login", "Registration successful! Please log in."),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => html_page(
            auth_pages::register_page(
                user.as_deref(),
                Some("Registration failed (username may be taken)"),
            ),
            false,
        ),
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn login_form(req: HttpRequest, user: Option<ReqData<CurrentUser>>) -> impl Responder {
    let flash = take_flash(&req);
    html_page(
        auth_pages::login_page(user.as_deref(), flash.as_deref()),
        flash.is_some(),
    )
}

pub async fn login(
    pool: web::Data<DbPool>,
    secret: web::Data<Vec<u8>>,
    form: web::Form<CredentialsForm>,
    user: Option<ReqData<CurrentUser>>,
) -> impl Responder {
    let data = form.into_inner();

    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    let account_result: QueryResult<User> = users::table
        .filter(users::username.eq(&data.username))
        .select(User::as_select())
        .first(&mut conn);

    let account = match account_result {
        Ok(u) => u,
        Err(DieselError::NotFound) => {
            return html_page(
                auth_pages::login_page(user.as_deref(), Some("Invalid username or password")),
                false,
            )
        }
        Err(e) => return SiteError::from(e).error_response(),
    };

    if !verify(&data.password, &account.password_hash).unwrap_or(false) {
        return html_page(
            auth_pages::login_page(user.as_deref(), Some("Invalid username or password")),
            false,
        );
    }

    let token = generate_session_token(account.id, &secret);
    let expiration = Utc::now() + Duration::days(SESSION_DURATION_DAYS);

    let new_session = NewSession {
        id: Uuid::new_v4().to_string(),
        user_id: account.id,
        token: token.clone(),
        created_at: Some(Utc::now().naive_utc()),
        expires_at: Some(expiration.naive_utc()),
    };

    match diesel::insert_into(sessions::table)
        .values(&new_session)
        .execute(&mut conn)
    {
        Ok(_) => {
            log::info!("user {} logged in", account.username);

            let session_cookie = Cookie::build(SESSION_COOKIE, token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .finish();

            HttpResponse::Found()
                .insert_header((LOCATION, "/news"))
                .cookie(session_cookie)
                .finish()
        }
        Err(e) => SiteError::from(e).error_response(),
    }
}

pub async fn logout(req: HttpRequest, pool: web::Data<DbPool>) -> impl Responder {
    let mut conn = match get_conn(&pool) {
        Ok(c) => c,
        Err(e) => return e.error_response(),
    };

    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(e) = diesel::delete(sessions::table.filter(sessions::token.eq(cookie.value())))
            .execute(&mut conn)
        {
            log::warn!("failed to delete session on logout: {e}");
        }
    }

    let mut removal = Cookie::new(SESSION_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    HttpResponse::Found()
        .insert_header((LOCATION, "/news"))
        .cookie(removal)
        .finish()
}
