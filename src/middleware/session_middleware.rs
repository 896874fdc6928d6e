use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web::Data,
    Error, HttpMessage,
};
use chrono::Utc;
use diesel::prelude::*;
use futures::future::{ready, LocalBoxFuture, Ready};
use std::sync::Arc;

use crate::{
    constants::middleware_constants::{requires_admin, requires_login, SESSION_COOKIE},
    db::DbPool,
    errors::SiteError,
    models::{
        session_models::Session,
        user_models::{CurrentUser, User},
    },
    schema::{sessions, users},
    utils::token_utils::verify_session_token,
};

/// Resolves the session cookie to a `CurrentUser` in the request extensions
/// and enforces the login-required / admin-only route sets.
pub struct SessionMiddlewareFactory;

impl<S, B> Transform<S, ServiceRequest> for SessionMiddlewareFactory
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddleware {
            service: Arc::new(service),
        }))
    }
}

pub struct SessionMiddleware<S> {
    service: Arc<S>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        let pool_option = req.app_data::<Data<DbPool>>().cloned();
        let secret_option = req.app_data::<Data<Vec<u8>>>().cloned();
        // The route pattern ("/album/{album_id}") is what the constants key on
        let pattern = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());
        let method = req.method().clone();
        let token_value = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        Box::pin(async move {
            let pool = pool_option.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Database pool not configured")
            })?;
            let secret = secret_option.ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Session secret not configured")
            })?;

            let current_user = token_value
                .as_deref()
                .and_then(|token| resolve_user(&pool, &secret, token));

            let is_admin = current_user.as_ref().map(|u| u.is_admin).unwrap_or(false);

            match current_user {
                Some(user) => {
                    req.extensions_mut().insert(user);
                }
                None if requires_login(&pattern, &method) => {
                    return Err(SiteError::LoginRequired.into());
                }
                None => {}
            }

            if requires_admin(&pattern, &method) && !is_admin {
                return Err(SiteError::Forbidden.into());
            }

            service.call(req).await
        })
    }
}

/// Token is valid when the signature checks out, the session row exists,
/// it has not expired, and it still points at a real user.
fn resolve_user(pool: &DbPool, secret: &[u8], token_value: &str) -> Option<CurrentUser> {
    let claims = verify_session_token(token_value, secret)?;

    let mut conn = pool.get().ok()?;

    let session = sessions::table
        .filter(sessions::token.eq(token_value))
        .select(Session::as_select())
        .first::<Session>(&mut conn)
        .optional()
        .ok()??;

    if let Some(expires_at) = session.expires_at {
        if expires_at < Utc::now().naive_utc() {
            return None;
        }
    }

    let user = users::table
        .find(session.user_id)
        .select(User::as_select())
        .first::<User>(&mut conn)
        .ok()?;

    if claims.sub != user.id.to_string() {
        return None;
    }

    Some(user.into())
}
