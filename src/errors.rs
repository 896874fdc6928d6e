use actix_web::http::header::LOCATION;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Everything a handler or the session middleware can fail with.
///
/// `LoginRequired` renders as a redirect to the login page rather than a
/// plain 401 because every protected route is reached from a browser form
/// or link.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("database connection error")]
    Pool,
    #[error("database error: {0}")]
    Db(#[from] diesel::result::Error),
    #[error("login required")]
    LoginRequired,
    #[error("access denied")]
    Forbidden,
}

impl ResponseError for SiteError {
    fn status_code(&self) -> StatusCode {
        match self {
            SiteError::Pool | SiteError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::LoginRequired => StatusCode::FOUND,
            SiteError::Forbidden => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            SiteError::Pool => HttpResponse::InternalServerError().body("Database connection error"),
            SiteError::Db(e) => {
                log::error!("database error: {e}");
                HttpResponse::InternalServerError().body("Database error")
            }
            SiteError::LoginRequired => HttpResponse::Found()
                .insert_header((LOCATION, "/login"))
                .finish(),
            SiteError::Forbidden => HttpResponse::Forbidden().body("Access denied"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_required_redirects_to_login() {
        let resp = SiteError::LoginRequired.error_response();
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");
    }

    #[test]
    fn forbidden_is_403() {
        assert_eq!(
            SiteError::Forbidden.status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
