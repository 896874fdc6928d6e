use actix_web::http::Method;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "fanfare_session";

// Admin-only routes (route pattern + method) as a static set
pub static ADMIN_ONLY_ROUTES: Lazy<HashSet<(&'static str, Method)>> = Lazy::new(|| {
    let mut set = HashSet::new();

    set.insert(("/add_news", Method::POST));
    set.insert(("/delete_news/{news_id}", Method::GET));
    set.insert(("/delete_review/{review_id}", Method::GET));

    set.insert(("/add_album", Method::POST));
    set.insert(("/delete_album/{album_id}", Method::POST));
    set.insert(("/add_track/{album_id}", Method::POST));
    set.insert(("/delete_track/{track_id}", Method::POST));

    set.insert(("/add_concert", Method::POST));

    set
});

// Routes any logged-in user may hit; admin routes are implied
pub static LOGIN_REQUIRED_ROUTES: Lazy<HashSet<(&'static str, Method)>> = Lazy::new(|| {
    let mut set = HashSet::new();

    set.insert(("/logout", Method::GET));
    set.insert(("/add_review", Method::POST));
    set.insert(("/add_about_comment", Method::POST));
    set.insert(("/add_to_favorite", Method::POST));
    set.insert(("/favorites", Method::GET));

    set
});

pub fn requires_admin(pattern: &str, method: &Method) -> bool {
    ADMIN_ONLY_ROUTES
        .iter()
        .any(|(p, m)| *p == pattern && m == method)
}

pub fn requires_login(pattern: &str, method: &Method) -> bool {
    LOGIN_REQUIRED_ROUTES
        .iter()
        .any(|(p, m)| *p == pattern && m == method)
        || requires_admin(pattern, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_routes_also_require_login() {
        for (pattern, method) in ADMIN_ONLY_ROUTES.iter() {
            assert!(requires_login(pattern, method), "{pattern} should require login");
        }
    }

    #[test]
    fn public_pages_are_open() {
        assert!(!requires_login("/news", &Method::GET));
        assert!(!requires_login("/album/{album_id}", &Method::GET));
        assert!(!requires_login("/register", &Method::POST));
    }

    #[test]
    fn favorites_need_login_but_not_admin() {
        assert!(requires_login("/favorites", &Method::GET));
        assert!(!requires_admin("/favorites", &Method::GET));
    }

    #[test]
    fn content_management_is_admin_only() {
        assert!(requires_admin("/add_news", &Method::POST));
        assert!(requires_admin("/delete_track/{track_id}", &Method::POST));
    }
}
