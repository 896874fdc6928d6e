//! One-shot notices ("Added to favorites", "News deleted") carried in a
//! cookie across a redirect and cleared by the next rendered page.

use actix_web::cookie::{Cookie, SameSite};
use actix_web::HttpRequest;
use url::form_urlencoded;

pub const FLASH_COOKIE: &str = "flash";

pub fn flash_cookie(message: &str) -> Cookie<'static> {
    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes()).collect();
    Cookie::build(FLASH_COOKIE, encoded)
        .path("/")
        .same_site(SameSite::Lax)
        .finish()
}

/// Reads and decodes the pending flash message, if any. The response that
/// renders it must also attach `clear_flash_cookie`.
pub fn take_flash(req: &HttpRequest) -> Option<String> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    let decoded: String = form_urlencoded::parse(cookie.value().as_bytes())
        .map(|(key, value)| [key, value].concat())
        .collect();

    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

pub fn clear_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(FLASH_COOKIE, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn message_survives_the_cookie_round_trip() {
        let cookie = flash_cookie("Added to favorites ❤️");
        let req = TestRequest::default().cookie(cookie).to_http_request();

        assert_eq!(take_flash(&req).as_deref(), Some("Added to favorites ❤️"));
    }

    #[test]
    fn cookie_value_is_ascii_safe() {
        let cookie = flash_cookie("News deleted; see /news");
        assert!(cookie.value().chars().all(|c| c.is_ascii_alphanumeric()
            || matches!(c, '%' | '+' | '-' | '.' | '_' | '*')));
    }

    #[test]
    fn no_cookie_means_no_message() {
        let req = TestRequest::default().to_http_request();
        assert!(take_flash(&req).is_none());
    }
}
