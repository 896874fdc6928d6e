use actix_web::http::header::{ContentType, LOCATION};
use actix_web::HttpResponse;

use crate::utils::flash_utils::{clear_flash_cookie, flash_cookie};

/// Renders a page. `had_flash` marks that the page consumed a pending flash
/// message, so the cookie is cleared with the same response.
pub fn html_page(body: String, had_flash: bool) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    builder.content_type(ContentType::html());
    if had_flash {
        builder.cookie(clear_flash_cookie());
    }
    builder.body(body)
}

pub fn redirect(to: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, to))
        .finish()
}

pub fn redirect_with_flash(to: &str, message: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((LOCATION, to))
        .cookie(flash_cookie(message))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn redirect_sets_location() {
        let resp = redirect("/news");
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/news");
    }

    #[test]
    fn redirect_with_flash_attaches_the_cookie() {
        let resp = redirect_with_flash("/news", "News deleted");
        let set_cookie = resp.headers().get("set-cookie").unwrap().to_str().unwrap();
        assert!(set_cookie.starts_with("flash="));
    }
}
