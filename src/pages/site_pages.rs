use crate::models::review_models::Review;
use crate::models::user_models::CurrentUser;
use crate::pages::layout;
use crate::utils::html_utils::escape_html;

pub fn home_page(reviews: &[Review], user: Option<&CurrentUser>, flash: Option<&str>) -> String {
    let is_admin = user.map(|u| u.is_admin).unwrap_or(false);
    let mut body = String::new();

    body.push_str(
        r#"<h1>Welcome</h1>
<div class="card">
    <p>Fan home for the band: the latest <a href="/news">news</a>, the full
    <a href="/discography">discography</a> and upcoming
    <a href="/concerts">concerts</a>, all in one place.</p>
</div>
<h2>Latest reviews</h2>
"#,
    );

    if user.is_some() {
        body.push_str(
            r#"<div class="card">
    <form method="post" action="/add_review">
        <textarea name="text" rows="3" cols="60" placeholder="Leave a review" required></textarea><br>
        <button type="submit">Post review</button>
    </form>
</div>
"#,
        );
    }

    if reviews.is_empty() {
        body.push_str(r#"<p class="muted">No reviews yet.</p>"#);
    }

    for review in reviews {
        let admin_actions = if is_admin {
            format!(
                r#"<a class="danger" href="/delete_review/{}">Delete</a>"#,
                review.id
            )
        } else {
            String::new()
        };

        body.push_str(&format!(
            r#"<div class="card">
    <strong>{username}</strong> <span class="muted">{date}</span>
    <p>{text}</p>
    {admin_actions}
</div>
"#,
            username = escape_html(&review.username),
            date = review.date.format("%Y-%m-%d %H:%M"),
            text = escape_html(&review.text),
            admin_actions = admin_actions,
        ));
    }

    layout::page("Home", user, flash, &body)
}

pub fn site_info_page(user: Option<&CurrentUser>, flash: Option<&str>) -> String {
    let body = r#"<h1>Site info</h1>
<div class="card">
    <p>This site is maintained by fans, for fans. Content is curated by the
    site admins; registered users can post reviews and comments and keep a
    list of favorite albums, tracks and videos.</p>
    <p>Album art and streaming players are embedded from the official
    Spotify and YouTube pages.</p>
</div>
"#;

    layout::page("Site info", user, flash, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan() -> CurrentUser {
        CurrentUser {
            id: 2,
            username: "fan".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn logged_in_users_get_a_review_form() {
        let html = home_page(&[], Some(&fan()), None);
        assert!(html.contains(r#"action="/add_review""#));
    }

    #[test]
    fn anonymous_users_do_not() {
        let html = home_page(&[], None, None);
        assert!(!html.contains("/add_review"));
    }

    #[test]
    fn only_admins_see_review_delete_links() {
        let review = Review {
            id: 4,
            username: "fan".to_string(),
            text: "Great album".to_string(),
            date: chrono::NaiveDateTime::default(),
        };
        let html = home_page(&[review], Some(&fan()), None);
        assert!(!html.contains("/delete_review/4"));
    }
}
