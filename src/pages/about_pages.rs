use crate::models::comment_models::AboutComment;
use crate::models::user_models::CurrentUser;
use crate::pages::layout;
use crate::utils::html_utils::escape_html;

pub fn about_page(
    comments: &[AboutComment],
    user: Option<&CurrentUser>,
    flash: Option<&str>,
) -> String {
    let mut body = String::new();

    body.push_str(
        r#"<h1>About the band</h1>
<div class="card">
    <p>This is a fan-run site. We collect the news, releases and concert
    dates in one place, and give fellow fans a spot to share what the music
    means to them.</p>
    <p>Nothing here is official. Support the band by buying the records and
    going to the shows.</p>
</div>
<h2>Fan comments</h2>
"#,
    );

    if user.is_some() {
        body.push_str(
            r#"<div class="card">
    <form method="post" action="/add_about_comment">
        <textarea name="text" rows="3" cols="60" placeholder="Share your story" required></textarea><br>
        <button type="submit">Post comment</button>
    </form>
</div>
"#,
        );
    } else {
        body.push_str(r#"<p class="muted"><a href="/login">Log in</a> to leave a comment.</p>"#);
    }

    if comments.is_empty() {
        body.push_str(r#"<p class="muted">No comments yet. Be the first!</p>"#);
    }

    for comment in comments {
        body.push_str(&format!(
            r#"<div class="card">
    <strong>{username}</strong> <span class="muted">{date}</span>
    <p>{text}</p>
</div>
"#,
            username = escape_html(&comment.username),
            date = comment.date.format("%Y-%m-%d %H:%M"),
            text = escape_html(&comment.text),
        ));
    }

    layout::page("About", user, flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_visitors_are_pointed_to_login() {
        let html = about_page(&[], None, None);
        assert!(html.contains("Log in</a> to leave a comment"));
        assert!(!html.contains("/add_about_comment"));
    }

    #[test]
    fn comments_render_author_and_text() {
        let comment = AboutComment {
            id: 1,
            username: "fan".to_string(),
            text: "Saw them live, unforgettable".to_string(),
            date: chrono::NaiveDateTime::default(),
        };
        let html = about_page(&[comment], None, None);
        assert!(html.contains("fan"));
        assert!(html.contains("Saw them live, unforgettable"));
    }
}
