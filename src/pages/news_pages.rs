use crate::models::news_models::NewsItem;
use crate::models::user_models::CurrentUser;
use crate::pages::layout;
use crate::utils::html_utils::escape_html;

pub fn news_page(items: &[NewsItem], user: Option<&CurrentUser>, flash: Option<&str>) -> String {
    let is_admin = user.map(|u| u.is_admin).unwrap_or(false);
    let mut body = String::new();

    body.push_str("<h1>News</h1>\n");

    if is_admin {
        body.push_str(
            r#"<div class="card">
    <h2>Add news</h2>
    <form method="post" action="/add_news">
        <input name="title" placeholder="Title" required><br>
        <textarea name="content" rows="4" cols="60" placeholder="What happened?" required></textarea><br>
        <button type="submit">Publish</button>
    </form>
</div>
"#,
        );
    }

    if items.is_empty() {
        body.push_str(r#"<p class="muted">No news yet.</p>"#);
    }

    for item in items {
        let admin_actions = if is_admin {
            format!(
                r#"<a class="danger" href="/delete_news/{}">Delete</a>"#,
                item.id
            )
        } else {
            String::new()
        };

        body.push_str(&format!(
            r#"<article class="card">
    <h2>{title}</h2>
    <div class="muted">{date}</div>
    <p>{content}</p>
    {admin_actions}
</article>
"#,
            title = escape_html(&item.title),
            date = item.date.format("%Y-%m-%d %H:%M"),
            content = escape_html(&item.content),
            admin_actions = admin_actions,
        ));
    }

    layout::page("News", user, flash, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: i32, title: &str) -> NewsItem {
        NewsItem {
            id,
            title: title.to_string(),
            content: "content".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    fn admin() -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "admin".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn lists_news_titles() {
        let html = news_page(&[item(1, "New single"), item(2, "Tour dates")], None, None);
        assert!(html.contains("New single"));
        assert!(html.contains("Tour dates"));
    }

    #[test]
    fn admin_sees_publish_form_and_delete_links() {
        let html = news_page(&[item(5, "New single")], Some(&admin()), None);
        assert!(html.contains(r#"action="/add_news""#));
        assert!(html.contains(r#"href="/delete_news/5""#));
    }

    #[test]
    fn visitors_get_no_admin_controls() {
        let html = news_page(&[item(5, "New single")], None, None);
        assert!(!html.contains("/add_news"));
        assert!(!html.contains("/delete_news/5"));
    }
}
