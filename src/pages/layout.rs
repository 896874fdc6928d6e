//! Shared page chrome. Pages are plain strings assembled server-side and
//! returned as `text/html`; there is no template engine.

use crate::models::user_models::CurrentUser;
use crate::utils::html_utils::escape_html;

pub fn page(title: &str, user: Option<&CurrentUser>, flash: Option<&str>, body: &str) -> String {
    let flash_banner = match flash {
        Some(message) => format!(
            r#"<div class="flash">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} — Fanfare</title>
    <style>
        * {{
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }}
        body {{
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #1a1a1a;
            color: #e0e0e0;
            line-height: 1.6;
        }}
        header {{
            background-color: #2a2a2a;
            border-bottom: 1px solid #3a3a3a;
            padding: 14px 20px;
            display: flex;
            justify-content: space-between;
            align-items: center;
        }}
        nav a, header .account a {{
            color: #4a9eff;
            text-decoration: none;
            margin-right: 14px;
        }}
        nav a:hover {{
            text-decoration: underline;
        }}
        .account {{
            color: #888;
        }}
        .container {{
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }}
        h1 {{
            color: #4a9eff;
            margin-bottom: 16px;
        }}
        h2 {{
            margin: 18px 0 8px;
        }}
        .flash {{
            background-color: #2d4a2d;
            border: 1px solid #4a7a4a;
            border-radius: 4px;
            padding: 10px 14px;
            margin-bottom: 16px;
        }}
        .card {{
            background-color: #242424;
            border: 1px solid #3a3a3a;
            border-radius: 6px;
            padding: 14px;
            margin-bottom: 14px;
        }}
        .muted {{
            color: #888;
            font-size: 14px;
        }}
        form.inline {{
            display: inline;
        }}
        input, textarea {{
            background-color: #1f1f1f;
            border: 1px solid #3a3a3a;
            border-radius: 4px;
            color: #e0e0e0;
            padding: 6px 8px;
            margin: 4px 0;
        }}
        button {{
            background-color: #4a9eff;
            border: none;
            border-radius: 4px;
            color: #10131a;
            padding: 6px 12px;
            cursor: pointer;
        }}
        button.danger {{
            background-color: #c0504a;
            color: #fff;
        }}
        .sold-out {{
            color: #c0504a;
            font-weight: 600;
        }}
        iframe {{
            border: 0;
            margin-top: 6px;
        }}
    </style>
</head>
<body>
    <header>
        <nav>
            <a href="/home">Home</a>
            <a href="/news">News</a>
            <a href="/discography">Discography</a>
            <a href="/concerts">Concerts</a>
            <a href="/about">About</a>
            <a href="/site-info">Site info</a>
        </nav>
        <div class="account">{account}</div>
    </header>
    <div class="container">
        {flash_banner}
        {body}
    </div>
</body>
</html>
"#,
        title = escape_html(title),
        account = account_links(user),
        flash_banner = flash_banner,
        body = body,
    )
}

fn account_links(user: Option<&CurrentUser>) -> String {
    match user {
        Some(user) => format!(
            r#"<a href="/favorites">Favorites</a> {} · <a href="/logout">Log out</a>"#,
            escape_html(&user.username)
        ),
        None => r#"<a href="/login">Log in</a> <a href="/register">Register</a>"#.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> CurrentUser {
        CurrentUser {
            id: 1,
            username: "admin".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn anonymous_layout_offers_login() {
        let html = page("News", None, None, "<p>hello</p>");
        assert!(html.contains(r#"<a href="/login">Log in</a>"#));
        assert!(!html.contains("/logout"));
    }

    #[test]
    fn logged_in_layout_shows_username_and_logout() {
        let html = page("News", Some(&admin()), None, "");
        assert!(html.contains("admin"));
        assert!(html.contains(r#"<a href="/logout">Log out</a>"#));
        assert!(html.contains(r#"<a href="/favorites">Favorites</a>"#));
    }

    #[test]
    fn flash_message_is_rendered_escaped() {
        let html = page("News", None, Some("<b>done</b>"), "");
        assert!(html.contains("&lt;b&gt;done&lt;/b&gt;"));
        assert!(!html.contains("<b>done</b>"));
    }
}
