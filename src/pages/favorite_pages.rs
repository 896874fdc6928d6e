use crate::models::favorite_models::{Favorite, GroupedFavorites};
use crate::models::user_models::CurrentUser;
use crate::pages::layout;
use crate::utils::html_utils::escape_html;

/// Inline "save to favorites" form, reused wherever content is shown.
pub fn favorite_button(
    content_id: &str,
    content_type: &str,
    title: &str,
    extra_data: &str,
) -> String {
    format!(
        r#"<form class="inline" method="post" action="/add_to_favorite">
    <input type="hidden" name="content_id" value="{content_id}">
    <input type="hidden" name="content_type" value="{content_type}">
    <input type="hidden" name="title" value="{title}">
    <input type="hidden" name="extra_data" value="{extra_data}">
    <button type="submit">&#10084; Favorite</button>
</form>"#,
        content_id = escape_html(content_id),
        content_type = escape_html(content_type),
        title = escape_html(title),
        extra_data = escape_html(extra_data),
    )
}

pub fn favorites_page(
    favorites: &GroupedFavorites,
    user: Option<&CurrentUser>,
    flash: Option<&str>,
) -> String {
    let mut body = String::new();
    body.push_str("<h1>My favorites</h1>\n");

    section(&mut body, "Albums", &favorites.albums, |f| {
        format!(
            r#"<a href="/album/{}">{}</a>"#,
            escape_html(&f.content_id),
            escape_html(&f.title)
        )
    });

    section(&mut body, "Tracks", &favorites.tracks, |f| match &f.extra_data {
        Some(spotify_id) if !spotify_id.is_empty() => format!(
            r#"<a href="https://open.spotify.com/track/{}">{}</a>"#,
            escape_html(spotify_id),
            escape_html(&f.title)
        ),
        _ => escape_html(&f.title),
    });

    section(&mut body, "Videos", &favorites.videos, |f| {
        format!(
            r#"<a href="https://www.youtube.com/watch?v={}">{}</a>"#,
            escape_html(&f.content_id),
            escape_html(&f.title)
        )
    });

    layout::page("My favorites", user, flash, &body)
}

fn section(body: &mut String, heading: &str, rows: &[Favorite], render: impl Fn(&Favorite) -> String) {
    body.push_str(&format!("<h2>{heading}</h2>\n"));

    if rows.is_empty() {
        body.push_str(r#"<p class="muted">Nothing saved here yet.</p>"#);
        body.push('\n');
        return;
    }

    body.push_str("<ul>\n");
    for row in rows {
        body.push_str(&format!(
            "<li>{} <span class=\"muted\">added {}</span></li>\n",
            render(row),
            row.date_added.format("%Y-%m-%d"),
        ));
    }
    body.push_str("</ul>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorite(content_type: &str, content_id: &str, title: &str, extra: Option<&str>) -> Favorite {
        Favorite {
            id: 0,
            user_id: 1,
            content_id: content_id.to_string(),
            content_type: content_type.to_string(),
            title: title.to_string(),
            extra_data: extra.map(str::to_string),
            date_added: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn sections_link_to_their_content() {
        let grouped = GroupedFavorites::from_rows(vec![
            favorite("album", "3", "Kyougen", None),
            favorite("track", "9", "Usseewa", Some("4B0JvthVoAAuygILe3n4Bs")),
            favorite("video", "dQw4w9WgXcQ", "Live 2023", None),
        ]);

        let html = favorites_page(&grouped, None, None);

        assert!(html.contains(r#"href="/album/3""#));
        assert!(html.contains("https://open.spotify.com/track/4B0JvthVoAAuygILe3n4Bs"));
        assert!(html.contains("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
    }

    #[test]
    fn empty_sections_have_a_placeholder() {
        let grouped = GroupedFavorites::from_rows(vec![]);
        let html = favorites_page(&grouped, None, None);
        assert_eq!(html.matches("Nothing saved here yet.").count(), 3);
    }

    #[test]
    fn favorite_button_escapes_values() {
        let html = favorite_button("1", "album", r#"He said "hi""#, "");
        assert!(html.contains("He said &quot;hi&quot;"));
    }
}
