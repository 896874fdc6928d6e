use crate::models::album_models::Album;
use crate::models::track_models::Track;
use crate::models::user_models::CurrentUser;
use crate::pages::favorite_pages::favorite_button;
use crate::pages::layout;
use crate::utils::html_utils::escape_html;

pub fn discography_page(albums: &[Album], user: Option<&CurrentUser>, flash: Option<&str>) -> String {
    let is_admin = user.map(|u| u.is_admin).unwrap_or(false);
    let logged_in = user.is_some();
    let mut body = String::new();

    body.push_str("<h1>Discography</h1>\n");

    if is_admin {
        body.push_str(
            r#"<div class="card">
    <h2>Add album</h2>
    <form method="post" action="/add_album">
        <input name="title" placeholder="Title" required><br>
        <input name="year" type="number" placeholder="Release year" required><br>
        <textarea name="desc" rows="3" cols="60" placeholder="Description" required></textarea><br>
        <input name="url" placeholder="Cover image URL" required><br>
        <button type="submit">Add album</button>
    </form>
</div>
"#,
        );
    }

    if albums.is_empty() {
        body.push_str(r#"<p class="muted">No albums yet.</p>"#);
    }

    for album in albums {
        let favorite = if logged_in {
            favorite_button(
                &album.id.to_string(),
                "album",
                &album.title,
                &album.image_url,
            )
        } else {
            String::new()
        };

        let admin_actions = if is_admin {
            format!(
                r#"<form class="inline" method="post" action="/delete_album/{}">
        <button class="danger" type="submit">Delete album</button>
    </form>"#,
                album.id
            )
        } else {
            String::new()
        };

        body.push_str(&format!(
            r#"<div class="card">
    <img src="{image_url}" alt="{title} cover" width="160"><br>
    <h2><a href="/album/{id}">{title}</a></h2>
    <div class="muted">{year}</div>
    <p>{description}</p>
    {favorite}
    {admin_actions}
</div>
"#,
            id = album.id,
            title = escape_html(&album.title),
            year = album.release_year,
            description = escape_html(&album.description),
            image_url = escape_html(&album.image_url),
            favorite = favorite,
            admin_actions = admin_actions,
        ));
    }

    layout::page("Discography", user, flash, &body)
}

pub fn album_page(
    album: &Album,
    tracks: &[Track],
    user: Option<&CurrentUser>,
    flash: Option<&str>,
) -> String {
    let is_admin = user.map(|u| u.is_admin).unwrap_or(false);
    let logged_in = user.is_some();
    let mut body = String::new();

    body.push_str(&format!(
        r#"<div class="card">
    <img src="{image_url}" alt="{title} cover" width="200"><br>
    <h1>{title}</h1>
    <p>{description}</p>
    {favorite}
</div>
"#,
        title = escape_html(&album.title),
        description = escape_html(&album.description),
        image_url = escape_html(&album.image_url),
        favorite = if logged_in {
            favorite_button(&album.id.to_string(), "album", &album.title, &album.image_url)
        } else {
            String::new()
        },
    ));

    if is_admin {
        body.push_str(&format!(
            r#"<div class="card">
    <h2>Add track</h2>
    <form method="post" action="/add_track/{}">
        <input name="title" placeholder="Track title" required><br>
        <input name="spotify_url" placeholder="Spotify link (optional)"><br>
        <input name="youtube_url" placeholder="YouTube link (optional)"><br>
        <button type="submit">Add track</button>
    </form>
</div>
"#,
            album.id
        ));
    }

    body.push_str("<h2>Tracks</h2>\n");

    if tracks.is_empty() {
        body.push_str(r#"<p class="muted">No tracks listed yet.</p>"#);
    }

    for track in tracks {
        body.push_str(&render_track(track, logged_in, is_admin));
    }

    layout::page(&album.title, user, flash, &body)
}

fn render_track(track: &Track, logged_in: bool, is_admin: bool) -> String {
    let mut embeds = String::new();

    if !track.spotify_id.is_empty() {
        embeds.push_str(&format!(
            r#"<iframe src="https://open.spotify.com/embed/track/{}" width="300" height="80" allow="encrypted-media"></iframe>"#,
            escape_html(&track.spotify_id)
        ));
    }
    if !track.youtube_id.is_empty() {
        embeds.push_str(&format!(
            r#"<iframe src="https://www.youtube.com/embed/{}" width="300" height="170" allowfullscreen></iframe>"#,
            escape_html(&track.youtube_id)
        ));
    }

    let mut actions = String::new();
    if logged_in {
        actions.push_str(&favorite_button(
            &track.id.to_string(),
            "track",
            &track.title,
            &track.spotify_id,
        ));
        if !track.youtube_id.is_empty() {
            actions.push_str(&favorite_button(
                &track.youtube_id,
                "video",
                &track.title,
                &track.youtube_id,
            ));
        }
    }
    if is_admin {
        actions.push_str(&format!(
            r#"<form class="inline" method="post" action="/delete_track/{}">
        <button class="danger" type="submit">Delete</button>
    </form>"#,
            track.id
        ));
    }

    format!(
        r#"<div class="card">
    <h3>{title}</h3>
    {embeds}
    <div>{actions}</div>
</div>
"#,
        title = escape_html(&track.title),
        embeds = embeds,
        actions = actions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album() -> Album {
        Album {
            id: 3,
            title: "Kyougen".to_string(),
            release_year: 2022,
            description: "Debut album".to_string(),
            image_url: "https://img.example/kyougen.jpg".to_string(),
        }
    }

    fn track(spotify: &str, youtube: &str) -> Track {
        Track {
            id: 11,
            album_id: 3,
            title: "Usseewa".to_string(),
            spotify_id: spotify.to_string(),
            youtube_id: youtube.to_string(),
        }
    }

    fn fan() -> CurrentUser {
        CurrentUser {
            id: 2,
            username: "fan".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn discography_links_each_album() {
        let html = discography_page(&[album()], None, None);
        assert!(html.contains(r#"href="/album/3""#));
        assert!(html.contains("Kyougen"));
    }

    #[test]
    fn album_page_embeds_available_players() {
        let html = album_page(&album(), &[track("spotid", "ytid")], None, None);
        assert!(html.contains("https://open.spotify.com/embed/track/spotid"));
        assert!(html.contains("https://www.youtube.com/embed/ytid"));
    }

    #[test]
    fn tracks_without_ids_get_no_embeds() {
        let html = album_page(&album(), &[track("", "")], None, None);
        assert!(!html.contains("open.spotify.com/embed"));
        assert!(!html.contains("youtube.com/embed"));
    }

    #[test]
    fn logged_in_fans_can_favorite_but_not_delete() {
        let html = album_page(&album(), &[track("spotid", "ytid")], Some(&fan()), None);
        assert!(html.contains(r#"action="/add_to_favorite""#));
        assert!(!html.contains("/delete_track/11"));
        assert!(!html.contains("/add_track/3"));
    }
}
