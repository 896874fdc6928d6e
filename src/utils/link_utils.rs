//! Admins paste whole share links into the track form; only the bare ids
//! are stored. A value that doesn't look like a known link is kept as-is,
//! so pasting a raw id also works.

/// `https://open.spotify.com/track/<id>?si=...` -> `<id>`
pub fn spotify_track_id(url: &str) -> String {
    match url.split_once("track/") {
        Some((_, rest)) => rest.split('?').next().unwrap_or_default().to_string(),
        None => url.to_string(),
    }
}

/// `watch?v=<id>` and `youtu.be/<id>` forms -> `<id>`
pub fn youtube_video_id(url: &str) -> String {
    if let Some((_, rest)) = url.split_once("v=") {
        rest.split('&').next().unwrap_or_default().to_string()
    } else if let Some((_, rest)) = url.split_once("youtu.be/") {
        rest.split('?').next().unwrap_or_default().to_string()
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spotify_share_link() {
        assert_eq!(
            spotify_track_id("https://open.spotify.com/track/4B0JvthVoAAuygILe3n4Bs?si=abc123"),
            "4B0JvthVoAAuygILe3n4Bs"
        );
    }

    #[test]
    fn spotify_link_without_query() {
        assert_eq!(
            spotify_track_id("https://open.spotify.com/track/4B0JvthVoAAuygILe3n4Bs"),
            "4B0JvthVoAAuygILe3n4Bs"
        );
    }

    #[test]
    fn spotify_raw_id_passes_through() {
        assert_eq!(spotify_track_id("4B0JvthVoAAuygILe3n4Bs"), "4B0JvthVoAAuygILe3n4Bs");
    }

    #[test]
    fn youtube_watch_link() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn youtube_short_link() {
        assert_eq!(
            youtube_video_id("https://youtu.be/dQw4w9WgXcQ?si=xyz"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn youtube_raw_id_passes_through() {
        assert_eq!(youtube_video_id("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(spotify_track_id(""), "");
        assert_eq!(youtube_video_id(""), "");
    }
}
