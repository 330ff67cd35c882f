use super::*;

fn kind_of(raw: &str) -> Option<MediaKind> {
    classify(raw).map(|(kind, _)| kind)
}

fn reference_of(raw: &str) -> Option<String> {
    classify(raw).map(|(_, reference)| reference)
}

// =============================================================
// Platform patterns
// =============================================================

#[test]
fn instagram_post_and_reel() {
    assert_eq!(
        classify("https://www.instagram.com/p/Cxyz_12-ab/"),
        Some((MediaKind::Instagram, "Cxyz_12-ab".to_owned()))
    );
    assert_eq!(
        classify("https://instagram.com/reel/AbC123/?igsh=xyz"),
        Some((MediaKind::Instagram, "AbC123".to_owned()))
    );
}

#[test]
fn youtube_watch_url() {
    assert_eq!(
        classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
        Some((MediaKind::Youtube, "dQw4w9WgXcQ".to_owned()))
    );
}

#[test]
fn youtube_shorts_and_short_domain() {
    assert_eq!(
        classify("https://youtube.com/shorts/abc-DEF_12"),
        Some((MediaKind::Youtube, "abc-DEF_12".to_owned()))
    );
    assert_eq!(
        classify("https://youtu.be/dQw4w9WgXcQ?t=42"),
        Some((MediaKind::Youtube, "dQw4w9WgXcQ".to_owned()))
    );
}

#[test]
fn youtube_id_stops_at_query_separator() {
    assert_eq!(
        reference_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123"),
        Some("dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn spotify_track_album_playlist() {
    assert_eq!(
        classify("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC"),
        Some((MediaKind::Spotify, "track/4uLU6hMCjMI75M1A2tKUQC".to_owned()))
    );
    assert_eq!(
        reference_of("https://open.spotify.com/album/6dVIqQ8qmQ5GBnJ9shOYGE?si=x"),
        Some("album/6dVIqQ8qmQ5GBnJ9shOYGE".to_owned())
    );
    assert_eq!(
        reference_of("https://open.spotify.com/playlist/37i9dQZF1DX50QitC6Oqtn"),
        Some("playlist/37i9dQZF1DX50QitC6Oqtn".to_owned())
    );
}

#[test]
fn substack_native_domain_keeps_full_url() {
    let url = "https://astralcodexten.substack.com/p/some-post-title";
    assert_eq!(classify(url), Some((MediaKind::Substack, url.to_owned())));
}

#[test]
fn substack_custom_domain() {
    let url = "https://www.henrikkarlsson.xyz/p/looking-for-alice";
    assert_eq!(classify(url), Some((MediaKind::Substack, url.to_owned())));
}

#[test]
fn letterboxd_film_page_and_review() {
    let film = "https://letterboxd.com/film/past-lives/";
    assert_eq!(classify(film), Some((MediaKind::Letterboxd, film.to_owned())));

    let review = "https://letterboxd.com/some_user/film/past-lives/";
    assert_eq!(classify(review), Some((MediaKind::Letterboxd, review.to_owned())));
}

#[test]
fn twitter_status_extracts_numeric_id() {
    assert_eq!(
        classify("https://twitter.com/jack/status/20"),
        Some((MediaKind::Twitter, "20".to_owned()))
    );
    assert_eq!(
        classify("https://x.com/someone_else/status/1234567890123456789?s=20"),
        Some((MediaKind::Twitter, "1234567890123456789".to_owned()))
    );
}

// =============================================================
// Precedence and fall-through
// =============================================================

#[test]
fn matching_host_without_id_falls_through_to_link() {
    // youtube.com without a capturable video id is still a valid URL.
    assert_eq!(kind_of("https://www.youtube.com/watch?v="), Some(MediaKind::Link));
    assert_eq!(kind_of("https://www.youtube.com/feed/subscriptions"), Some(MediaKind::Link));
}

#[test]
fn twitter_profile_without_status_is_generic_link() {
    assert_eq!(kind_of("https://twitter.com/jack"), Some(MediaKind::Link));
}

#[test]
fn spotify_artist_page_is_generic_link() {
    assert_eq!(kind_of("https://open.spotify.com/artist/4gzpq5DPGxSnKTe4SA8HAU"), Some(MediaKind::Link));
}

#[test]
fn unsupported_host_is_generic_link_verbatim() {
    let url = "https://example.com/some/page?q=1";
    assert_eq!(classify(url), Some((MediaKind::Link, url.to_owned())));
}

// =============================================================
// Totality
// =============================================================

#[test]
fn non_url_input_is_no_match() {
    assert_eq!(classify("not a url"), None);
    assert_eq!(classify(""), None);
    assert_eq!(classify("   "), None);
    assert_eq!(classify("example.com/no-scheme"), None);
}

#[test]
fn non_http_scheme_is_no_match() {
    assert_eq!(classify("ftp://example.com/file"), None);
    assert_eq!(classify("mailto:someone@example.com"), None);
    assert_eq!(classify("javascript:alert(1)"), None);
}

#[test]
fn classification_is_deterministic() {
    let inputs = [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        "https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC",
        "not a url",
        "https://example.com/",
        "",
    ];
    for input in inputs {
        assert_eq!(classify(input), classify(input));
    }
}

#[test]
fn unicode_and_garbage_never_panic() {
    for input in ["héllo wörld", "🌹🌹🌹", "http://", "https://", "://x", "\0\0"] {
        // Totality: any answer is fine, panicking is not.
        let _ignored = classify(input);
    }
}
