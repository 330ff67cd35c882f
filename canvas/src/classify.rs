//! URL classification: raw pasted text → typed media reference.
//!
//! `classify` is total and pure: any string in, the same answer out, never
//! a panic. Platform patterns are checked in a fixed precedence order and
//! the first match wins; a host that matches but carries no usable ID falls
//! through to the next pattern. Anything that is at least a well-formed
//! http(s) URL classifies as a generic link; everything else is no match.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use url::Url;

use crate::media::MediaKind;

/// Classify a raw string into a `(kind, media_ref)` pair, or `None` when the
/// input is not a recognizable URL at all.
///
/// Precedence: instagram → youtube → spotify → substack → letterboxd →
/// twitter → generic link.
#[must_use]
pub fn classify(raw: &str) -> Option<(MediaKind, String)> {
    if let Some(id) = instagram_id(raw) {
        return Some((MediaKind::Instagram, id.to_owned()));
    }
    if let Some(id) = youtube_id(raw) {
        return Some((MediaKind::Youtube, id.to_owned()));
    }
    if let Some(reference) = spotify_ref(raw) {
        return Some((MediaKind::Spotify, reference));
    }
    if is_substack_post(raw) {
        return Some((MediaKind::Substack, raw.to_owned()));
    }
    if is_letterboxd_film(raw) {
        return Some((MediaKind::Letterboxd, raw.to_owned()));
    }
    if let Some(status) = twitter_status_id(raw) {
        return Some((MediaKind::Twitter, status.to_owned()));
    }
    if is_plain_http_url(raw) {
        return Some((MediaKind::Link, raw.to_owned()));
    }
    None
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_handle_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Capture the run of `allowed` characters immediately after the first
/// occurrence of `marker`. Empty captures yield `None` so the caller falls
/// through to the next pattern.
fn capture_after<'a>(haystack: &'a str, marker: &str, allowed: fn(char) -> bool) -> Option<&'a str> {
    let start = haystack.find(marker)? + marker.len();
    let rest = &haystack[start..];
    let end = rest.find(|c: char| !allowed(c)).unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}

fn instagram_id(raw: &str) -> Option<&str> {
    capture_after(raw, "instagram.com/reel/", is_id_char)
        .or_else(|| capture_after(raw, "instagram.com/p/", is_id_char))
}

fn youtube_id(raw: &str) -> Option<&str> {
    capture_after(raw, "youtube.com/watch?v=", is_id_char)
        .or_else(|| capture_after(raw, "youtube.com/shorts/", is_id_char))
        .or_else(|| capture_after(raw, "youtu.be/", is_id_char))
}

fn spotify_ref(raw: &str) -> Option<String> {
    for segment in ["track", "album", "playlist"] {
        let marker = format!("spotify.com/{segment}/");
        if let Some(id) = capture_after(raw, &marker, |c: char| c.is_ascii_alphanumeric()) {
            return Some(format!("{segment}/{id}"));
        }
    }
    None
}

/// Substack posts live either on `<name>.substack.com/p/<slug>` or on a
/// custom `www.<name>.<tld>/p/<slug>` domain.
fn is_substack_post(raw: &str) -> bool {
    if let Some(at) = raw.find(".substack.com/p/") {
        let has_label = raw[..at].chars().next_back().is_some_and(is_slug_char);
        let has_slug = capture_after(raw, ".substack.com/p/", is_slug_char).is_some();
        if has_label && has_slug {
            return true;
        }
    }

    // Custom domain: www.<label>.<tld>/p/<slug>
    let Some(www) = raw.find("www.") else {
        return false;
    };
    let rest = &raw[www + "www.".len()..];
    let label_end = rest
        .find(|c: char| !is_slug_char(c))
        .unwrap_or(rest.len());
    if label_end == 0 || !rest[label_end..].starts_with('.') {
        return false;
    }
    let after_dot = &rest[label_end + 1..];
    let tld_end = after_dot
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(after_dot.len());
    if tld_end == 0 || !after_dot[tld_end..].starts_with("/p/") {
        return false;
    }
    capture_after(after_dot, "/p/", is_slug_char).is_some()
}

/// Letterboxd film pages: `letterboxd.com/film/<slug>` or a user review at
/// `letterboxd.com/<user>/film/<slug>`.
fn is_letterboxd_film(raw: &str) -> bool {
    let Some(at) = raw.find("letterboxd.com/") else {
        return false;
    };
    let rest = &raw[at + "letterboxd.com/".len()..];
    if let Some(path) = rest.strip_prefix("film/") {
        return path.chars().next().is_some_and(is_slug_char);
    }
    let user_end = rest
        .find(|c: char| !is_handle_char(c))
        .unwrap_or(rest.len());
    if user_end == 0 {
        return false;
    }
    match rest[user_end..].strip_prefix("/film/") {
        Some(path) => path.chars().next().is_some_and(is_slug_char),
        None => false,
    }
}

fn twitter_status_id(raw: &str) -> Option<&str> {
    for host in ["twitter.com/", "x.com/"] {
        let Some(at) = raw.find(host) else {
            continue;
        };
        let rest = &raw[at + host.len()..];
        let handle_end = rest
            .find(|c: char| !is_handle_char(c))
            .unwrap_or(rest.len());
        if handle_end == 0 {
            continue;
        }
        if let Some(after) = rest[handle_end..].strip_prefix("/status/") {
            let end = after
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after.len());
            if end > 0 {
                return Some(&after[..end]);
            }
        }
    }
    None
}

/// Fallback: any absolute http(s) URL becomes a generic link.
fn is_plain_http_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}
