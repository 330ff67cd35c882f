//! Link preview scraping.
//!
//! Two flavors: a generic Open Graph scrape for arbitrary pages, and a
//! richer Letterboxd scrape that pulls the full-size poster, star rating
//! and release year out of the film page markup. Extraction is plain
//! substring scanning over the fetched HTML; pages that lack a tag simply
//! yield `None` for that field.

use reqwest::header::USER_AGENT;
use serde::Serialize;

const OG_USER_AGENT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";
const FILM_USER_AGENT: &str = "Mozilla/5.0 (compatible; LinkBouquet/1.0)";
const POSTER_BASE: &str = "https://a.ltrbxd.com/resized/";

#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    BadStatus(reqwest::StatusCode),
}

/// Open Graph fields of an arbitrary page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgPreview {
    pub image: Option<String>,
    pub title: Option<String>,
}

/// Preview of a Letterboxd film page or review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmPreview {
    pub image: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub rating: Option<String>,
    pub year: Option<String>,
    pub is_review: bool,
}

/// Fetch a page and extract its Open Graph image and title.
///
/// # Errors
///
/// Returns an error if the upstream request fails.
pub async fn fetch_og(http: &reqwest::Client, url: &str) -> Result<OgPreview, ScrapeError> {
    let html = http
        .get(url)
        .header(USER_AGENT, OG_USER_AGENT)
        .send()
        .await?
        .text()
        .await?;
    Ok(extract_og(&html))
}

/// Fetch a Letterboxd page and extract its film preview.
///
/// # Errors
///
/// Returns an error if the upstream request fails or answers non-2xx.
pub async fn fetch_film(http: &reqwest::Client, url: &str) -> Result<FilmPreview, ScrapeError> {
    let response = http
        .get(url)
        .header(USER_AGENT, FILM_USER_AGENT)
        .send()
        .await?;
    if !response.status().is_success() {
        return Err(ScrapeError::BadStatus(response.status()));
    }
    let html = response.text().await?;
    Ok(extract_film(&html, url))
}

pub(crate) fn extract_og(html: &str) -> OgPreview {
    OgPreview {
        image: meta_content(html, "og:image"),
        title: meta_content(html, "og:title"),
    }
}

pub(crate) fn extract_film(html: &str, url: &str) -> FilmPreview {
    let og_image = meta_content(html, "og:image");
    // The inline poster reference is higher quality than the OG image.
    let poster = attr_value(html, "data-film-poster").map(|path| format!("{POSTER_BASE}{path}"));

    let title = meta_content(html, "og:title")
        .map(|t| t.replace(" | Letterboxd", "").replace("&#x27;", "'"))
        .unwrap_or_else(|| "Unknown".to_owned());

    FilmPreview {
        image: poster.or(og_image),
        title,
        description: meta_content(html, "og:description"),
        rating: rating_from(html),
        year: year_from(html),
        is_review: url.contains("/film/") && url.split('/').count() > 5,
    }
}

/// `content` attribute of the first `<meta>` tag carrying the given
/// `property`, regardless of attribute order within the tag.
fn meta_content(html: &str, property: &str) -> Option<String> {
    let needle = format!("property=\"{property}\"");
    let mut rest = html;
    while let Some(at) = rest.find("<meta") {
        let tag = &rest[at..];
        let tag_end = tag.find('>').unwrap_or(tag.len());
        let tag_body = &tag[..tag_end];
        if tag_body.contains(&needle) {
            if let Some(value) = attr_value(tag_body, "content") {
                return Some(value.to_owned());
            }
        }
        rest = &tag[tag_end..];
    }
    None
}

/// First non-empty `attr="..."` value in the haystack.
fn attr_value<'a>(haystack: &'a str, attr: &str) -> Option<&'a str> {
    let marker = format!("{attr}=\"");
    let start = haystack.find(&marker)? + marker.len();
    let rest = &haystack[start..];
    let end = rest.find('"')?;
    if end == 0 { None } else { Some(&rest[..end]) }
}

/// Star rating, either from review prose ("rated it 4.5") or from the
/// rating badge class (`rating rating-8`).
fn rating_from(html: &str) -> Option<String> {
    for marker in ["rated it ", "Rated it "] {
        if let Some(at) = html.find(marker) {
            if let Some(rating) = leading_rating(&html[at + marker.len()..]) {
                return Some(rating);
            }
        }
    }
    badge_rating(html)
}

fn badge_rating(html: &str) -> Option<String> {
    let marker = "class=\"rating rating-";
    let start = html.find(marker)? + marker.len();
    let rest = &html[start..];
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    if end == 0 { None } else { Some(rest[..end].to_owned()) }
}

/// A digit, optionally followed by a decimal digit ("4" or "4.5").
fn leading_rating(rest: &str) -> Option<String> {
    let bytes = rest.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_digit) {
        return None;
    }
    if bytes.get(1) == Some(&b'.') && bytes.get(2).is_some_and(u8::is_ascii_digit) {
        return Some(rest[..3].to_owned());
    }
    Some(rest[..1].to_owned())
}

/// Release year from the first `/films/year/NNNN/` link.
fn year_from(html: &str) -> Option<String> {
    let marker = "/films/year/";
    let mut rest = html;
    while let Some(at) = rest.find(marker) {
        let after = &rest[at + marker.len()..];
        let end = after.find(|c: char| !c.is_ascii_digit()).unwrap_or(after.len());
        if end == 4 && after[end..].starts_with('/') {
            return Some(after[..4].to_owned());
        }
        rest = after;
    }
    None
}

#[cfg(test)]
#[path = "scrape_test.rs"]
mod tests;
