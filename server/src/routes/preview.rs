//! Link preview routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;

use crate::services::scrape::{self, FilmPreview, OgPreview, ScrapeError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PreviewQuery {
    pub url: Option<String>,
}

/// `GET /api/og?url=...` — Open Graph image and title of an arbitrary page.
pub async fn og_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<OgPreview>, StatusCode> {
    let Some(url) = query.url else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let preview = scrape::fetch_og(&state.http, &url)
        .await
        .map_err(scrape_error_to_status)?;
    Ok(Json(preview))
}

/// `GET /api/letterboxd?url=...` — poster, rating and year of a film page.
pub async fn letterboxd_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<FilmPreview>, StatusCode> {
    let Some(url) = query.url else {
        return Err(StatusCode::BAD_REQUEST);
    };
    let preview = scrape::fetch_film(&state.http, &url)
        .await
        .map_err(scrape_error_to_status)?;
    Ok(Json(preview))
}

pub(crate) fn scrape_error_to_status(err: ScrapeError) -> StatusCode {
    match err {
        ScrapeError::Upstream(_) | ScrapeError::BadStatus(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
