//! Bouquet persistence routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use canvas::doc::BouquetDocument;
use serde::Serialize;

use crate::services::bouquet::{self, BouquetError, BouquetSummary};
use crate::services::slug::looks_like_slug;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CreateBouquetResponse {
    pub slug: String,
    pub url: String,
}

/// `POST /api/bouquets` — store a bouquet, answer its slug and share link.
pub async fn create_bouquet(
    State(state): State<AppState>,
    Json(doc): Json<BouquetDocument>,
) -> Result<(StatusCode, Json<CreateBouquetResponse>), StatusCode> {
    let Some(pool) = state.db.as_ref() else {
        return Err(bouquet_error_to_status(BouquetError::NotConfigured));
    };

    let slug = bouquet::store_bouquet(pool, &doc)
        .await
        .map_err(bouquet_error_to_status)?;
    let url = bouquet::share_url(&state.share_base, &slug);

    Ok((StatusCode::CREATED, Json(CreateBouquetResponse { slug, url })))
}

/// `GET /api/bouquets` — newest stored bouquets, for the public gallery.
pub async fn list_bouquets(
    State(state): State<AppState>,
) -> Result<Json<Vec<BouquetSummary>>, StatusCode> {
    let Some(pool) = state.db.as_ref() else {
        return Err(bouquet_error_to_status(BouquetError::NotConfigured));
    };

    let summaries = bouquet::list_bouquets(pool)
        .await
        .map_err(bouquet_error_to_status)?;
    Ok(Json(summaries))
}

/// `GET /api/bouquets/:slug` — fetch a stored bouquet.
pub async fn get_bouquet(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BouquetDocument>, StatusCode> {
    let Some(pool) = state.db.as_ref() else {
        return Err(bouquet_error_to_status(BouquetError::NotConfigured));
    };
    if !looks_like_slug(&slug) {
        return Err(StatusCode::NOT_FOUND);
    }

    let doc = bouquet::fetch_bouquet(pool, &slug)
        .await
        .map_err(bouquet_error_to_status)?;
    Ok(Json(doc))
}

pub(crate) fn bouquet_error_to_status(err: BouquetError) -> StatusCode {
    match err {
        BouquetError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        BouquetError::EmptyBouquet => StatusCode::UNPROCESSABLE_ENTITY,
        BouquetError::NotFound(_) => StatusCode::NOT_FOUND,
        BouquetError::SlugExhausted | BouquetError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "bouquets_test.rs"]
mod tests;
