//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! A small JSON API: store and fetch bouquets, scrape link previews, and
//! subscribe emails. CORS is wide open because the canvas frontend is
//! served from a different origin in development.

pub mod bouquets;
pub mod preview;
pub mod subscribe;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/bouquets", get(bouquets::list_bouquets).post(bouquets::create_bouquet))
        .route("/api/bouquets/{slug}", get(bouquets::get_bouquet))
        .route("/api/og", get(preview::og_preview))
        .route("/api/letterboxd", get(preview::letterboxd_preview))
        .route("/api/subscribe", post(subscribe::subscribe))
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
