//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! database pool is optional so the server can run without persistence;
//! handlers that need it answer 503 instead of failing at startup. The
//! outbound HTTP client is shared for connection reuse across preview
//! scrapes and subscription calls.

use sqlx::PgPool;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Bouquet store. `None` when `DATABASE_URL` is not configured.
    pub db: Option<PgPool>,
    /// Outbound HTTP client for preview scraping and subscriptions.
    pub http: reqwest::Client,
    /// Brevo API key. `None` when subscriptions are not configured.
    pub subscribe_key: Option<String>,
    /// Base URL used to build share links for stored bouquets.
    pub share_base: String,
}

impl AppState {
    #[must_use]
    pub fn new(db: Option<PgPool>, subscribe_key: Option<String>, share_base: String) -> Self {
        Self { db, http: reqwest::Client::new(), subscribe_key, share_base }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
