//! Mailing-list subscription route.

use axum::extract::{Json as JsonBody, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::services::subscribe as subscribe_service;
use crate::services::subscribe::{SubscribeError, SubscribeOutcome};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubscribeBody {
    pub email: String,
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// `POST /api/subscribe` — add an email to the mailing list.
pub async fn subscribe(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<SubscribeBody>,
) -> Result<Json<SubscribeResponse>, StatusCode> {
    let Some(api_key) = state.subscribe_key.as_deref() else {
        error!("subscribe request received but BREVO_API_KEY is not configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    match subscribe_service::subscribe(&state.http, api_key, &body.email).await {
        Ok(SubscribeOutcome::Subscribed) => Ok(Json(SubscribeResponse { success: true, message: None })),
        Ok(SubscribeOutcome::AlreadySubscribed) => Ok(Json(SubscribeResponse {
            success: true,
            message: Some("Already subscribed".to_owned()),
        })),
        Err(e) => Err(subscribe_error_to_status(&e)),
    }
}

pub(crate) fn subscribe_error_to_status(err: &SubscribeError) -> StatusCode {
    match err {
        SubscribeError::InvalidEmail => StatusCode::BAD_REQUEST,
        SubscribeError::Upstream(_) | SubscribeError::Rejected(_) => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "subscribe_routes_test.rs"]
mod tests;
