//! Mailing-list subscription via the Brevo contacts API.
//!
//! An address that is already on the list is reported as a success, not an
//! error; the caller only cares that the contact ends up subscribed.

use serde_json::Value;

const BREVO_CONTACTS_URL: &str = "https://api.brevo.com/v3/contacts";
const BREVO_LIST_ID: u32 = 3;

#[derive(Debug, thiserror::Error)]
pub enum SubscribeError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("subscription request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("subscription rejected: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    AlreadySubscribed,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Subscribe an address to the mailing list.
///
/// # Errors
///
/// Returns `InvalidEmail` for malformed input, `Upstream` when the API is
/// unreachable, or `Rejected` when the API refuses the contact for any
/// reason other than it already existing.
pub async fn subscribe(
    http: &reqwest::Client,
    api_key: &str,
    email: &str,
) -> Result<SubscribeOutcome, SubscribeError> {
    let normalized = normalize_email(email).ok_or(SubscribeError::InvalidEmail)?;

    let response = http
        .post(BREVO_CONTACTS_URL)
        .header("api-key", api_key)
        .json(&serde_json::json!({
            "email": normalized,
            "listIds": [BREVO_LIST_ID],
            "updateEnabled": true,
        }))
        .send()
        .await?;

    if response.status().is_success() {
        return Ok(SubscribeOutcome::Subscribed);
    }

    let body: Value = response.json().await.unwrap_or_default();
    if is_duplicate_contact(&body) {
        return Ok(SubscribeOutcome::AlreadySubscribed);
    }

    let reason = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_owned();
    Err(SubscribeError::Rejected(reason))
}

fn is_duplicate_contact(body: &Value) -> bool {
    body.get("code").and_then(Value::as_str) == Some("duplicate_parameter")
}

#[cfg(test)]
#[path = "subscribe_test.rs"]
mod tests;
