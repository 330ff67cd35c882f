use super::*;
use crate::state::test_helpers::bare_app_state;

#[test]
fn invalid_email_maps_to_bad_request() {
    assert_eq!(
        subscribe_error_to_status(&SubscribeError::InvalidEmail),
        StatusCode::BAD_REQUEST
    );
}

#[test]
fn rejected_maps_to_bad_gateway() {
    let err = SubscribeError::Rejected("invalid_parameter".to_owned());
    assert_eq!(subscribe_error_to_status(&err), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn subscribe_without_api_key_answers_service_unavailable() {
    let state = bare_app_state();
    let body = SubscribeBody { email: "person@example.com".to_owned() };
    let result = subscribe(State(state), JsonBody(body)).await;
    assert!(matches!(result, Err(StatusCode::SERVICE_UNAVAILABLE)));
}

#[test]
fn success_response_omits_message_when_absent() {
    let response = SubscribeResponse { success: true, message: None };
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(json, r#"{"success":true}"#);
}

#[test]
fn already_subscribed_response_carries_message() {
    let response = SubscribeResponse { success: true, message: Some("Already subscribed".to_owned()) };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["message"], "Already subscribed");
}
