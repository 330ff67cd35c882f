use super::*;
use crate::state::test_helpers::bare_app_state;

#[test]
fn error_mapping_covers_every_variant() {
    assert_eq!(
        bouquet_error_to_status(BouquetError::NotConfigured),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        bouquet_error_to_status(BouquetError::EmptyBouquet),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert_eq!(
        bouquet_error_to_status(BouquetError::NotFound("sweet-rose-0042".to_owned())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        bouquet_error_to_status(BouquetError::SlugExhausted),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        bouquet_error_to_status(BouquetError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn create_without_database_answers_service_unavailable() {
    let state = bare_app_state();
    let doc = BouquetDocument::new();
    let result = create_bouquet(State(state), Json(doc)).await;
    assert_eq!(result.err(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn list_without_database_answers_service_unavailable() {
    let state = bare_app_state();
    let result = list_bouquets(State(state)).await;
    assert!(matches!(result, Err(StatusCode::SERVICE_UNAVAILABLE)));
}

#[tokio::test]
async fn get_without_database_answers_service_unavailable() {
    let state = bare_app_state();
    let result = get_bouquet(State(state), Path("sweet-rose-0042".to_owned())).await;
    assert!(matches!(result, Err(StatusCode::SERVICE_UNAVAILABLE)));
}

#[test]
fn create_response_serializes_slug_and_url() {
    let response = CreateBouquetResponse {
        slug: "sweet-rose-0042".to_owned(),
        url: "http://localhost:3000/?b=sweet-rose-0042".to_owned(),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["slug"], "sweet-rose-0042");
    assert_eq!(json["url"], "http://localhost:3000/?b=sweet-rose-0042");
}
