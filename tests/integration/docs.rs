//! OpenAPI and Swagger UI routes.

use axum::http::StatusCode;

use crate::common::{get, json_body};

#[tokio::test]
async fn openapi_document_lists_routes() {
    let response = get("/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc = json_body(response).await;
    let paths = doc["paths"].as_object().expect("paths should be an object");
    for path in ["/", "/health", "/sentiment"] {
        assert!(paths.contains_key(path), "missing path {path}");
    }
    assert!(doc["components"]["schemas"]["SentimentRequest"].is_object());
}

#[tokio::test]
async fn swagger_ui_is_served() {
    let response = get("/docs/").await;
    assert_eq!(response.status(), StatusCode::OK);
}
