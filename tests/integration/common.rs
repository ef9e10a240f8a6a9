//! Shared helpers for driving the router.

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use sentiment_api::api::{create_router, AppState};

/// Router built from default configuration.
pub fn app() -> Router {
    create_router(AppState::default()).expect("default config should build a router")
}

/// Send a request through a fresh router.
pub async fn send(request: Request<Body>) -> Response<Body> {
    app().oneshot(request).await.expect("router should not fail")
}

/// GET `uri`.
pub async fn get(uri: &str) -> Response<Body> {
    send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()).await
}

/// POST a raw JSON body to `uri`.
pub async fn post_json(uri: &str, body: &str) -> Response<Body> {
    send(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Read the response body as JSON.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response should be valid JSON")
}

/// POST `{"text": text}` to `/sentiment` and return the label.
pub async fn classify(text: &str) -> String {
    let body = serde_json::json!({ "text": text }).to_string();
    let response = post_json("/sentiment", &body).await;
    assert_eq!(response.status(), 200, "unexpected status for {text:?}");

    json_body(response).await["sentiment"]
        .as_str()
        .expect("sentiment should be a string")
        .to_string()
}
