//! Root, health, and sentiment endpoint behavior.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{classify, get, json_body, post_json};

#[tokio::test]
async fn root_lists_documented_endpoints() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(
        body,
        json!({
            "message": "Sentiment Analysis API",
            "endpoints": {
                "sentiment": "POST /sentiment",
                "docs": "GET /docs",
                "health": "GET /health"
            }
        })
    );
}

#[tokio::test]
async fn health_returns_healthy() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn positive_keywords_classify_positive() {
    assert_eq!(classify("This is a good day").await, "positive");
    assert_eq!(classify("I love this product").await, "positive");
}

#[tokio::test]
async fn negative_keywords_classify_negative() {
    assert_eq!(classify("That was bad").await, "negative");
    assert_eq!(classify("I hate waiting").await, "negative");
}

#[tokio::test]
async fn text_without_keywords_is_neutral() {
    assert_eq!(classify("The meeting is at noon").await, "neutral");
}

#[tokio::test]
async fn empty_text_is_neutral() {
    assert_eq!(classify("").await, "neutral");
}

#[tokio::test]
async fn positive_takes_precedence_over_negative() {
    let response = post_json("/sentiment", r#"{"text": "I love but hate this"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "sentiment": "positive" }));
}

#[tokio::test]
async fn keywords_match_case_insensitively() {
    for text in ["GOOD", "Good", "good"] {
        assert_eq!(classify(text).await, "positive", "input: {text}");
    }
    assert_eq!(classify("BAD").await, "negative");
}

#[tokio::test]
async fn text_larger_than_default_body_limit_is_classified() {
    // axum's default limit is 2 MiB.
    let text = format!("{} good", "a".repeat(3 * 1024 * 1024));
    let body = json!({ "text": text }).to_string();

    let response = post_json("/sentiment", &body).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "sentiment": "positive" }));
}

#[tokio::test]
async fn extra_fields_are_ignored() {
    let response = post_json("/sentiment", r#"{"text": "good", "lang": "en"}"#).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({ "sentiment": "positive" }));
}

#[tokio::test]
async fn get_on_sentiment_is_not_allowed() {
    let response = get("/sentiment").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
