//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::extract::ValidatedJson;
use crate::classifier::{classify, Sentiment};
use crate::config::Config;
use crate::error::ErrorResponse;
use crate::metrics;

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<Config>,
    /// Prometheus handle rendered by `/metrics`.
    pub metrics: PrometheusHandle,
}

impl AppState {
    /// Create new app state.
    pub fn new(config: Config, metrics: PrometheusHandle) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default(), metrics::detached_handle())
    }
}

/// Root descriptor response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Service name.
    pub message: String,
    /// Available endpoints.
    pub endpoints: EndpointsResponse,
}

/// Endpoints listed by the root descriptor.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EndpointsResponse {
    pub sentiment: String,
    pub docs: String,
    pub health: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: String,
}

/// Sentiment classification request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SentimentRequest {
    /// Text to classify.
    pub text: String,
}

/// Sentiment classification response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SentimentResponse {
    /// Assigned label.
    pub sentiment: Sentiment,
}

/// Root handler - lists the public endpoints.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service descriptor", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Sentiment Analysis API".to_string(),
        endpoints: EndpointsResponse {
            sentiment: "POST /sentiment".to_string(),
            docs: "GET /docs".to_string(),
            health: "GET /health".to_string(),
        },
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Sentiment handler - classifies the request text.
#[utoipa::path(
    post,
    path = "/sentiment",
    tag = "sentiment",
    request_body = SentimentRequest,
    responses(
        (status = 200, description = "Text classified", body = SentimentResponse),
        (status = 422, description = "Request body failed validation", body = ErrorResponse)
    )
)]
pub async fn sentiment(
    ValidatedJson(payload): ValidatedJson<SentimentRequest>,
) -> Json<SentimentResponse> {
    let label = {
        let _timer = metrics::timer_classify();
        classify(&payload.text)
    };

    metrics::inc_classifications(label);
    debug!(sentiment = %label, chars = payload.text.chars().count(), "Classified text");

    Json(SentimentResponse { sentiment: label })
}

/// Metrics handler - Prometheus text exposition.
pub async fn prometheus_metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
