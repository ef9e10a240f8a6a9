//! HTTP API route definitions.

use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{Request, Response},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, Span};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::docs::ApiDoc;
use super::handlers::{health, prometheus_metrics, root, sentiment, AppState};
use crate::config::Config;
use crate::error::Result;

/// Create the API router.
pub fn create_router(state: AppState) -> Result<Router> {
    let cors = cors_layer(&state.config)?;

    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &Span| {
            info!(
                status = res.status().as_u16(),
                latency_ms = latency.as_millis() as u64,
                "finished processing request"
            );
        });

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Text length is unbounded.
        .route("/sentiment", post(sentiment).layer(DefaultBodyLimit::disable()))
        .route("/metrics", get(prometheus_metrics))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(trace)
        .layer(cors);

    Ok(router)
}

/// CORS for the configured origins, with credentials.
///
/// Methods and headers mirror the preflight request since wildcards are not
/// allowed together with credentials.
pub fn cors_layer(config: &Config) -> Result<CorsLayer> {
    let origins = config.cors_header_values()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
