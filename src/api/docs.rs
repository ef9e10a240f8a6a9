//! OpenAPI document served at `/openapi.json` and rendered at `/docs`.

use utoipa::OpenApi;

use super::handlers::{
    EndpointsResponse, HealthResponse, RootResponse, SentimentRequest, SentimentResponse,
};
use crate::classifier::Sentiment;
use crate::error::ErrorResponse;

/// OpenAPI description of the public routes.
#[derive(OpenApi)]
#[openapi(
    info(title = "Sentiment Analysis API", description = "Keyword-based sentiment classification"),
    paths(super::handlers::root, super::handlers::health, super::handlers::sentiment),
    components(schemas(
        RootResponse,
        EndpointsResponse,
        HealthResponse,
        SentimentRequest,
        SentimentResponse,
        Sentiment,
        ErrorResponse
    )),
    tags((name = "sentiment", description = "Sentiment classification"))
)]
pub struct ApiDoc;
