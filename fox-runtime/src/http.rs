//! HTTP surface
//!
//! `GET /api/search?type=<type>&query=<value>` plus a health probe.

use axum::{
    extract::{rejection::QueryRejection, Query as QueryParams, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use fox_core::{Query, QueryError};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use thiserror::Error;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};
use uuid::Uuid;

use crate::Aggregator;

const INTERNAL_ERROR: &str = "Internal server error";

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    /// Include internal error messages in 500 bodies
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(aggregator: Aggregator, expose_error_details: bool) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            expose_error_details,
        }
    }
}

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("Internal server error")]
    Internal { details: Option<String> },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Query(e) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
            }
            ApiError::Internal { details } => {
                let body = match details {
                    Some(details) => json!({ "error": INTERNAL_ERROR, "details": details }),
                    None => json!({ "error": INTERNAL_ERROR }),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// Build the gateway router with its middleware stack
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/api/search", get(search))
        .route("/health", get(health_check))
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

async fn search(
    State(state): State<AppState>,
    params: Result<QueryParams<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, ApiError> {
    // An undecodable query string carries no usable parameters
    let params = params.map(|p| p.0).unwrap_or_default();
    let query = Query::from_params(params).inspect_err(|e| {
        if let QueryError::UnsupportedType(rejected) = e {
            info!("Rejected search type {:?}", rejected);
        }
    })?;

    let request_id = Uuid::new_v4().to_string();
    info!("Search {} [{}]", query, request_id);

    let outcome = state.aggregator.search(&query).await.map_err(|e| {
        error!("Aggregation failed for {} [{}]: {}", query, request_id, e);
        ApiError::Internal {
            details: state.expose_error_details.then(|| e.to_string()),
        }
    })?;

    let cache_status = if outcome.cached { "HIT" } else { "MISS" };
    Ok((
        [
            ("x-cache", cache_status.to_string()),
            ("x-request-id", request_id),
        ],
        Json(json!({ "success": true, "results": outcome.results })),
    )
        .into_response())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("Request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_bad_requests() {
        let response = ApiError::from(QueryError::MissingParameter).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::from(QueryError::UnsupportedType("foo".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_hides_details_by_default() {
        let err = ApiError::Internal { details: None };
        assert_eq!(err.to_string(), INTERNAL_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
