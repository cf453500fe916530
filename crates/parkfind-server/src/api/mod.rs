mod occupancy;
mod parking;

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use parkfind_resolver::{ParkingResolver, ResolveError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ParkingResolver>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    service: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, request_id: String) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "invalid_coordinate" | "invalid_parameter" | "validation_error" => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            "bad_request" => StatusCode::BAD_REQUEST,
            "not_found" => StatusCode::NOT_FOUND,
            "provider_unavailable" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_resolve_error(request_id: String, error: &ResolveError) -> ApiError {
    match error {
        ResolveError::InvalidCoordinate(e) => {
            ApiError::new(request_id, "invalid_coordinate", e.to_string())
        }
        ResolveError::InvalidParameter { .. } => {
            ApiError::new(request_id, "invalid_parameter", error.to_string())
        }
        ResolveError::NotFound(message) => ApiError::new(request_id, "not_found", message.clone()),
        ResolveError::ProviderUnavailable(e) => {
            tracing::error!(error = %e, "parking provider request failed");
            ApiError::new(request_id, "provider_unavailable", error.to_string())
        }
    }
}

pub(super) fn map_query_rejection(request_id: String, rejection: &QueryRejection) -> ApiError {
    ApiError::new(request_id, "validation_error", rejection.body_text())
}

pub(super) fn map_json_rejection(request_id: String, rejection: &JsonRejection) -> ApiError {
    ApiError::new(request_id, "bad_request", rejection.body_text())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/parking/nearest", get(parking::nearest_parking))
        .route(
            "/api/v1/parking/occupancy",
            get(occupancy::occupancy_from_query).post(occupancy::occupancy_from_body),
        )
        .route("/api/v1/parking/{item_id}", get(parking::parking_by_id))
}

/// Builds the full router. Unmatched paths fall through to `static_dir` when
/// one is configured.
pub fn build_app(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = api_router();
    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse::new(
        HealthData {
            status: "ok",
            service: "parkfind",
        },
        req_id.0,
    ))
}
