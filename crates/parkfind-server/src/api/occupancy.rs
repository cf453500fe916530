use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Extension, Json,
};
use parkfind_occupancy::{OccupancyReport, OccupancyRequest};

use crate::middleware::RequestId;

use super::{map_json_rejection, ApiError, ApiResponse};

pub(super) async fn occupancy_from_query(
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<OccupancyRequest>, QueryRejection>,
) -> Result<Json<ApiResponse<OccupancyReport>>, ApiError> {
    // Unlike the parking routes, malformed occupancy input is a plain 400.
    let Query(request) = query
        .map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.body_text()))?;
    assess(req_id, &request)
}

pub(super) async fn occupancy_from_body(
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<OccupancyRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<OccupancyReport>>, ApiError> {
    let Json(request) = body.map_err(|e| map_json_rejection(req_id.0.clone(), &e))?;
    assess(req_id, &request)
}

fn assess(
    req_id: RequestId,
    request: &OccupancyRequest,
) -> Result<Json<ApiResponse<OccupancyReport>>, ApiError> {
    let report = request
        .assess()
        .map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.to_string()))?;
    Ok(Json(ApiResponse::new(report, req_id.0)))
}
