use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Extension, Json,
};
use parkfind_resolver::NearestParking;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_query_rejection, map_resolve_error, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct NearestQuery {
    pub coordinates: Option<String>,
    pub radius: Option<u32>,
    pub limit: Option<u32>,
}

pub(super) async fn nearest_parking(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<NearestQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<NearestParking>>, ApiError> {
    let Query(query) = query.map_err(|e| map_query_rejection(req_id.0.clone(), &e))?;
    let coordinates = query.coordinates.ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            "query parameter 'coordinates' is required",
        )
    })?;

    let data = state
        .resolver
        .find_nearest(&coordinates, query.radius, query.limit)
        .await
        .map_err(|e| map_resolve_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(super) async fn parking_by_id(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(item_id): Path<String>,
) -> Result<Json<ApiResponse<NearestParking>>, ApiError> {
    let data = state
        .resolver
        .find_by_id(&item_id)
        .await
        .map_err(|e| map_resolve_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(data, req_id.0)))
}
