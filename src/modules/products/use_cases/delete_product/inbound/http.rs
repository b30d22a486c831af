use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::products::core::product::ProductId;
use crate::shell::errors::{ApiError, TraceId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteProductParams {
    pub version: u64,
}

pub async fn handle(
    State(state): State<AppState>,
    trace_id: TraceId,
    id: Result<Path<ProductId>, PathRejection>,
    params: Result<Query<DeleteProductParams>, QueryRejection>,
) -> Response {
    let Ok(Path(id)) = id else {
        return ApiError::not_found(trace_id).into_response();
    };
    let Query(params) = match params {
        Ok(p) => p,
        Err(rejection) => {
            return ApiError::bad_request(trace_id, rejection.body_text()).into_response();
        }
    };

    match state.delete_product.handle(id, params.version).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => ApiError::not_found(trace_id).into_response(),
        Err(error) => ApiError::from_application(trace_id, error).into_response(),
    }
}
