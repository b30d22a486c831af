use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::{IntoResponse, Response},
};

use crate::modules::products::core::product::ProductId;
use crate::shell::errors::{ApiError, TraceId};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    trace_id: TraceId,
    id: Result<Path<ProductId>, PathRejection>,
) -> Response {
    // An id that is not a UUID cannot name any product.
    let Ok(Path(id)) = id else {
        return ApiError::not_found(trace_id).into_response();
    };

    match state.get_product.handle(id).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => ApiError::not_found(trace_id).into_response(),
        Err(error) => ApiError::from_application(trace_id, error).into_response(),
    }
}
